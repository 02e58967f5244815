use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Digit-token to letter-token mapping aggregated over a run.
pub type Mapping = BTreeMap<String, String>;

/// The raw output of one worker, before aggregation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub worker: usize,
    pub digit: String,
    pub letter: String,
}

/// One generated pairing plus the run's aggregated mapping.
///
/// Every record of a [`ResultSet`] points at the same mapping. The mapping is
/// frozen by the collector before any record is handed out, so sharing it is
/// read-only.
///
/// The wire names are inherited from the established output format and are
/// crossed with their contents: `"anAlphabet"` holds the digit-token and
/// `"aNumber"` holds the letter-token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "anAlphabet")]
    pub digit: String,
    #[serde(rename = "aNumber")]
    pub letter: String,
    #[serde(rename = "AlNum")]
    pub mapping: Arc<Mapping>,
}

impl Record {
    /// The code for this pairing: letter-token followed by digit-token
    /// (`"aNumber"` then `"anAlphabet"`).
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(self.letter.len() + self.digit.len());
        code.push_str(&self.letter);
        code.push_str(&self.digit);
        code
    }
}

/// The ordered records of one run.
///
/// Serializes as a plain sequence of [`Record`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<Record>,
    mapping: Arc<Mapping>,
}

impl ResultSet {
    pub(crate) fn new(records: Vec<Record>, mapping: Arc<Mapping>) -> Self {
        Self { records, mapping }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The aggregated mapping shared by all records.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn codes(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::code)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Serialize for ResultSet {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(s)
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(d)?;
        // Each decoded record carries its own copy; the last one reflects the
        // final aggregate.
        let mapping = records
            .last()
            .map(|r| Arc::clone(&r.mapping))
            .unwrap_or_default();
        Ok(Self { records, mapping })
    }
}
