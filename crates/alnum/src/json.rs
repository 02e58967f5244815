use crate::{Result, ResultSet};

impl ResultSet {
    /// Encodes the set as a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let s = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(s)
    }

    /// Decodes a set previously produced by [`ResultSet::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if `s` is not a JSON array of
    /// records.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, GeneratorConfig, ResultSet, generate};

    #[test]
    fn round_trip_preserves_records_and_mapping() {
        let config = GeneratorConfig::builder().workers(25).seed(3).build().unwrap();
        let set = generate(&config).unwrap();

        for pretty in [false, true] {
            let decoded = ResultSet::from_json(&set.to_json(pretty).unwrap()).unwrap();
            assert_eq!(decoded.len(), set.len());
            assert_eq!(decoded.mapping(), set.mapping());
            assert_eq!(decoded, set);
        }
    }

    #[test]
    fn malformed_input_is_a_serialization_error() {
        let err = ResultSet::from_json(r#"[{"anAlphabet": 1}]"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(!err.is_config());
    }

    #[test]
    fn compact_output_shape() {
        let config = GeneratorConfig::builder().workers(1).seed(0).build().unwrap();
        let set = generate(&config).unwrap();
        let r = &set.records()[0];
        let expected = format!(
            r#"[{{"anAlphabet":"{d}","aNumber":"{l}","AlNum":{{"{d}":"{l}"}}}}]"#,
            l = r.letter,
            d = r.digit
        );
        assert_eq!(set.to_json(false).unwrap(), expected);
    }
}
