use crate::{Error, Result};
use std::sync::Arc;

const DIGITS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
const LETTERS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

/// An ordered, immutable, non-empty sequence of candidate tokens.
///
/// Cloning is cheap: the tokens are reference-counted so every worker of a
/// run can hold the same vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    name: Arc<str>,
    tokens: Arc<[String]>,
}

impl Vocabulary {
    /// Builds a vocabulary from `tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVocabulary`] when `tokens` is empty.
    pub fn new<I, S>(name: &str, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Arc<[String]> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(Error::EmptyVocabulary {
                name: name.to_owned(),
            });
        }
        Ok(Self {
            name: Arc::from(name),
            tokens,
        })
    }

    /// The digit tokens `"1"` through `"10"`.
    pub fn digits() -> Self {
        Self::from_static("digits", &DIGITS)
    }

    /// The letter tokens `"a"` through `"z"`.
    pub fn letters() -> Self {
        Self::from_static("letters", &LETTERS)
    }

    fn from_static(name: &str, tokens: &[&str]) -> Self {
        Self {
            name: Arc::from(name),
            tokens: tokens.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.position(token).is_some()
    }

    /// Index of the first occurrence of `token`.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }
}
