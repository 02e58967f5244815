use crate::Vocabulary;
use core::fmt;
use core::str::FromStr;

/// Number of leading entries sampled under [`SamplingPolicy::LegacyPrefix`].
pub const LEGACY_PREFIX_LEN: usize = 10;

/// Which part of a vocabulary a draw may select from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SamplingPolicy {
    /// Uniform over every token of the vocabulary.
    #[default]
    Full,
    /// Uniform over the first [`LEGACY_PREFIX_LEN`] tokens only, so the letter
    /// vocabulary never yields anything past `"j"`.
    LegacyPrefix,
}

impl SamplingPolicy {
    /// Exclusive upper bound of the indices this policy draws from `vocab`.
    ///
    /// Never zero, since vocabularies are non-empty.
    pub fn bound(self, vocab: &Vocabulary) -> usize {
        match self {
            Self::Full => vocab.len(),
            Self::LegacyPrefix => vocab.len().min(LEGACY_PREFIX_LEN),
        }
    }

    /// Returns `true` if `token` may be produced from `vocab` under this
    /// policy.
    pub fn permits(self, vocab: &Vocabulary, token: &str) -> bool {
        vocab
            .position(token)
            .is_some_and(|index| index < self.bound(vocab))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::LegacyPrefix => "legacy-prefix",
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sampling policy `{}` (expected `full` or `legacy-prefix`)",
            self.0
        )
    }
}

impl core::error::Error for ParsePolicyError {}

impl FromStr for SamplingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "legacy-prefix" => Ok(Self::LegacyPrefix),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}
