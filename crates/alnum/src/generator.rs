use crate::{Draw, Error, RandSource, Result, SamplingPolicy, Vocabulary};

/// Number of workers used when none is configured.
pub const DEFAULT_WORKERS: usize = 10;

/// Configuration for one generation run.
///
/// Every run builds its own sources and collector from this value, so a
/// config can be reused for any number of independent runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of workers, and therefore of records produced.
    pub workers: usize,
    /// Master seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub policy: SamplingPolicy,
    pub letters: Vocabulary,
    pub digits: Vocabulary,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            seed: None,
            policy: SamplingPolicy::default(),
            letters: Vocabulary::letters(),
            digits: Vocabulary::digits(),
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Checks the config before any worker is spawned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWorkerCount`] if `workers` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidWorkerCount {
                workers: self.workers,
            });
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn policy(mut self, policy: SamplingPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn letters(mut self, letters: Vocabulary) -> Self {
        self.config.letters = letters;
        self
    }

    pub fn digits(mut self, digits: Vocabulary) -> Self {
        self.config.digits = digits;
        self
    }

    /// Validates and returns the config.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Performs a single worker's draw.
///
/// The digit index is drawn first, then the letter index, each bounded by
/// `policy`.
pub fn draw<R>(
    worker: usize,
    letters: &Vocabulary,
    digits: &Vocabulary,
    policy: SamplingPolicy,
    rng: &mut R,
) -> Draw
where
    R: RandSource,
{
    let digit = pick(digits, policy, rng);
    let letter = pick(letters, policy, rng);
    Draw {
        worker,
        digit,
        letter,
    }
}

fn pick<R: RandSource>(vocab: &Vocabulary, policy: SamplingPolicy, rng: &mut R) -> String {
    let bound = policy.bound(vocab);
    // A misbehaving source is clamped rather than allowed to index past the
    // permitted range.
    let index = rng.index(bound).min(bound - 1);
    vocab.tokens()[index].clone()
}
