use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// one in tests. Implementations are owned by exactly one worker, so they take
/// `&mut self` and need no internal synchronization.
///
/// # Example
/// ```
/// use alnum::RandSource;
///
/// struct FixedRand(usize);
/// impl RandSource for FixedRand {
///     fn index(&mut self, bound: usize) -> usize {
///         self.0 % bound
///     }
/// }
///
/// let mut rng = FixedRand(12);
/// assert_eq!(rng.index(10), 2);
/// ```
pub trait RandSource {
    /// Returns an index in `[0, bound)`. Callers guarantee `bound > 0`.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: RandSource + ?Sized> RandSource for &mut R {
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// A `RandSource` backed by [`StdRng`], seeded once at construction.
///
/// The generator is never reseeded, so two instances built from the same seed
/// yield the same sequence of indices.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds the source for `worker` from a run's master seed.
    pub fn for_worker(master: u64, worker: usize) -> Self {
        Self::new(worker_seed(master, worker))
    }
}

impl RandSource for SeededRandom {
    fn index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Derives an independent seed for `worker` from `master`.
///
/// Worker indices are mixed with a SplitMix64 finalizer, so adjacent workers
/// start from unrelated `StdRng` states.
pub const fn worker_seed(master: u64, worker: usize) -> u64 {
    let mut z = master.wrapping_add((worker as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Draws a fresh master seed from the thread-local RNG.
pub fn random_seed() -> u64 {
    rand::rng().random()
}
