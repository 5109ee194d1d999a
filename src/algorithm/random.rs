//! Injectable random source for noise fill and center selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform draws used by the generator
///
/// Wraps any `Rng` so tests can inject a seeded source while production
/// callers use an entropy-seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic selector
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing random source
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform index in `0..bound`, or 0 when `bound` is 0
    pub fn index_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    /// Uniform cell `[x, y]` of a `width` x `height` map
    pub fn cell(&mut self, width: usize, height: usize) -> [usize; 2] {
        [self.index_below(width), self.index_below(height)]
    }
}
