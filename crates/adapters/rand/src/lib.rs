//! # sensorsim-adapter-rand
//!
//! [`RandomSource`] backed by the `rand` ecosystem.
//!
//! | Draw | Implementation |
//! |------|----------------|
//! | `uniform` | `Rng::gen_range` over an inclusive range |
//! | `gaussian` | `rand_distr::Normal` |
//! | `chance` | `Rng::gen::<f64>() < p` |
//! | `pick` | `Rng::gen_range(0..len)` |
//!
//! ## Dependency rule
//!
//! Depends on `sensorsim-app` (port traits) only.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use sensorsim_app::ports::RandomSource;

/// [`RandomSource`] wrapping any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seed a [`StdRng`] from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seed a [`StdRng`] deterministically, for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // Normal::new only rejects non-finite or negative deviations.
        Normal::new(mean, std_dev).map_or(mean, |normal| normal.sample(&mut self.rng))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.r#gen::<f64>() < probability
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
