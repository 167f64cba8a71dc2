//! Random source port — the only source of nondeterminism in a simulation.
//!
//! The generator owns its source exclusively, so implementations take
//! `&mut self` and need no interior locking. Tests substitute scripted
//! sources to pin every draw.

/// Draws used by the sensor generator.
pub trait RandomSource {
    /// A value uniformly distributed in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// A value from a normal distribution with the given mean and standard
    /// deviation.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// An index uniformly distributed in `0..len`. Returns `0` when `len` is `0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).gaussian(mean, std_dev)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).gaussian(mean, std_dev)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
