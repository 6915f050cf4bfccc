//! Injectable uniform randomness source.
//!
//! Both forecasters draw their bounded noise through [`UniformSource`] so
//! callers can substitute a seeded or degenerate implementation and pin the
//! output exactly.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed random draws.
pub trait UniformSource {
    /// Draw a value uniformly from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Process-entropy source backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngUniform(ThreadRng);

impl ThreadRngUniform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UniformSource for ThreadRngUniform {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.0.gen_range(low..high)
    }
}

/// Seeded source for reproducible draws.
#[derive(Debug, Clone)]
pub struct SeededUniform(StdRng);

impl SeededUniform {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl UniformSource for SeededUniform {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.0.gen_range(low..high)
    }
}

/// Degenerate source that always returns the midpoint of the range.
///
/// Fixes hourly jitter at 1.0 and weekly variation at 0, so tests can
/// assert exact predicted values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl UniformSource for Midpoint {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}
