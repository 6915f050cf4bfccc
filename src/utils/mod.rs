//! Utility functions and the injectable randomness seam.

pub mod random;
pub mod stats;

pub use random::{Midpoint, SeededUniform, ThreadRngUniform, UniformSource};
pub use stats::mean;
