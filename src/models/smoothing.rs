//! Exponential smoothing primitive.
//!
//! Building block for callers wanting trend-damped series. The hourly and
//! weekly forecasters work from raw baselines and do not smooth their
//! input.

use crate::error::{ForecastError, Result};

/// Default smoothing parameter.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Exponential smoother with a fixed smoothing parameter.
///
/// The recurrence is `S[0] = y[0]`, `S[i] = α·y[i] + (1−α)·S[i−1]` with
/// α in (0, 1]. Higher α tracks recent values more closely; α = 1
/// reproduces the input.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoother {
    alpha: f64,
}

impl ExponentialSmoother {
    /// Create a smoother, rejecting α outside `(0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth an ordered sequence.
    ///
    /// The output has the same length as the input; an empty input yields
    /// an empty output.
    pub fn smooth(&self, values: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(values.len());
        let Some(&first) = values.first() else {
            return out;
        };

        let mut level = first;
        out.push(level);
        for &y in &values[1..] {
            level = self.alpha * y + (1.0 - self.alpha) * level;
            out.push(level);
        }
        out
    }
}

impl Default for ExponentialSmoother {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Smooth `values` with the given α.
pub fn smooth(values: &[f64], alpha: f64) -> Result<Vec<f64>> {
    Ok(ExponentialSmoother::new(alpha)?.smooth(values))
}
