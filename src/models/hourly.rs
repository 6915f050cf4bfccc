//! Hourly forecast from a historical baseline and a fixed diurnal pattern.

use crate::core::{classify, HourlyPrediction, Reading};
use crate::utils::random::UniformSource;
use crate::utils::stats::mean;

/// Anchor hours at which predictions are produced, ascending.
pub const ANCHOR_HOURS: [u32; 6] = [6, 9, 12, 15, 18, 21];

/// Baseline assumed when no history exists (a clean day).
pub const DEFAULT_BASELINE: f64 = 15.0;

/// Projects PM2.5 levels at fixed hours of the current day.
///
/// Each anchor hour scales a shared historical-average baseline by a fixed
/// diurnal multiplier and bounded multiplicative jitter. Hours are
/// evaluated independently; no hour depends on another hour's predicted
/// value.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourlyForecaster;

impl HourlyForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Diurnal multiplier approximating the daily pollution cycle.
    ///
    /// Hours outside the pattern table fall back to 1.0, though only table
    /// hours are anchor hours.
    fn diurnal_multiplier(hour: u32) -> f64 {
        match hour {
            6 => 0.8,
            9 => 1.2,
            12 => 1.4,
            15 => 1.1,
            18 => 1.3,
            21 => 0.9,
            _ => 1.0,
        }
    }

    /// Forecast the six anchor hours from the given history.
    ///
    /// The baseline is the mean PM2.5 over `readings`, or
    /// [`DEFAULT_BASELINE`] when the history is empty. Jitter is drawn per
    /// hour from `uniform(0.9, 1.1)`; pass a deterministic
    /// [`UniformSource`] to pin the output.
    pub fn forecast(
        &self,
        readings: &[Reading],
        rng: &mut dyn UniformSource,
    ) -> Vec<HourlyPrediction> {
        let baseline = if readings.is_empty() {
            DEFAULT_BASELINE
        } else {
            let values: Vec<f64> = readings.iter().map(|r| r.pm25).collect();
            mean(&values)
        };

        ANCHOR_HOURS
            .iter()
            .map(|&hour| {
                let factor = Self::diurnal_multiplier(hour);
                let jitter = rng.uniform(0.9, 1.1);
                let pm25 = (baseline * factor * jitter).round() as u32;
                let category = classify(pm25 as f64);

                HourlyPrediction {
                    hour_label: format!("{hour:02}:00"),
                    category,
                    severity_code: category.severity_code().to_string(),
                    pm25,
                    description: format!("{category} PM2.5:{pm25} μg/m³"),
                }
            })
            .collect()
    }
}
