//! Weekly trend forecast from a trailing 7-day baseline.

use crate::core::{DailyPrediction, Reading, TrendArrow};
use crate::utils::random::UniformSource;
use crate::utils::stats::mean;

/// Monday-first weekday labels for the generated week.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Bounds applied to baseline-derived daily predictions, in μg/m³.
const PM25_FLOOR: f64 = 10.0;
const PM25_CEIL: f64 = 150.0;

/// Projects a daily PM2.5 value and direction indicator for each day of
/// the coming week.
///
/// With history available, every day draws from the mean of the most
/// recent 7 readings plus bounded noise. Without history a synthetic week
/// is generated so the engine still returns a best-effort forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyForecaster;

impl WeeklyForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Forecast the coming week, Monday-first.
    ///
    /// Baseline path: `clamp(round(baseline + uniform(−10, 10)), 10, 150)`
    /// where the baseline is the mean of the last 7 chronological readings
    /// (all of them when fewer exist). Empty history:
    /// `floor(35 + uniform(0, 30))` per day.
    ///
    /// The first day never carries an arrow; each later day compares
    /// against the previous day's predicted value.
    pub fn forecast(
        &self,
        readings: &[Reading],
        rng: &mut dyn UniformSource,
    ) -> Vec<DailyPrediction> {
        let values: Vec<u32> = if readings.is_empty() {
            DAY_LABELS
                .iter()
                .map(|_| (35.0 + rng.uniform(0.0, 30.0)).floor() as u32)
                .collect()
        } else {
            let tail = &readings[readings.len().saturating_sub(7)..];
            let tail_values: Vec<f64> = tail.iter().map(|r| r.pm25).collect();
            let baseline = mean(&tail_values);

            DAY_LABELS
                .iter()
                .map(|_| {
                    (baseline + rng.uniform(-10.0, 10.0))
                        .round()
                        .clamp(PM25_FLOOR, PM25_CEIL) as u32
                })
                .collect()
        };

        DAY_LABELS
            .iter()
            .zip(values.iter())
            .enumerate()
            .map(|(i, (&label, &pm25))| DailyPrediction {
                day_label: label.to_string(),
                pm25,
                trend_arrow: if i == 0 {
                    TrendArrow::Steady
                } else {
                    TrendArrow::from_change(values[i - 1], pm25)
                },
            })
            .collect()
    }
}
