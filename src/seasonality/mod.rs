//! Seasonal exposure patterns bucketed by hour-of-day and weekday.
//!
//! Independent of the forecasters: the analyzer aggregates a longer
//! historical window into average exposure per hour and per weekday.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::Reading;

/// Weekday numbering convention for the weekday buckets.
///
/// Bucket indices silently affect output ordering, so the convention is an
/// explicit configuration rather than a platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayNumbering {
    /// 0 = Sunday .. 6 = Saturday.
    #[default]
    SundayFirst,
    /// 0 = Monday .. 6 = Sunday (ISO-8601).
    MondayFirst,
}

impl WeekdayNumbering {
    fn index(&self, weekday: chrono::Weekday) -> u32 {
        match self {
            WeekdayNumbering::SundayFirst => weekday.num_days_from_sunday(),
            WeekdayNumbering::MondayFirst => weekday.num_days_from_monday(),
        }
    }
}

/// Average exposure at one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyAverage {
    /// Hour of day, 0..23.
    pub hour: u32,
    /// Mean PM2.5 over the bucket's samples.
    pub average: f64,
    pub sample_count: usize,
}

/// Average exposure on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayAverage {
    /// Weekday index under the analyzer's [`WeekdayNumbering`].
    pub weekday: u32,
    /// Mean PM2.5 over the bucket's samples.
    pub average: f64,
    pub sample_count: usize,
}

/// Aggregated seasonal exposure profile.
///
/// Buckets with zero samples are omitted rather than emitted with null
/// averages; both lists are sorted ascending by their index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalProfile {
    pub by_hour: Vec<HourlyAverage>,
    pub by_weekday: Vec<WeekdayAverage>,
    pub total_samples: usize,
}

/// Aggregates a historical window into per-hour and per-weekday averages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalAnalyzer {
    numbering: WeekdayNumbering,
}

impl SeasonalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default weekday numbering.
    pub fn with_numbering(numbering: WeekdayNumbering) -> Self {
        Self { numbering }
    }

    /// Get the configured weekday numbering.
    pub fn numbering(&self) -> WeekdayNumbering {
        self.numbering
    }

    /// Partition readings into 24 hour buckets and 7 weekday buckets and
    /// average each.
    pub fn analyze(&self, readings: &[Reading]) -> SeasonalProfile {
        let mut hour_sums = [(0.0f64, 0usize); 24];
        let mut weekday_sums = [(0.0f64, 0usize); 7];

        for reading in readings {
            let hour = reading.timestamp.hour() as usize;
            hour_sums[hour].0 += reading.pm25;
            hour_sums[hour].1 += 1;

            let weekday = self.numbering.index(reading.timestamp.weekday()) as usize;
            weekday_sums[weekday].0 += reading.pm25;
            weekday_sums[weekday].1 += 1;
        }

        let by_hour = hour_sums
            .iter()
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(hour, &(sum, count))| HourlyAverage {
                hour: hour as u32,
                average: sum / count as f64,
                sample_count: count,
            })
            .collect();

        let by_weekday = weekday_sums
            .iter()
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(weekday, &(sum, count))| WeekdayAverage {
                weekday: weekday as u32,
                average: sum / count as f64,
                sample_count: count,
            })
            .collect();

        SeasonalProfile {
            by_hour,
            by_weekday,
            total_samples: readings.len(),
        }
    }
}
