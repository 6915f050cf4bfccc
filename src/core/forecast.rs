//! Forecast result structures consumed by the JSON and text layers.
//!
//! Field names are part of the wire contract with downstream consumers and
//! must not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::category::{classify, Category};

/// Predicted conditions at one anchor hour of the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPrediction {
    /// Clock label, `"HH:00"`.
    pub hour_label: String,
    pub category: Category,
    /// Severity code of `category` (`"A01"`..`"A05"`).
    pub severity_code: String,
    /// Predicted PM2.5, rounded to a whole μg/m³.
    pub pm25: u32,
    /// Human-readable line, `"{category} PM2.5:{value} μg/m³"`.
    pub description: String,
}

/// Direction of a day's predicted value relative to the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendArrow {
    #[serde(rename = "↑")]
    Rising,
    #[serde(rename = "↓")]
    Falling,
    #[serde(rename = "")]
    Steady,
}

impl TrendArrow {
    /// Day-over-day direction: how `current` moved relative to `previous`.
    pub fn from_change(previous: u32, current: u32) -> Self {
        match current.cmp(&previous) {
            std::cmp::Ordering::Greater => TrendArrow::Rising,
            std::cmp::Ordering::Less => TrendArrow::Falling,
            std::cmp::Ordering::Equal => TrendArrow::Steady,
        }
    }

    /// Arrow glyph; empty for [`TrendArrow::Steady`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendArrow::Rising => "↑",
            TrendArrow::Falling => "↓",
            TrendArrow::Steady => "",
        }
    }
}

impl std::fmt::Display for TrendArrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted daily value for one day of the coming week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrediction {
    /// Weekday abbreviation, Monday-first (`"Mon"`..`"Sun"`).
    pub day_label: String,
    /// Predicted PM2.5 in μg/m³, within `[10, 150]` on the baseline path.
    pub pm25: u32,
    /// Empty for the first day of the generated week.
    pub trend_arrow: TrendArrow,
}

/// Confidence attached to a forecast.
///
/// `High` whenever any historical readings backed the forecast, `Medium`
/// when everything came from the synthetic fallback branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

/// Aggregate view over the 7 daily predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    /// Days with predicted PM2.5 ≤ 35.
    pub good_days: usize,
    /// Days with predicted PM2.5 in (35, 55].
    pub moderate_days: usize,
    /// Remaining days.
    pub poor_days: usize,
    /// Classification of the mean predicted value across the week.
    pub average_category: Category,
}

impl ForecastSummary {
    /// Summarize a week of daily predictions.
    ///
    /// Day counts always partition the week: `good + moderate + poor`
    /// equals the number of predictions.
    pub fn from_weekly(weekly: &[DailyPrediction]) -> Self {
        let good_days = weekly.iter().filter(|d| d.pm25 <= 35).count();
        let moderate_days = weekly
            .iter()
            .filter(|d| d.pm25 > 35 && d.pm25 <= 55)
            .count();
        let poor_days = weekly.len() - good_days - moderate_days;

        let mean = if weekly.is_empty() {
            0.0
        } else {
            weekly.iter().map(|d| d.pm25 as f64).sum::<f64>() / weekly.len() as f64
        };

        Self {
            good_days,
            moderate_days,
            poor_days,
            average_category: classify(mean),
        }
    }
}

/// Traceability metadata attached to every forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetadata {
    /// Number of historical readings that backed the forecast.
    pub sample_count: usize,
    /// Requested history window, e.g. `"7 days"`.
    pub analysis_period: String,
    /// Name of the forecasting algorithm.
    pub algorithm: String,
}

/// Combined forecast for a city: six anchor-hour predictions for today and
/// seven daily predictions for the coming week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub city: String,
    pub generated_at: DateTime<Utc>,
    pub summary: ForecastSummary,
    pub hourly: Vec<HourlyPrediction>,
    pub weekly: Vec<DailyPrediction>,
    pub confidence: Confidence,
    pub metadata: ForecastMetadata,
}

/// Compact dashboard view derived from a full forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickForecast {
    pub city: String,
    /// Conditions at the first anchor hour; `None` if the forecast carried
    /// no hourly entries.
    pub current_category: Option<Category>,
    pub current_pm25: u32,
    /// Tomorrow's direction relative to today, `"→"` when flat.
    pub trend: String,
    /// The first four anchor-hour predictions.
    pub next_hours: Vec<HourlyPrediction>,
    pub confidence: Confidence,
}

impl QuickForecast {
    /// Reduce a full forecast to the dashboard shape.
    pub fn from_result(result: ForecastResult) -> Self {
        let trend = result
            .weekly
            .get(1)
            .map(|d| d.trend_arrow)
            .unwrap_or(TrendArrow::Steady);
        let current = result.hourly.first().cloned();

        let mut next_hours = result.hourly;
        next_hours.truncate(4);

        Self {
            city: result.city,
            current_category: current.as_ref().map(|h| h.category),
            current_pm25: current.map(|h| h.pm25).unwrap_or(0),
            trend: match trend {
                TrendArrow::Steady => "→".to_string(),
                arrow => arrow.as_str().to_string(),
            },
            next_hours,
            confidence: result.confidence,
        }
    }
}
