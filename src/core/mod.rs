//! Core data structures for air-quality forecasting.

mod category;
mod forecast;
mod reading;

pub use category::{classify, Category};
pub use forecast::{
    Confidence, DailyPrediction, ForecastMetadata, ForecastResult, ForecastSummary,
    HourlyPrediction, QuickForecast, TrendArrow,
};
pub use reading::{sort_chronological, Reading};
