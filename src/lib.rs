//! # aircast
//!
//! Air-quality forecasting and classification engine.
//!
//! Ingests periodic PM2.5 readings for named cities and provides:
//! - classification of instantaneous readings into standardized
//!   air-quality categories
//! - short-horizon forecasts: six anchor hours of the current day and the
//!   next seven days
//! - seasonal exposure patterns bucketed by hour-of-day and weekday
//!
//! Persistence, HTTP serving, recommendation text and geocoding are
//! external collaborators. The engine is a pure function of its inputs
//! apart from one documented, injectable randomness source
//! ([`utils::random::UniformSource`]).

pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod seasonality;
pub mod utils;

pub use error::{ForecastError, HistoryError, Result};

pub mod prelude {
    pub use crate::core::{classify, Category, ForecastResult, QuickForecast, Reading};
    pub use crate::engine::{ForecastEngine, HistoryProvider, DEFAULT_HISTORY_DAYS};
    pub use crate::error::{ForecastError, HistoryError, Result};
    pub use crate::models::{ExponentialSmoother, HourlyForecaster, WeeklyForecaster};
    pub use crate::report::render_report;
    pub use crate::seasonality::{SeasonalAnalyzer, SeasonalProfile};
    pub use crate::utils::random::UniformSource;
}
