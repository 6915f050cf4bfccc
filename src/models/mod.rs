//! Forecasting models.

mod hourly;
mod smoothing;
mod weekly;

pub use hourly::{HourlyForecaster, ANCHOR_HOURS, DEFAULT_BASELINE};
pub use smoothing::{smooth, ExponentialSmoother, DEFAULT_ALPHA};
pub use weekly::{WeeklyForecaster, DAY_LABELS};
