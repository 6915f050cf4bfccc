//! Error types for the aircast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Failure reported by a history provider.
///
/// The engine never constructs these itself; they originate in the external
/// store and are carried through unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("history fetch failed: {0}")]
pub struct HistoryError(pub String);

/// Errors that can occur while generating forecasts.
///
/// Sparse or empty history is *not* an error: the forecasters fall back to
/// documented synthetic branches so a best-effort forecast is always
/// returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The historical-data fetch for a city failed.
    #[error("historical data unavailable for {city}")]
    DataUnavailable {
        city: String,
        #[source]
        source: HistoryError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
