//! Sensor reading value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single normalized PM2.5 reading for a city.
///
/// Produced by the external history store and immutable once read. Any
/// other pollutant metadata attached to the stored record is dropped before
/// the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// PM2.5 concentration in μg/m³.
    pub pm25: f64,
    /// Time the reading was taken.
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// Create a new reading.
    pub fn new(pm25: f64, timestamp: DateTime<Utc>) -> Self {
        Self { pm25, timestamp }
    }
}

/// Sort readings chronologically, oldest first.
///
/// History providers may return readings most-recent-first or in no
/// particular order; the engine re-derives order before taking trailing
/// windows.
pub fn sort_chronological(readings: &mut [Reading]) {
    readings.sort_by_key(|r| r.timestamp);
}
