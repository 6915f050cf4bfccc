//! Air-quality categories and PM2.5 classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air-quality category for a PM2.5 concentration.
///
/// Ordered from best to worst. Boundaries are fixed, non-overlapping and
/// closed-below/open-above: a value exactly on a boundary belongs to the
/// lower category (35.0 is `Moderate`, not `Poor`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// PM2.5 ≤ 12 μg/m³.
    Good,
    /// PM2.5 in (12, 35] μg/m³.
    Moderate,
    /// PM2.5 in (35, 55] μg/m³.
    Poor,
    /// PM2.5 in (55, 150] μg/m³.
    #[serde(rename = "Very Poor")]
    VeryPoor,
    /// PM2.5 above 150 μg/m³.
    Hazardous,
}

impl Category {
    /// Severity code used by downstream consumers.
    pub fn severity_code(&self) -> &'static str {
        match self {
            Category::Good => "A01",
            Category::Moderate => "A02",
            Category::Poor => "A03",
            Category::VeryPoor => "A04",
            Category::Hazardous => "A05",
        }
    }

    /// Display color associated with the category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Good => "#00E400",
            Category::Moderate => "#FFFF00",
            Category::Poor => "#FF7E00",
            Category::VeryPoor => "#FF0000",
            Category::Hazardous => "#8F3F97",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a PM2.5 concentration into an air-quality category.
///
/// Pure and total over valid non-negative input; rejecting or defaulting
/// negative or missing values is the caller's responsibility.
pub fn classify(pm25: f64) -> Category {
    if pm25 <= 12.0 {
        Category::Good
    } else if pm25 <= 35.0 {
        Category::Moderate
    } else if pm25 <= 55.0 {
        Category::Poor
    } else if pm25 <= 150.0 {
        Category::VeryPoor
    } else {
        Category::Hazardous
    }
}
