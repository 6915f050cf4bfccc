//! Property-based tests for the forecasting components.
//!
//! These verify invariants that must hold for all valid inputs, using
//! randomly generated histories and seeds.

use aircast::core::{classify, Category, ForecastSummary, Reading, TrendArrow};
use aircast::models::{smooth, HourlyForecaster, WeeklyForecaster};
use aircast::utils::random::SeededUniform;
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn make_readings(values: &[f64]) -> Vec<Reading> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &pm25)| Reading::new(pm25, base + Duration::hours(i as i64)))
        .collect()
}

/// Strategy for histories of plausible PM2.5 values, possibly empty.
fn history_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..300.0f64, 0..40)
}

proptest! {
    #[test]
    fn classification_is_total_and_consistent(pm25 in 0.0..2000.0f64) {
        let category = classify(pm25);
        let expected = if pm25 <= 12.0 {
            Category::Good
        } else if pm25 <= 35.0 {
            Category::Moderate
        } else if pm25 <= 55.0 {
            Category::Poor
        } else if pm25 <= 150.0 {
            Category::VeryPoor
        } else {
            Category::Hazardous
        };
        prop_assert_eq!(category, expected);
    }

    #[test]
    fn smoothing_preserves_length(
        values in prop::collection::vec(0.0..500.0f64, 0..60),
        alpha in 0.01..1.0f64,
    ) {
        let out = smooth(&values, alpha).unwrap();
        prop_assert_eq!(out.len(), values.len());
    }

    #[test]
    fn smoothed_values_stay_within_the_input_range(
        values in prop::collection::vec(1.0..500.0f64, 1..60),
        alpha in 0.01..1.0f64,
    ) {
        let out = smooth(&values, alpha).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for s in out {
            prop_assert!(s >= min - 1e-9 && s <= max + 1e-9);
        }
    }

    #[test]
    fn hourly_forecast_always_has_six_ascending_hours(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let predictions = HourlyForecaster::new().forecast(&make_readings(&history), &mut rng);

        prop_assert_eq!(predictions.len(), 6);
        let labels: Vec<&str> = predictions.iter().map(|p| p.hour_label.as_str()).collect();
        prop_assert_eq!(labels, vec!["06:00", "09:00", "12:00", "15:00", "18:00", "21:00"]);
    }

    #[test]
    fn hourly_predictions_are_classified_consistently(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let predictions = HourlyForecaster::new().forecast(&make_readings(&history), &mut rng);

        for p in predictions {
            prop_assert_eq!(p.category, classify(p.pm25 as f64));
            prop_assert_eq!(p.severity_code.as_str(), p.category.severity_code());
        }
    }

    #[test]
    fn weekly_forecast_shape_is_invariant(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let week = WeeklyForecaster::new().forecast(&make_readings(&history), &mut rng);

        prop_assert_eq!(week.len(), 7);
        prop_assert_eq!(week[0].trend_arrow, TrendArrow::Steady);
        prop_assert_eq!(week[0].day_label.as_str(), "Mon");
        prop_assert_eq!(week[6].day_label.as_str(), "Sun");
    }

    #[test]
    fn weekly_values_stay_within_bounds(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let week = WeeklyForecaster::new().forecast(&make_readings(&history), &mut rng);

        for day in &week {
            prop_assert!((10..=150).contains(&day.pm25), "got {}", day.pm25);
        }
    }

    #[test]
    fn weekly_arrows_follow_the_predicted_values(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let week = WeeklyForecaster::new().forecast(&make_readings(&history), &mut rng);

        for i in 1..week.len() {
            let expected = TrendArrow::from_change(week[i - 1].pm25, week[i].pm25);
            prop_assert_eq!(week[i].trend_arrow, expected);
        }
    }

    #[test]
    fn summary_day_counts_partition_the_week(
        history in history_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SeededUniform::new(seed);
        let week = WeeklyForecaster::new().forecast(&make_readings(&history), &mut rng);
        let summary = ForecastSummary::from_weekly(&week);

        prop_assert_eq!(
            summary.good_days + summary.moderate_days + summary.poor_days,
            7
        );
    }
}
