//! Forecast orchestration over an external history provider.

use chrono::Utc;
use log::{debug, warn};

use crate::core::{
    sort_chronological, Confidence, ForecastMetadata, ForecastResult, ForecastSummary,
    QuickForecast, Reading,
};
use crate::error::{ForecastError, HistoryError, Result};
use crate::models::{HourlyForecaster, WeeklyForecaster};
use crate::seasonality::{SeasonalAnalyzer, SeasonalProfile};
use crate::utils::random::{SeededUniform, ThreadRngUniform, UniformSource};

/// Algorithm name recorded in forecast metadata for traceability.
pub const ALGORITHM: &str = "Exponential Smoothing + Hourly Patterns";

/// Default historical window, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// History window used for quick dashboard forecasts, in days.
pub const QUICK_HISTORY_DAYS: u32 = 3;

/// Assumed sensor cadence: one reading per hour.
const READINGS_PER_DAY: u32 = 24;
const DAYS_PER_MONTH: u32 = 30;

/// Provider of historical readings for a city.
///
/// External collaborator: the engine has no knowledge of how readings are
/// stored or retrieved. Results may arrive most-recent-first or in no
/// particular order; the engine re-derives order as needed.
pub trait HistoryProvider {
    /// Fetch up to `limit` readings for `city`.
    fn fetch_history(
        &self,
        city: &str,
        limit: usize,
    ) -> std::result::Result<Vec<Reading>, HistoryError>;
}

/// Orchestrates the history fetch, both forecasters and result assembly.
///
/// Stateless per call: with a seed configured, every call constructs the
/// same generator; otherwise draws come from process entropy. Concurrent
/// calls share no mutable state.
pub struct ForecastEngine<P> {
    provider: P,
    hourly: HourlyForecaster,
    weekly: WeeklyForecaster,
    analyzer: SeasonalAnalyzer,
    seed: Option<u64>,
}

impl<P: HistoryProvider> ForecastEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            hourly: HourlyForecaster::new(),
            weekly: WeeklyForecaster::new(),
            analyzer: SeasonalAnalyzer::new(),
            seed: None,
        }
    }

    /// Fix the random seed for reproducible forecasts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a non-default seasonal analyzer (e.g. Monday-first numbering).
    pub fn with_analyzer(mut self, analyzer: SeasonalAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    fn rng(&self) -> Box<dyn UniformSource> {
        match self.seed {
            Some(seed) => Box::new(SeededUniform::new(seed)),
            None => Box::new(ThreadRngUniform::new()),
        }
    }

    fn fetch_sorted(&self, city: &str, limit: usize) -> Result<Vec<Reading>> {
        let mut readings = self
            .provider
            .fetch_history(city, limit)
            .map_err(|source| {
                warn!("history fetch failed for {city}: {source}");
                ForecastError::DataUnavailable {
                    city: city.to_string(),
                    source,
                }
            })?;
        sort_chronological(&mut readings);
        Ok(readings)
    }

    /// Generate the combined hourly and weekly forecast for a city.
    ///
    /// Fetches `history_days * 24` readings. An empty-but-successful
    /// history is valid input: both forecasters fall back to their
    /// synthetic branches and confidence drops to `Medium`. The call fails
    /// only when the fetch itself fails.
    pub fn generate_forecast(&self, city: &str, history_days: u32) -> Result<ForecastResult> {
        let mut rng = self.rng();
        self.generate_forecast_with_rng(city, history_days, rng.as_mut())
    }

    /// Same as [`generate_forecast`](Self::generate_forecast) with an
    /// explicit randomness source, for callers needing full determinism.
    pub fn generate_forecast_with_rng(
        &self,
        city: &str,
        history_days: u32,
        rng: &mut dyn UniformSource,
    ) -> Result<ForecastResult> {
        debug!("generating forecast for {city} over {history_days} days");
        let limit = (history_days * READINGS_PER_DAY) as usize;
        let readings = self.fetch_sorted(city, limit)?;

        let hourly = self.hourly.forecast(&readings, rng);
        let weekly = self.weekly.forecast(&readings, rng);

        let summary = ForecastSummary::from_weekly(&weekly);
        let confidence = if readings.is_empty() {
            Confidence::Medium
        } else {
            Confidence::High
        };

        Ok(ForecastResult {
            city: city.to_string(),
            generated_at: Utc::now(),
            summary,
            hourly,
            weekly,
            confidence,
            metadata: ForecastMetadata {
                sample_count: readings.len(),
                analysis_period: format!("{history_days} days"),
                algorithm: ALGORITHM.to_string(),
            },
        })
    }

    /// Aggregate a longer window into hour-of-day and weekday averages.
    ///
    /// Fetches `months * 30 * 24` readings, assuming hourly cadence.
    pub fn analyze_patterns(&self, city: &str, months: u32) -> Result<SeasonalProfile> {
        debug!("analyzing seasonal patterns for {city} over {months} months");
        let limit = (months * DAYS_PER_MONTH * READINGS_PER_DAY) as usize;
        let readings = self.fetch_sorted(city, limit)?;
        Ok(self.analyzer.analyze(&readings))
    }

    /// Compact dashboard view derived from a 3-day forecast.
    pub fn quick_forecast(&self, city: &str) -> Result<QuickForecast> {
        let result = self.generate_forecast(city, QUICK_HISTORY_DAYS)?;
        Ok(QuickForecast::from_result(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::utils::random::Midpoint;
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::Cell;

    struct VecProvider(Vec<Reading>);

    impl HistoryProvider for VecProvider {
        fn fetch_history(
            &self,
            _city: &str,
            limit: usize,
        ) -> std::result::Result<Vec<Reading>, HistoryError> {
            Ok(self.0.iter().take(limit).copied().collect())
        }
    }

    struct FailingProvider;

    impl HistoryProvider for FailingProvider {
        fn fetch_history(
            &self,
            _city: &str,
            _limit: usize,
        ) -> std::result::Result<Vec<Reading>, HistoryError> {
            Err(HistoryError("store offline".to_string()))
        }
    }

    struct RecordingProvider(Cell<usize>);

    impl HistoryProvider for RecordingProvider {
        fn fetch_history(
            &self,
            _city: &str,
            limit: usize,
        ) -> std::result::Result<Vec<Reading>, HistoryError> {
            self.0.set(limit);
            Ok(Vec::new())
        }
    }

    fn make_readings(values: &[f64]) -> Vec<Reading> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &pm25)| Reading::new(pm25, base + Duration::hours(i as i64)))
            .collect()
    }

    #[test]
    fn provider_failure_surfaces_as_data_unavailable() {
        let engine = ForecastEngine::new(FailingProvider);
        let err = engine
            .generate_forecast("quito", DEFAULT_HISTORY_DAYS)
            .unwrap_err();

        assert_eq!(
            err,
            ForecastError::DataUnavailable {
                city: "quito".to_string(),
                source: HistoryError("store offline".to_string()),
            }
        );
    }

    #[test]
    fn empty_history_is_not_an_error() {
        let engine = ForecastEngine::new(VecProvider(Vec::new()));
        let result = engine
            .generate_forecast("quito", DEFAULT_HISTORY_DAYS)
            .unwrap();

        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.hourly.len(), 6);
        assert_eq!(result.weekly.len(), 7);
        assert_eq!(result.metadata.sample_count, 0);
    }

    #[test]
    fn summary_counts_always_partition_the_week() {
        let engine = ForecastEngine::new(VecProvider(make_readings(&[40.0; 30]))).with_seed(5);
        let result = engine
            .generate_forecast("quito", DEFAULT_HISTORY_DAYS)
            .unwrap();

        let summary = &result.summary;
        assert_eq!(
            summary.good_days + summary.moderate_days + summary.poor_days,
            7
        );
    }

    #[test]
    fn history_backed_forecast_has_high_confidence() {
        let engine = ForecastEngine::new(VecProvider(make_readings(&[20.0, 25.0])));
        let result = engine
            .generate_forecast("quito", DEFAULT_HISTORY_DAYS)
            .unwrap();

        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.metadata.sample_count, 2);
        assert_eq!(result.metadata.analysis_period, "7 days");
        assert_eq!(result.metadata.algorithm, ALGORITHM);
    }

    #[test]
    fn fetch_limit_is_one_reading_per_hour() {
        let provider = RecordingProvider(Cell::new(0));
        let engine = ForecastEngine::new(provider);
        engine.generate_forecast("quito", 7).unwrap();
        assert_eq!(engine.provider.0.get(), 168);

        engine.analyze_patterns("quito", 3).unwrap();
        assert_eq!(engine.provider.0.get(), 2160);
    }

    #[test]
    fn seeded_engine_is_deterministic() {
        let readings = make_readings(&[30.0; 20]);
        let engine = ForecastEngine::new(VecProvider(readings)).with_seed(42);

        let a = engine.generate_forecast("quito", 7).unwrap();
        let b = engine.generate_forecast("quito", 7).unwrap();
        assert_eq!(a.hourly, b.hourly);
        assert_eq!(a.weekly, b.weekly);
    }

    #[test]
    fn unordered_history_is_sorted_before_windowing() {
        // Most-recent-first: the 7 most recent readings average 20, the
        // older ones 100. The weekly baseline must use the recent block.
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut readings = Vec::new();
        for i in (7..14).rev() {
            readings.push(Reading::new(20.0, base + Duration::hours(i)));
        }
        for i in (0..7).rev() {
            readings.push(Reading::new(100.0, base + Duration::hours(i)));
        }

        let engine = ForecastEngine::new(VecProvider(readings));
        let result = engine
            .generate_forecast_with_rng("quito", 7, &mut Midpoint)
            .unwrap();

        for day in &result.weekly {
            assert_eq!(day.pm25, 20);
        }
    }

    #[test]
    fn quick_forecast_reduces_to_the_dashboard_shape() {
        let engine = ForecastEngine::new(VecProvider(make_readings(&[20.0; 10]))).with_seed(1);
        let quick = engine.quick_forecast("quito").unwrap();

        assert_eq!(quick.city, "quito");
        assert_eq!(quick.next_hours.len(), 4);
        assert!(quick.current_category.is_some());
        assert!(["↑", "↓", "→"].contains(&quick.trend.as_str()));
        assert_eq!(quick.confidence, Confidence::High);
    }

    #[test]
    fn analyze_patterns_propagates_fetch_failure() {
        let engine = ForecastEngine::new(FailingProvider);
        let err = engine.analyze_patterns("quito", 3).unwrap_err();
        assert!(matches!(err, ForecastError::DataUnavailable { .. }));
    }

    #[test]
    fn average_category_reflects_the_weekly_mean() {
        let engine = ForecastEngine::new(VecProvider(make_readings(&[
            20.0, 22.0, 21.0, 19.0, 23.0, 20.0, 22.0,
        ])));
        let result = engine
            .generate_forecast_with_rng("quito", 7, &mut Midpoint)
            .unwrap();

        assert_eq!(result.summary.average_category, Category::Moderate);
        assert_eq!(result.summary.good_days, 7);
    }
}
