//! Report aggregation engine.
//!
//! `ReportAggregator::build_report` is the workflow core: dispatch the
//! precipitation and temperature fetches concurrently, join on both results,
//! reduce them into summary statistics, and persist one `WeatherReport`.
//!
//! Statistics are computed over `rust_decimal::Decimal` and rounded to one
//! decimal place with `round_dp`, i.e. banker's rounding
//! (round-half-to-even). That rule applies to all four persisted statistics.

use crate::ingest::WeatherDataClient;
use crate::model::{PrecipitationRecord, ReportError, TemperatureRecord, WeatherReport, WeatherType};
use crate::store::ReportStore;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::{mpsc, Arc};
use threadpool::ThreadPool;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Sums rainfall and snowfall over a precipitation window.
///
/// Records whose weather type is neither rain nor snow count toward neither
/// total. Each sum is rounded to one decimal place (half-to-even). An empty
/// window yields (0, 0) — a dry week is a valid report.
pub fn rain_and_snow_totals(records: &[PrecipitationRecord]) -> (Decimal, Decimal) {
    let mut rain = Decimal::ZERO;
    let mut snow = Decimal::ZERO;

    for record in records {
        match record.weather_type {
            WeatherType::Rain => rain += record.amount_inches,
            WeatherType::Snow => snow += record.amount_inches,
            WeatherType::Other => {}
        }
    }

    (rain.round_dp(1), snow.round_dp(1))
}

/// Arithmetic means of the high and low temperatures over a window, each
/// rounded to one decimal place (half-to-even).
///
/// # Errors
/// - `ReportError::InsufficientData` — the window holds no temperature
///   observations. A mean over zero elements is undefined; the build fails
///   rather than persisting a fabricated average.
pub fn temperature_averages(
    records: &[TemperatureRecord],
) -> Result<(Decimal, Decimal), ReportError> {
    if records.is_empty() {
        return Err(ReportError::InsufficientData(
            "no temperature observations in window".to_string(),
        ));
    }

    let count = Decimal::from(records.len() as u64);
    let mut high_sum = Decimal::ZERO;
    let mut low_sum = Decimal::ZERO;

    for record in records {
        high_sum += record.temp_high_f;
        low_sum += record.temp_low_f;
    }

    Ok(((high_sum / count).round_dp(1), (low_sum / count).round_dp(1)))
}

// ---------------------------------------------------------------------------
// Capabilities: observability and caching
// ---------------------------------------------------------------------------

/// Observability events emitted during a report build. Informational only —
/// implementations must not affect workflow behavior.
pub trait ReportEvents: Send + Sync {
    fn totals_computed(&self, zip: &str, days: u32, rain: Decimal, snow: Decimal);
    fn averages_computed(&self, zip: &str, days: u32, high: Decimal, low: Decimal);
    fn report_persisted(&self, report: &WeatherReport);
}

/// Default event sink: service log lines on stdout.
pub struct StdoutEvents;

impl ReportEvents for StdoutEvents {
    fn totals_computed(&self, zip: &str, days: u32, rain: Decimal, snow: Decimal) {
        println!(
            "   {} over last {} days: rain total {} in, snow total {} in",
            zip, days, rain, snow
        );
    }

    fn averages_computed(&self, zip: &str, days: u32, high: Decimal, low: Decimal) {
        println!(
            "   {} over last {} days: average high {} F, average low {} F",
            zip, days, high, low
        );
    }

    fn report_persisted(&self, report: &WeatherReport) {
        println!(
            "✓ Report persisted for {} (id {:?})",
            report.zip_code, report.id
        );
    }
}

/// Cache seam in front of the aggregation engine.
///
/// A hit skips the upstream round trips entirely. The shipped implementation
/// is `NoCache`, so the always-fetch path is the current behavior; an
/// eviction-policy-bearing implementation can slot in without touching the
/// engine.
pub trait ReportCache: Send + Sync {
    fn lookup(&self, zip: &str, days: u32) -> Option<WeatherReport>;
    fn store(&self, report: &WeatherReport);
}

/// Always-miss cache.
pub struct NoCache;

impl ReportCache for NoCache {
    fn lookup(&self, _zip: &str, _days: u32) -> Option<WeatherReport> {
        None
    }

    fn store(&self, _report: &WeatherReport) {}
}

// ---------------------------------------------------------------------------
// Aggregation engine
// ---------------------------------------------------------------------------

/// Orchestrates one report build: concurrent fetches, reduce, persist.
///
/// Holds no mutable state across invocations; concurrent builds only share
/// the (immutable) upstream client handle and the worker pool.
pub struct ReportAggregator {
    client: Arc<dyn WeatherDataClient>,
    cache: Arc<dyn ReportCache>,
    events: Arc<dyn ReportEvents>,
    pool: ThreadPool,
}

impl ReportAggregator {
    /// Engine with the default capabilities (no cache, stdout events).
    pub fn new(client: Arc<dyn WeatherDataClient>) -> Self {
        Self::with_capabilities(client, Arc::new(NoCache), Arc::new(StdoutEvents))
    }

    pub fn with_capabilities(
        client: Arc<dyn WeatherDataClient>,
        cache: Arc<dyn ReportCache>,
        events: Arc<dyn ReportEvents>,
    ) -> Self {
        Self {
            client,
            cache,
            events,
            // One worker per upstream source.
            pool: ThreadPool::new(2),
        }
    }

    /// Builds, persists, and returns the weather report for a zip code over
    /// the trailing `days` window.
    ///
    /// `days` is range-validated at the request boundary; the engine defends
    /// only against an empty zip. The two fetches are dispatched without
    /// waiting on one another and joined before the reduce step — a barrier,
    /// not a race. Either fetch failing aborts the whole build after both
    /// have settled; nothing is persisted on any failure path.
    pub fn build_report(
        &self,
        store: &mut dyn ReportStore,
        zip: &str,
        days: u32,
    ) -> Result<WeatherReport, ReportError> {
        if zip.trim().is_empty() {
            return Err(ReportError::InvalidRequest(
                "zip must not be empty".to_string(),
            ));
        }

        if let Some(cached) = self.cache.lookup(zip, days) {
            return Ok(cached);
        }

        let (precip_tx, precip_rx) = mpsc::channel();
        let (temp_tx, temp_rx) = mpsc::channel();

        let precip_client = Arc::clone(&self.client);
        let precip_zip = zip.to_string();
        self.pool.execute(move || {
            let _ = precip_tx.send(precip_client.fetch_precipitation(&precip_zip, days));
        });

        let temp_client = Arc::clone(&self.client);
        let temp_zip = zip.to_string();
        self.pool.execute(move || {
            let _ = temp_tx.send(temp_client.fetch_temperature(&temp_zip, days));
        });

        // Join barrier: both fetches settle before the reduce step starts.
        // A dropped sender means the worker died without reporting.
        let precip_result = precip_rx.recv().unwrap_or_else(|_| {
            Err(ReportError::UpstreamUnavailable(
                "precipitation fetch worker terminated".to_string(),
            ))
        });
        let temp_result = temp_rx.recv().unwrap_or_else(|_| {
            Err(ReportError::UpstreamUnavailable(
                "temperature fetch worker terminated".to_string(),
            ))
        });

        let precip_records = precip_result?;
        let temp_records = temp_result?;

        let (rain_total, snow_total) = rain_and_snow_totals(&precip_records);
        self.events.totals_computed(zip, days, rain_total, snow_total);

        let (average_high, average_low) = temperature_averages(&temp_records)?;
        self.events.averages_computed(zip, days, average_high, average_low);

        let report = WeatherReport {
            id: None,
            zip_code: zip.to_string(),
            created_on: Utc::now(),
            rainfall_total_inches: rain_total,
            snow_total_inches: snow_total,
            average_high_f: average_high,
            average_low_f: average_low,
        };

        let saved = store.save(&report)?;
        self.cache.store(&saved);
        self.events.report_persisted(&saved);

        Ok(saved)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
