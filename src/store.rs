//! Report persistence
//!
//! `ReportStore` is the write seam the aggregation engine uses; the engine
//! never talks to PostgreSQL directly, which keeps it substitutable with an
//! in-memory double in tests. `PostgresReportStore` is the production
//! implementation: one report build becomes exactly one row in
//! `weather_report.report` (single-statement insert, so the write is atomic —
//! either the full report lands or nothing does).

use crate::model::{ReportError, WeatherReport};
use postgres::Client;

/// Durable persistence for finished weather reports.
pub trait ReportStore {
    /// Persists the report and returns it with the store-assigned id
    /// populated. Fails with `ReportError::PersistenceFailed` on write error.
    fn save(&mut self, report: &WeatherReport) -> Result<WeatherReport, ReportError>;
}

/// PostgreSQL-backed report store.
///
/// Owns its connection; concurrent report builds each get their own store
/// instance rather than sharing a connection.
pub struct PostgresReportStore {
    client: Client,
}

impl PostgresReportStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ReportStore for PostgresReportStore {
    fn save(&mut self, report: &WeatherReport) -> Result<WeatherReport, ReportError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO weather_report.report
                 (zip_code, created_on, rainfall_total_inches, snow_total_inches,
                  average_high_f, average_low_f)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING id",
                &[
                    &report.zip_code,
                    &report.created_on,
                    &report.rainfall_total_inches,
                    &report.snow_total_inches,
                    &report.average_high_f,
                    &report.average_low_f,
                ],
            )
            .map_err(|e| ReportError::PersistenceFailed(format!("report insert failed: {}", e)))?;

        let mut saved = report.clone();
        saved.id = Some(row.get(0));
        Ok(saved)
    }
}
