//! wxreport_service: weather report aggregation service.
//!
//! # Module structure
//!
//! ```text
//! wxreport_service
//! ├── model    — shared data types (PrecipitationRecord, TemperatureRecord,
//! │              WeatherReport, ReportError)
//! ├── config   — upstream service configuration loader (report_service.toml)
//! ├── db       — PostgreSQL connection + schema validation
//! ├── store    — report persistence (ReportStore trait, Postgres impl)
//! ├── ingest
//! │   ├── precipitation — precipitation service API: URL construction + JSON parsing
//! │   ├── temperature   — temperature service API: URL construction + JSON parsing
//! │   └── fixtures (test only) — representative API response payloads
//! ├── report   — aggregation engine (concurrent fetches, statistics, persistence)
//! └── endpoint — HTTP API (GET /weather-report/{zip}?days={n}, /health)
//! ```

pub mod config;
pub mod db;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod report;
pub mod store;
