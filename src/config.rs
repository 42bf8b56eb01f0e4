//! Service configuration loader - parses report_service.toml
//!
//! Separates upstream service locations from code, making it easy to point
//! the aggregator at a different precipitation/temperature deployment or
//! adjust the request timeout without recompiling the service.

use serde::Deserialize;
use std::fs;

const CONFIG_PATH: &str = "report_service.toml";

fn default_request_timeout_secs() -> u64 {
    10
}

/// Upstream data service locations loaded from report_service.toml
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the precipitation service, e.g. "http://localhost:5000"
    pub precipitation_url: String,
    /// Base URL of the temperature service, e.g. "http://localhost:5001"
    pub temperature_url: String,
    /// Per-request timeout applied to both upstream fetches. This is also
    /// the bound on how long an in-flight fetch can outlive its caller.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Deserialize)]
struct ServiceConfig {
    upstream: UpstreamConfig,
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<UpstreamConfig, toml::de::Error> {
    let config: ServiceConfig = toml::from_str(contents)?;
    Ok(config.upstream)
}

/// Loads upstream configuration from report_service.toml.
///
/// # Panics
/// Panics if the configuration file is missing or malformed. This is
/// intentional — the aggregator cannot operate without knowing where the
/// upstream data services live.
///
/// # File Location
/// Expects `report_service.toml` in the current working directory (project
/// root when running via `cargo run`).
pub fn load_config() -> UpstreamConfig {
    let contents = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", CONFIG_PATH, e));

    parse_config(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", CONFIG_PATH, e))
}
