//! Upstream data clients for the two observation services.
//!
//! Each source gets its own file under ingest/ (URL construction + JSON
//! parsing); `WeatherDataClient` is the seam the aggregation engine consumes,
//! so tests can substitute scripted doubles for the HTTP implementation.

pub mod precipitation;
pub mod temperature;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::config::UpstreamConfig;
use crate::model::{PrecipitationRecord, ReportError, TemperatureRecord};
use std::time::Duration;

/// Retrieves raw observation records for a zip code and day-count window
/// from the two upstream sources.
///
/// An empty result is a valid outcome (zero observations in the window) and
/// must stay distinguishable from the error cases.
pub trait WeatherDataClient: Send + Sync {
    fn fetch_precipitation(
        &self,
        zip: &str,
        days: u32,
    ) -> Result<Vec<PrecipitationRecord>, ReportError>;

    fn fetch_temperature(
        &self,
        zip: &str,
        days: u32,
    ) -> Result<Vec<TemperatureRecord>, ReportError>;
}

/// HTTP implementation of `WeatherDataClient` over reqwest's blocking client.
///
/// The per-request timeout from configuration bounds every fetch; a caller
/// that gives up on a report build is never left with an unbounded in-flight
/// request.
pub struct HttpWeatherDataClient {
    http: reqwest::blocking::Client,
    config: UpstreamConfig,
}

impl HttpWeatherDataClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, ReportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                ReportError::UpstreamUnavailable(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    /// Issues the GET and returns the raw body. Transport failures and
    /// non-success statuses both mean the source could not serve the window.
    fn get_body(&self, url: &str) -> Result<String, ReportError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                ReportError::UpstreamUnavailable(format!("request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::UpstreamUnavailable(format!(
                "{} returned status {}",
                url, status
            )));
        }

        response.text().map_err(|e| {
            ReportError::UpstreamUnavailable(format!(
                "failed to read response body from {}: {}",
                url, e
            ))
        })
    }
}

impl WeatherDataClient for HttpWeatherDataClient {
    fn fetch_precipitation(
        &self,
        zip: &str,
        days: u32,
    ) -> Result<Vec<PrecipitationRecord>, ReportError> {
        let url =
            precipitation::build_observation_url(&self.config.precipitation_url, zip, days);
        let body = self.get_body(&url)?;
        precipitation::parse_observation_response(&body)
    }

    fn fetch_temperature(
        &self,
        zip: &str,
        days: u32,
    ) -> Result<Vec<TemperatureRecord>, ReportError> {
        let url = temperature::build_observation_url(&self.config.temperature_url, zip, days);
        let body = self.get_body(&url)?;
        temperature::parse_observation_response(&body)
    }
}
