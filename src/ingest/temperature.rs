//! Temperature service API client: URL construction + JSON parsing.
//!
//! The temperature service exposes:
//!   GET /observation/{zip}?days={n}
//! returning a JSON array of observation objects:
//!   [{ "createdOn": ..., "tempHighF": ..., "tempLowF": ..., "zipCode": ... }]
//!
//! (The service also accepts POST /observation for ingestion; the report
//! aggregator only uses the read path. See bin/load_observations.rs.)

use crate::model::{ReportError, TemperatureRecord};

/// Builds the observation query URL for the given zip code and trailing-day
/// window. The zip is percent-encoded into the path segment.
pub fn build_observation_url(base_url: &str, zip: &str, days: u32) -> String {
    format!(
        "{}/observation/{}?days={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(zip),
        days
    )
}

/// Parses a temperature service response body into records.
///
/// An empty body or empty JSON array decodes to an empty `Vec`; whether an
/// empty temperature window is acceptable is the aggregation engine's call,
/// not the client's.
///
/// # Errors
/// - `ReportError::UpstreamMalformedResponse` — the payload is not a JSON
///   array of temperature observations.
pub fn parse_observation_response(json: &str) -> Result<Vec<TemperatureRecord>, ReportError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(json).map_err(|e| {
        ReportError::UpstreamMalformedResponse(format!(
            "temperature payload did not decode: {}",
            e
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
