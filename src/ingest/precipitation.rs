//! Precipitation service API client: URL construction + JSON parsing.
//!
//! The precipitation service exposes:
//!   GET /observation/{zip}?days={n}
//! returning a JSON array of observation objects:
//!   [{ "createdOn": ..., "amountInches": ..., "weatherType": ..., "zipCode": ... }]
//!
//! See `fixtures.rs` for representative payloads.

use crate::model::{PrecipitationRecord, ReportError};

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

/// Parses a precipitation service response body into records.
///
/// An empty body or empty JSON array decodes to an empty `Vec` — "zero
/// observations" is a valid result, not an error.
///
/// # Errors
/// - `ReportError::UpstreamMalformedResponse` — the payload is not a JSON
///   array of precipitation observations.
pub fn parse_observation_response(json: &str) -> Result<Vec<PrecipitationRecord>, ReportError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(json).map_err(|e| {
        ReportError::UpstreamMalformedResponse(format!(
            "precipitation payload did not decode: {}",
            e
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;
    use crate::model::WeatherType;
    use rust_decimal::Decimal;

    // --- URL construction ---------------------------------------------------

    #[test]
    fn test_build_url_targets_observation_endpoint() {
        let url = build_observation_url("http://localhost:5000", "60601", 7);
        assert_eq!(url, "http://localhost:5000/observation/60601?days=7");
    }

    #[test]
    fn test_build_url_tolerates_trailing_slash_on_base() {
        let url = build_observation_url("http://localhost:5000/", "60601", 7);
        assert_eq!(url, "http://localhost:5000/observation/60601?days=7");
    }

    #[test]
    fn test_build_url_percent_encodes_zip() {
        // Some postal codes carry spaces (e.g. UK outward/inward codes).
        let url = build_observation_url("http://localhost:5000", "EC1A 1BB", 5);
        assert!(
            url.contains("/observation/EC1A%201BB?"),
            "zip must be percent-encoded, got: {}",
            url
        );
    }

    // --- Parsing: happy path ------------------------------------------------

    #[test]
    fn test_parse_week_of_observations() {
        let records = parse_observation_response(fixture_precipitation_week_json())
            .expect("valid fixture should parse");

        assert_eq!(records.len(), 4);

        let first = &records[0];
        assert_eq!(first.zip_code, "60601");
        assert_eq!(first.weather_type, WeatherType::Rain);
        assert_eq!(first.amount_inches, Decimal::new(12, 1));
        assert_eq!(first.created_on.to_rfc3339(), "2026-07-30T06:00:00+00:00");
    }

    #[test]
    fn test_parse_unrecognized_weather_type_becomes_other() {
        let records = parse_observation_response(fixture_precipitation_week_json())
            .expect("should parse");

        let hail = records
            .iter()
            .find(|r| r.weather_type == WeatherType::Other)
            .expect("fixture includes one non-rain non-snow observation");
        assert_eq!(hail.amount_inches, Decimal::new(4, 1));
    }

    #[test]
    fn test_parse_pascal_case_field_names() {
        // Older service builds emitted PascalCase property names.
        let records = parse_observation_response(fixture_precipitation_pascal_case_json())
            .expect("PascalCase payload should parse via aliases");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].weather_type, WeatherType::Snow);
        assert_eq!(records[0].amount_inches, Decimal::new(5, 1));
    }

    // --- Parsing: empty and error cases -------------------------------------

    #[test]
    fn test_parse_empty_array_is_zero_observations() {
        let records = parse_observation_response("[]").expect("empty array is valid");
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_empty_body_is_zero_observations() {
        let records = parse_observation_response("").expect("empty body is valid");
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_returns_malformed_response() {
        let result = parse_observation_response("{ this is not valid json }}}");
        assert!(
            matches!(result, Err(ReportError::UpstreamMalformedResponse(_))),
            "malformed JSON should return UpstreamMalformedResponse, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_wrong_record_shape_returns_malformed_response() {
        // Structurally valid JSON, but not precipitation observations.
        let result = parse_observation_response(r#"[{"tempHighF": 70.0, "tempLowF": 50.0}]"#);
        assert!(
            matches!(result, Err(ReportError::UpstreamMalformedResponse(_))),
            "shape mismatch should return UpstreamMalformedResponse, got {:?}",
            result
        );
    }
}
