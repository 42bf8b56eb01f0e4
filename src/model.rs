//! Shared data types for the report aggregation workflow.
//!
//! The two observation record types mirror the JSON emitted by the upstream
//! precipitation and temperature services (lower-camel-case field names;
//! PascalCase accepted as an alias since older service builds emitted it).
//! `WeatherReport` is the persisted rollup; `ReportError` is the error
//! taxonomy every layer of the workflow speaks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Observation records
// ---------------------------------------------------------------------------

/// Kind of precipitation reported by the precipitation service.
///
/// The upstream vocabulary is open-ended; anything that is not rain or snow
/// decodes to `Other` and is excluded from the report totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Rain,
    Snow,
    #[serde(other)]
    Other,
}

/// One precipitation observation, as returned by
/// `GET /observation/{zip}?days={n}` on the precipitation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationRecord {
    #[serde(alias = "CreatedOn")]
    pub created_on: DateTime<Utc>,
    #[serde(alias = "AmountInches")]
    pub amount_inches: Decimal,
    #[serde(alias = "WeatherType")]
    pub weather_type: WeatherType,
    #[serde(alias = "ZipCode")]
    pub zip_code: String,
}

/// One temperature observation, as returned by
/// `GET /observation/{zip}?days={n}` on the temperature service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRecord {
    #[serde(alias = "CreatedOn")]
    pub created_on: DateTime<Utc>,
    #[serde(alias = "TempHighF")]
    pub temp_high_f: Decimal,
    #[serde(alias = "TempLowF")]
    pub temp_low_f: Decimal,
    #[serde(alias = "ZipCode")]
    pub zip_code: String,
}

// ---------------------------------------------------------------------------
// Weather report
// ---------------------------------------------------------------------------

/// The persisted rollup of precipitation and temperature statistics for one
/// zip/window combination.
///
/// All four statistics are rounded to one decimal place before persistence.
/// `id` is assigned by the report store on save and absent until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub zip_code: String,
    pub created_on: DateTime<Utc>,
    pub rainfall_total_inches: Decimal,
    pub snow_total_inches: Decimal,
    pub average_high_f: Decimal,
    pub average_low_f: Decimal,
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure kinds of the report workflow.
///
/// Every variant carries a detail string for server-side logs; the HTTP
/// boundary exposes only the kind (see `kind()`), never the detail.
#[derive(Debug)]
pub enum ReportError {
    /// Network/transport failure reaching a data source, or a non-success
    /// status from it.
    UpstreamUnavailable(String),
    /// The upstream payload could not be decoded into the expected record
    /// shape. Distinct from "zero observations", which is a valid result.
    UpstreamMalformedResponse(String),
    /// A statistic is undefined over the fetched window (empty temperature
    /// dataset). The build fails rather than persisting a fabricated value.
    InsufficientData(String),
    /// The report store rejected or failed the write.
    PersistenceFailed(String),
    /// Boundary-level validation failure on `zip`/`days`.
    InvalidRequest(String),
}

impl ReportError {
    /// Stable kind token, safe to expose to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::UpstreamUnavailable(_) => "upstream_unavailable",
            ReportError::UpstreamMalformedResponse(_) => "upstream_malformed_response",
            ReportError::InsufficientData(_) => "insufficient_data",
            ReportError::PersistenceFailed(_) => "persistence_failed",
            ReportError::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::UpstreamUnavailable(detail) => {
                write!(f, "upstream data source unavailable: {}", detail)
            }
            ReportError::UpstreamMalformedResponse(detail) => {
                write!(f, "upstream response did not match expected shape: {}", detail)
            }
            ReportError::InsufficientData(detail) => {
                write!(f, "insufficient data to compute report statistics: {}", detail)
            }
            ReportError::PersistenceFailed(detail) => {
                write!(f, "failed to persist weather report: {}", detail)
            }
            ReportError::InvalidRequest(detail) => {
                write!(f, "invalid report request: {}", detail)
            }
        }
    }
}

impl std::error::Error for ReportError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_tokens_are_stable() {
        let cases = [
            (ReportError::UpstreamUnavailable(String::new()), "upstream_unavailable"),
            (ReportError::UpstreamMalformedResponse(String::new()), "upstream_malformed_response"),
            (ReportError::InsufficientData(String::new()), "insufficient_data"),
            (ReportError::PersistenceFailed(String::new()), "persistence_failed"),
            (ReportError::InvalidRequest(String::new()), "invalid_request"),
        ];
        for (error, expected) in cases {
            assert_eq!(error.kind(), expected);
        }
    }

    #[test]
    fn test_error_display_includes_detail() {
        let error = ReportError::UpstreamUnavailable("connection refused".to_string());
        assert!(
            error.to_string().contains("connection refused"),
            "detail should be present for server-side logs, got: {}",
            error
        );
    }

    #[test]
    fn test_unrecognized_weather_type_decodes_to_other() {
        let parsed: WeatherType = serde_json::from_str(r#""hail""#).expect("should decode");
        assert_eq!(parsed, WeatherType::Other);
    }

    #[test]
    fn test_rain_and_snow_decode_case_sensitively() {
        assert_eq!(
            serde_json::from_str::<WeatherType>(r#""rain""#).unwrap(),
            WeatherType::Rain
        );
        assert_eq!(
            serde_json::from_str::<WeatherType>(r#""snow""#).unwrap(),
            WeatherType::Snow
        );
    }

    #[test]
    fn test_report_id_omitted_from_json_until_assigned() {
        let report = WeatherReport {
            id: None,
            zip_code: "60601".to_string(),
            created_on: Utc::now(),
            rainfall_total_inches: Decimal::new(20, 1),
            snow_total_inches: Decimal::new(3, 1),
            average_high_f: Decimal::new(720, 1),
            average_low_f: Decimal::new(520, 1),
        };
        let json = serde_json::to_string(&report).expect("should serialize");
        assert!(!json.contains("\"id\""), "unassigned id must not serialize, got: {}", json);
        assert!(json.contains("\"zipCode\""), "fields serialize in camelCase, got: {}", json);
    }
}
