//! Test fixtures: representative JSON payloads from the observation services.
//!
//! These fixtures are structurally complete but truncated to the minimum
//! needed to exercise the parsers. They reflect the JSON arrays returned by:
//!   GET /observation/{zip}?days={n}
//!
//! Observation response shape (lower-camel-case field names):
//!   precipitation: [{ createdOn, amountInches, weatherType, zipCode }]
//!   temperature:   [{ createdOn, tempHighF, tempLowF, zipCode }]
//!
//! Note: amounts and temperatures are JSON numbers; timestamps are ISO 8601
//! with offset. Older service builds emitted PascalCase property names,
//! which the parsers accept as aliases.

/// Four days of precipitation for 60601: rain 1.2 + rain 0.8 (total 2.0),
/// snow 0.3, and one "hail" observation that counts toward neither total.
#[cfg(test)]
pub(crate) fn fixture_precipitation_week_json() -> &'static str {
    r#"[
      { "createdOn": "2026-07-30T06:00:00Z", "amountInches": 1.2, "weatherType": "rain", "zipCode": "60601" },
      { "createdOn": "2026-07-31T06:00:00Z", "amountInches": 0.3, "weatherType": "snow", "zipCode": "60601" },
      { "createdOn": "2026-08-01T06:00:00Z", "amountInches": 0.8, "weatherType": "rain", "zipCode": "60601" },
      { "createdOn": "2026-08-02T06:00:00Z", "amountInches": 0.4, "weatherType": "hail", "zipCode": "60601" }
    ]"#
}

/// Single snow observation with PascalCase property names, as emitted by
/// older service builds. Parsers must accept both casings.
#[cfg(test)]
pub(crate) fn fixture_precipitation_pascal_case_json() -> &'static str {
    r#"[
      { "CreatedOn": "2026-01-15T06:00:00Z", "AmountInches": 0.5, "WeatherType": "snow", "ZipCode": "60601" }
    ]"#
}

/// Two days of temperature for 60601: highs 70/74 (average 72.0),
/// lows 50/54 (average 52.0).
#[cfg(test)]
pub(crate) fn fixture_temperature_week_json() -> &'static str {
    r#"[
      { "createdOn": "2026-08-01T06:00:00Z", "tempHighF": 70.0, "tempLowF": 50.0, "zipCode": "60601" },
      { "createdOn": "2026-08-02T06:00:00Z", "tempHighF": 74.0, "tempLowF": 54.0, "zipCode": "60601" }
    ]"#
}
