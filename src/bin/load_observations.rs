//! Observation loader for the upstream data services.
//!
//! Seeds the precipitation and temperature services with synthetic
//! observations over a trailing-day window so a local stack has data for
//! the report aggregator to roll up. One precipitation and one temperature
//! observation are generated per day and POSTed to each service's
//! `POST /observation` write path.
//!
//! The generated values are derived deterministically from the day offset,
//! so repeated runs against a fresh stack produce the same dataset.
//!
//! Usage:
//!   cargo run --bin load_observations -- <zip> <days>
//!
//! Upstream locations are read from report_service.toml.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use wxreport_service::config;
use wxreport_service::model::{PrecipitationRecord, TemperatureRecord, WeatherType};

// ---------------------------------------------------------------------------
// Synthetic observation generation
// ---------------------------------------------------------------------------

/// Precipitation for a day offset: a dry day every fourth day, snow every
/// fifth wet day, rain otherwise. Amounts cycle through tenths of an inch.
fn precipitation_for_day(zip: &str, day_offset: i64) -> Option<PrecipitationRecord> {
    if day_offset % 4 == 3 {
        return None; // dry day
    }

    let weather_type = if day_offset % 5 == 0 {
        WeatherType::Snow
    } else {
        WeatherType::Rain
    };

    Some(PrecipitationRecord {
        created_on: Utc::now() - Duration::days(day_offset),
        amount_inches: Decimal::new(1 + day_offset % 9, 1), // 0.1 .. 0.9
        weather_type,
        zip_code: zip.to_string(),
    })
}

/// Temperature for a day offset: highs drift through the 60s-70s, lows
/// track 20 degrees below.
fn temperature_for_day(zip: &str, day_offset: i64) -> TemperatureRecord {
    let high = Decimal::from(62 + day_offset % 14);
    TemperatureRecord {
        created_on: Utc::now() - Duration::days(day_offset),
        temp_high_f: high,
        temp_low_f: high - Decimal::from(20),
        zip_code: zip.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

fn post_observation<T: serde::Serialize>(
    client: &reqwest::blocking::Client,
    base_url: &str,
    record: &T,
) -> Result<(), String> {
    let url = format!("{}/observation", base_url.trim_end_matches('/'));

    let response = client
        .post(&url)
        .json(record)
        .send()
        .map_err(|e| format!("POST {} failed: {}", url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("POST {} returned status {}", url, status));
    }

    Ok(())
}

fn main() {
    println!("🌦  Observation Loader");
    println!("=====================\n");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <zip> <days>", args[0]);
        std::process::exit(1);
    }

    let zip = args[1].clone();
    let days: i64 = args[2].parse().unwrap_or_else(|_| {
        eprintln!("Error: <days> must be a positive integer");
        std::process::exit(1);
    });
    if days < 1 {
        eprintln!("Error: <days> must be at least 1");
        std::process::exit(1);
    }

    let upstream = config::load_config();
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(upstream.request_timeout_secs))
        .build()
        .expect("failed to build HTTP client");

    println!("📥 Seeding {} days of observations for {}...", days, zip);

    let mut precip_count = 0;
    let mut temp_count = 0;
    let mut failures = 0;

    for day_offset in 0..days {
        if let Some(record) = precipitation_for_day(&zip, day_offset) {
            match post_observation(&client, &upstream.precipitation_url, &record) {
                Ok(()) => precip_count += 1,
                Err(e) => {
                    eprintln!("   ✗ {}", e);
                    failures += 1;
                }
            }
        }

        let record = temperature_for_day(&zip, day_offset);
        match post_observation(&client, &upstream.temperature_url, &record) {
            Ok(()) => temp_count += 1,
            Err(e) => {
                eprintln!("   ✗ {}", e);
                failures += 1;
            }
        }
    }

    println!(
        "✓ Loaded {} precipitation + {} temperature observations ({} failures)",
        precip_count, temp_count, failures
    );

    if failures > 0 {
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
