//! Weather Report Aggregation Service - Main Entry Point
//!
//! An HTTP service that builds weather reports on demand:
//! 1. Accepts GET /weather-report/{zip}?days={n}
//! 2. Fetches precipitation and temperature observations concurrently from
//!    the two upstream data services
//! 3. Reduces them into summary statistics (rain/snow totals, high/low averages)
//! 4. Persists the report in PostgreSQL and returns it
//!
//! Usage:
//!   cargo run --release                  # Listen on the default port 8080
//!   cargo run --release -- --listen 9090 # Listen on port 9090
//!
//! Environment:
//!   DATABASE_URL - PostgreSQL connection string
//!
//! Configuration:
//!   report_service.toml - upstream service locations and request timeout

use std::env;
use std::sync::Arc;
use wxreport_service::ingest::HttpWeatherDataClient;
use wxreport_service::report::ReportAggregator;
use wxreport_service::store::PostgresReportStore;
use wxreport_service::{config, db, endpoint};

const DEFAULT_PORT: u16 = 8080;

fn main() {
    println!("🌦  Weather Report Aggregation Service");
    println!("======================================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut port = DEFAULT_PORT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--listen" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: --listen requires a port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --listen requires a port number");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--listen PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load upstream service locations (panics with a clear message if missing)
    let upstream_config = config::load_config();
    println!("📋 Upstream services:");
    println!("   precipitation: {}", upstream_config.precipitation_url);
    println!("   temperature:   {}", upstream_config.temperature_url);
    println!("   request timeout: {}s\n", upstream_config.request_timeout_secs);

    // Validate database connectivity and schema
    println!("📊 Validating database...");
    let client = match db::connect_and_verify(&["weather_report"]) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Database validation failed: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("✓ Database ready\n");

    // Wire up the workflow: HTTP client -> aggregation engine -> report store
    let data_client = match HttpWeatherDataClient::new(upstream_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Failed to build upstream HTTP client: {}\n", e);
            std::process::exit(1);
        }
    };
    let aggregator = ReportAggregator::new(Arc::new(data_client));
    let mut store = PostgresReportStore::new(client);

    if let Err(e) = endpoint::start_endpoint_server(port, &aggregator, &mut store) {
        eprintln!("\n❌ Endpoint server error: {}\n", e);
        std::process::exit(1);
    }
}
