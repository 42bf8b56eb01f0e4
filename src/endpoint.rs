//! HTTP endpoint for requesting weather reports
//!
//! Provides the REST entry point for the aggregation workflow.
//!
//! Endpoints:
//! - GET /weather-report/{zip}?days={n} - Build and return a report
//! - GET /health - Service health check
//!
//! The boundary validates `zip` and `days` (1-30 inclusive) before the
//! aggregation engine is invoked, and translates workflow failures into
//! status codes by error kind only — details stay in the server log.

use crate::model::ReportError;
use crate::report::ReportAggregator;
use crate::store::ReportStore;

// ---------------------------------------------------------------------------
// Request parsing
// ---------------------------------------------------------------------------

const REPORT_PATH_PREFIX: &str = "/weather-report/";

/// Observation window bounds accepted at the boundary.
const MIN_DAYS: u32 = 1;
const MAX_DAYS: u32 = 30;

/// Parses a report request URL into (zip, days).
///
/// # Errors
/// `ReportError::InvalidRequest` for a missing/blank zip, a missing `days`
/// query parameter, a non-integer `days`, or a `days` outside 1..=30.
pub fn parse_report_request(url: &str) -> Result<(String, u32), ReportError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let zip_raw = path.strip_prefix(REPORT_PATH_PREFIX).ok_or_else(|| {
        ReportError::InvalidRequest(format!("unexpected report path: {}", path))
    })?;

    let zip = urlencoding::decode(zip_raw)
        .map_err(|_| ReportError::InvalidRequest("zip is not valid UTF-8".to_string()))?
        .into_owned();

    if zip.trim().is_empty() {
        return Err(ReportError::InvalidRequest(
            "zip must not be empty".to_string(),
        ));
    }

    let days_value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("days="))
        .ok_or_else(|| {
            ReportError::InvalidRequest("days query parameter is required".to_string())
        })?;

    let days: u32 = days_value.parse().map_err(|_| {
        ReportError::InvalidRequest(format!("days must be an integer, got '{}'", days_value))
    })?;

    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ReportError::InvalidRequest(format!(
            "days must be between {} and {}, got {}",
            MIN_DAYS, MAX_DAYS, days
        )));
    }

    Ok((zip, days))
}

/// Status code for a workflow failure, by error kind.
///
/// Invalid requests are the client's fault; a window with no temperature
/// observations is 404; upstream trouble is a bad gateway; a store failure
/// is ours.
pub fn status_for(error: &ReportError) -> u16 {
    match error {
        ReportError::InvalidRequest(_) => 400,
        ReportError::InsufficientData(_) => 404,
        ReportError::UpstreamUnavailable(_) | ReportError::UpstreamMalformedResponse(_) => 502,
        ReportError::PersistenceFailed(_) => 500,
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the report endpoint server on the specified port.
///
/// Requests are served sequentially off the accept loop; each report build
/// runs as its own unit of work against the injected engine and store.
pub fn start_endpoint_server(
    port: u16,
    aggregator: &ReportAggregator,
    store: &mut dyn ReportStore,
) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET /weather-report/{{zip}}?days={{n}} - Build a weather report");
    println!("   GET /health - Service health check\n");

    for request in server.incoming_requests() {
        let url = request.url().to_string();

        // Route requests
        let response = if url == "/health" {
            handle_health()
        } else if url.starts_with(REPORT_PATH_PREFIX) {
            handle_report_request(aggregator, store, &url)
        } else {
            create_response(
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": ["/health", "/weather-report/{zip}?days={n}"]
                }),
            )
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Handle /health endpoint
fn handle_health() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "wxreport_service",
            "version": "0.1.0"
        }),
    )
}

/// Handle /weather-report/{zip}?days={n}
fn handle_report_request(
    aggregator: &ReportAggregator,
    store: &mut dyn ReportStore,
    url: &str,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let result = parse_report_request(url)
        .and_then(|(zip, days)| aggregator.build_report(store, &zip, days));

    match result {
        Ok(report) => create_response(
            200,
            serde_json::to_value(&report).expect("report serializes"),
        ),
        Err(e) => {
            // Full detail stays server-side; the client sees the kind only.
            eprintln!("✗ Report request {} failed: {}", url, e);
            create_response(status_for(&e), serde_json::json!({ "error": e.kind() }))
        }
    }
}

/// Create HTTP response with JSON body
fn create_response(
    status_code: u16,
    json: serde_json::Value,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
