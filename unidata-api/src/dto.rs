//! DTOs for API responses.
//!
//! Lookup responses are the provider's JSON passed through verbatim, so
//! the only shaped body here is the health report.

use serde::Serialize;

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server can answer at all
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the first health probe
    pub uptime_seconds: u64,
}
