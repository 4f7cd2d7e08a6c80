//! Types for the Scan API
//!
//! Defines request and response structures for the scan endpoints

use brandguard_core::ScoredListing;
use serde::{Deserialize, Serialize};

/// Request to scan a brand against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Brand name to compare against every catalog listing
    #[serde(default)]
    pub brand: String,
}

/// Response from a scan request
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    /// The trimmed brand the scan ran with
    pub brand: String,

    /// Number of scored listings (always the full catalog size)
    pub count: usize,

    /// Scored listings, descending by risk
    pub results: Vec<ScoredListing>,
}

/// Response from the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is up
    pub status: String,

    /// Seconds since the server started
    pub uptime: u64,

    /// RFC3339 timestamp of the response
    pub timestamp: String,
}

/// Error payload for client errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
