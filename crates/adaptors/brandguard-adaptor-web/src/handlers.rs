//! Request handlers for the Scan API
//!
//! Implements the endpoint logic for brand scanning and health checks

use crate::state::ServerState;
use crate::types::{ErrorResponse, HealthResponse, ScanRequest, ScanResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brandguard_core::score_catalog;
use tracing::info;

/// API error returned to clients
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete request
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: msg }),
            )
                .into_response(),
        }
    }
}

/// Scan a brand against the catalog
///
/// The brand is trimmed and must be non-empty; an empty brand is rejected
/// before any catalog I/O happens. The catalog is loaded fresh on every
/// request so dataset file updates show up immediately.
pub async fn scan_handler(
    State(state): State<ServerState>,
    Json(request): Json<ScanRequest>,
) -> Response {
    let brand = request.brand.trim().to_string();
    if brand.is_empty() {
        return ApiError::BadRequest("brand is required in JSON body".to_string()).into_response();
    }

    let catalog = state.loader.load();
    let results = score_catalog(&brand, catalog);
    info!("SCAN brand={} results={}", brand, results.len());

    Json(ScanResponse {
        count: results.len(),
        brand,
        results,
    })
    .into_response()
}

/// Health check
pub async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
