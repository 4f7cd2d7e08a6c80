//! Scan API server implementation
//!
//! Provides the HTTP server for brand scanning with:
//! - JSON scan endpoint with input validation
//! - Health check
//! - Embedded frontend
//! - CORS support

use crate::frontend;
use crate::handlers::{health_check, scan_handler};
use crate::state::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use brandguard_core::catalog::{DEFAULT_FALLBACK_PATH, DEFAULT_PRIMARY_PATH};
use brandguard_core::{get_env_bool, get_env_int, get_env_or, Result};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Scan API configuration
#[derive(Debug, Clone)]
pub struct ScanApiConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Enable CORS
    pub enable_cors: bool,

    /// Primary dataset file
    pub primary_dataset: PathBuf,

    /// Fallback dataset file
    pub fallback_dataset: PathBuf,
}

impl Default for ScanApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enable_cors: true,
            primary_dataset: PathBuf::from(DEFAULT_PRIMARY_PATH),
            fallback_dataset: PathBuf::from(DEFAULT_FALLBACK_PATH),
        }
    }
}

impl ScanApiConfig {
    /// Build a config from `BRANDGUARD_*` environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: get_env_or("BRANDGUARD_HOST", &defaults.host),
            port: get_env_int("BRANDGUARD_PORT", defaults.port),
            enable_cors: get_env_bool("BRANDGUARD_ENABLE_CORS", defaults.enable_cors),
            primary_dataset: PathBuf::from(get_env_or(
                "BRANDGUARD_DATASET_FILE",
                DEFAULT_PRIMARY_PATH,
            )),
            fallback_dataset: PathBuf::from(get_env_or(
                "BRANDGUARD_DATASET_FALLBACK_FILE",
                DEFAULT_FALLBACK_PATH,
            )),
        }
    }
}

/// Scan API server
pub struct ScanApiServer {
    config: ScanApiConfig,
}

impl ScanApiServer {
    /// Create a new scan API server
    pub fn new(config: ScanApiConfig) -> Self {
        Self { config }
    }

    /// Build the Axum router
    fn build_router(state: ServerState) -> Router {
        let enable_cors = state.config.enable_cors;

        let mut router = Router::new()
            // Embedded frontend
            .route("/", get(frontend::scanner_page))
            // Health check
            .route("/health", get(health_check))
            // Scan endpoint
            .route("/scan", post(scan_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        // Add CORS if enabled (outermost layer)
        if enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// The router for this server's configuration
    pub fn router(&self) -> Router {
        Self::build_router(ServerState::new(self.config.clone()))
    }

    /// Bind and start serving in a background task
    ///
    /// Returns once the listener is bound; the server itself runs until
    /// ctrl-c.
    pub async fn start(&self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let router = self.router();
        info!("Scan API listening on http://{}", addr);
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await
        });
        Ok(())
    }
}
