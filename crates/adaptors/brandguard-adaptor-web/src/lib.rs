//! Scan API module
//!
//! Provides the HTTP surface for the BrandGuard scanner: a JSON scan
//! endpoint, a health check and an embedded single-page frontend.
//!
//! # Endpoints
//!
//! - `POST /scan` - Score a brand against the current catalog
//! - `GET /health` - Health check
//! - `GET /` - Embedded frontend page
//!
//! The catalog is re-read from its dataset file on every scan request, so
//! dataset updates are picked up without a restart.
//!
//! # Example
//!
//! ```no_run
//! use brandguard_adaptor_web::{ScanApiConfig, ScanApiServer};
//!
//! #[tokio::main]
//! async fn main() -> brandguard_core::Result<()> {
//!     let config = ScanApiConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 3000,
//!         ..Default::default()
//!     };
//!
//!     ScanApiServer::new(config).start().await?;
//!     tokio::signal::ctrl_c().await.ok();
//!     Ok(())
//! }
//! ```

mod frontend;
mod handlers;
mod server;
mod state;
mod types;


pub use server::{ScanApiConfig, ScanApiServer};
pub use state::ServerState;
pub use types::{HealthResponse, ScanRequest, ScanResponse};
