//! State types for the Scan API
//!
//! Shared state structures used by server and handlers

use crate::server::ScanApiConfig;
use brandguard_core::CatalogLoader;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for API handlers
///
/// Everything here is immutable after startup; requests share nothing else,
/// so no locking is needed.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ScanApiConfig>,

    /// Dataset loader (re-reads the dataset file on every scan)
    pub loader: CatalogLoader,

    /// Server start time
    pub start_time: Instant,
}

impl ServerState {
    /// Create new server state from a config
    pub fn new(config: ScanApiConfig) -> Self {
        let loader = CatalogLoader::new(
            config.primary_dataset.clone(),
            config.fallback_dataset.clone(),
        );
        Self {
            config: Arc::new(config),
            loader,
            start_time: Instant::now(),
        }
    }
}
