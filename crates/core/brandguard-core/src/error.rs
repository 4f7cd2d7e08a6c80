//! Error types for BrandGuard core

use thiserror::Error;

/// Main error type for BrandGuard operations
#[derive(Debug, Error)]
pub enum BrandGuardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading or parsing error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using BrandGuardError
pub type Result<T> = std::result::Result<T, BrandGuardError>;

impl BrandGuardError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        BrandGuardError::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        BrandGuardError::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BrandGuardError::Validation(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        BrandGuardError::Server(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        BrandGuardError::Other(msg.into())
    }
}
