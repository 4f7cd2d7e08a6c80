//! Utility functions and helpers

pub mod logger;

// Re-export commonly used utilities
pub use self::logger::{init_logging, Logger};
