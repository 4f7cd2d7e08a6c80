//! Catalog model and dataset loader
//!
//! A catalog is an ordered list of candidate app listings scored against a
//! query brand. It is resolved from the first usable source in a fixed
//! priority order: a primary JSON file, a fallback JSON file, and finally a
//! built-in sample. Loading never fails; the built-in sample is always
//! available.

use crate::config::get_env_or;
use crate::{BrandGuardError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default path of the primary dataset file
pub const DEFAULT_PRIMARY_PATH: &str = "data/apps.json";

/// Default path of the fallback dataset file
pub const DEFAULT_FALLBACK_PATH: &str = "frontend/data.json";

/// A single app-store listing from the catalog
///
/// The three scored fields default to empty strings when absent so that a
/// sparse listing scores 0 on the missing field instead of failing to load.
/// Any other fields found in the source data are preserved verbatim and
/// carried through to scan responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppListing {
    /// Display name of the app
    #[serde(default)]
    pub app_name: String,

    /// Package identifier (e.g. `com.phonepe.app`)
    #[serde(default)]
    pub package: String,

    /// Publisher name
    #[serde(default)]
    pub publisher: String,

    /// Passthrough fields preserved from the source data
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AppListing {
    /// Create a listing from the three scored fields
    pub fn new(
        app_name: impl Into<String>,
        package: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            package: package.into(),
            publisher: publisher.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// The built-in sample catalog, used when no dataset file is usable
pub fn builtin_catalog() -> Vec<AppListing> {
    vec![
        AppListing::new("PhonePe", "com.phonepe.app", "PhonePe Pvt Ltd"),
        AppListing::new(
            "PhonePe UPI Update",
            "com.phonepe.update.upi",
            "PhonePe Update Official",
        ),
        AppListing::new("Phone Pay Wallet", "com.phonepay.wallet.app", "Pay Apps Ltd"),
    ]
}

/// Parse dataset file content into a catalog
///
/// Accepts either a top-level JSON array of listings or an object carrying
/// the array under a `results` property. Anything else is an error.
pub fn parse_catalog(raw: &str) -> Result<Vec<AppListing>> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove("results") {
            Some(results @ Value::Array(_)) => Ok(serde_json::from_value(results)?),
            _ => Err(BrandGuardError::catalog(
                "expected a JSON array or an object with a `results` array",
            )),
        },
        _ => Err(BrandGuardError::catalog(
            "expected a JSON array or an object with a `results` array",
        )),
    }
}

/// Resolves the catalog from an ordered list of dataset file candidates
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    candidates: Vec<PathBuf>,
}

impl CatalogLoader {
    /// Create a loader with explicit primary and fallback dataset paths
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![primary.into(), fallback.into()],
        }
    }

    /// Create a loader from `BRANDGUARD_DATASET_FILE` and
    /// `BRANDGUARD_DATASET_FALLBACK_FILE`, with the default paths when unset
    pub fn from_env() -> Self {
        Self::new(
            get_env_or("BRANDGUARD_DATASET_FILE", DEFAULT_PRIMARY_PATH),
            get_env_or("BRANDGUARD_DATASET_FALLBACK_FILE", DEFAULT_FALLBACK_PATH),
        )
    }

    /// The dataset file candidates in resolution order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the catalog from the first usable source
    ///
    /// Missing files are skipped silently; malformed files are logged and
    /// skipped. Always returns a catalog — the built-in sample is the final
    /// fallback, so callers never see a load error.
    pub fn load(&self) -> Vec<AppListing> {
        for path in &self.candidates {
            if !path.exists() {
                debug!("dataset candidate {} does not exist", path.display());
                continue;
            }
            match try_load_file(path) {
                Ok(listings) => {
                    info!(
                        "Loaded dataset from {} ({} records)",
                        path.display(),
                        listings.len()
                    );
                    return listings;
                }
                Err(e) => {
                    warn!("Failed to load dataset from {}: {}", path.display(), e);
                }
            }
        }

        let fallback = builtin_catalog();
        info!(
            "No dataset file found or parseable; using built-in sample ({} records)",
            fallback.len()
        );
        fallback
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_PATH, DEFAULT_FALLBACK_PATH)
    }
}

fn try_load_file(path: &Path) -> Result<Vec<AppListing>> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].app_name, "PhonePe");
        assert_eq!(catalog[0].package, "com.phonepe.app");
    }

    #[test]
    fn test_parse_bare_array() {
        let raw = r#"[{"app_name":"A","package":"com.a","publisher":"A Ltd"}]"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].package, "com.a");
    }

    #[test]
    fn test_parse_wrapped_results() {
        let raw = r#"{"results":[{"app_name":"A","package":"com.a","publisher":"A Ltd"},
                                  {"app_name":"B","package":"com.b","publisher":"B Ltd"}]}"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].app_name, "B");
    }

    #[test]
    fn test_parse_preserves_extra_fields() {
        let raw = r#"[{"app_name":"A","package":"com.a","publisher":"A Ltd",
                       "store":"play","downloads":12345}]"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(catalog[0].extra["store"], "play");
        assert_eq!(catalog[0].extra["downloads"], 12345);
    }

    #[test]
    fn test_parse_missing_fields_default_empty() {
        let raw = r#"[{"app_name":"A","package":"com.a"}]"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(catalog[0].publisher, "");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_catalog("42").is_err());
        assert!(parse_catalog(r#"{"items":[]}"#).is_err());
        assert!(parse_catalog(r#"{"results":"nope"}"#).is_err());
        assert!(parse_catalog("not json at all").is_err());
    }

    #[test]
    fn test_load_primary_file() {
        let primary = write_temp(r#"[{"app_name":"A","package":"com.a","publisher":"A Ltd"}]"#);
        let loader = CatalogLoader::new(primary.path(), "does/not/exist.json");
        let catalog = loader.load();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].app_name, "A");
    }

    #[test]
    fn test_load_falls_through_to_fallback_file() {
        let fallback = write_temp(r#"{"results":[{"app_name":"B","package":"com.b","publisher":""}]}"#);
        let loader = CatalogLoader::new("does/not/exist.json", fallback.path());
        let catalog = loader.load();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].app_name, "B");
    }

    #[test]
    fn test_load_skips_malformed_primary() {
        let primary = write_temp("{ this is not json");
        let fallback = write_temp(r#"[{"app_name":"C","package":"com.c","publisher":""}]"#);
        let loader = CatalogLoader::new(primary.path(), fallback.path());
        let catalog = loader.load();
        assert_eq!(catalog[0].app_name, "C");
    }

    #[test]
    fn test_load_builtin_when_nothing_usable() {
        let primary = write_temp(r#"{"wrong":"shape"}"#);
        let loader = CatalogLoader::new(primary.path(), "does/not/exist.json");
        let catalog = loader.load();
        assert_eq!(catalog, builtin_catalog());
    }
}
