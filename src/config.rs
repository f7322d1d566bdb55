//! File-based configuration for drivers.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shape_core::{Catalog, Shape};
use std::path::Path;

/// Environment variable naming an optional catalog file.
pub const CATALOG_ENV_VAR: &str = "SHAPEGEN_CATALOG";

/// Load a catalog file, overriding the defaults.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let catalog = Catalog::from_file(path)
        .with_context(|| format!("Failed to load catalog from {path:?}"))?;
    tracing::info!(path = ?path, entries = catalog.len(), "loaded generator catalog");
    Ok(catalog)
}

/// Catalog file named by [`CATALOG_ENV_VAR`], if the variable is set.
pub fn catalog_from_env() -> anyhow::Result<Option<Catalog>> {
    match std::env::var_os(CATALOG_ENV_VAR) {
        Some(path) if !path.is_empty() => load_catalog(path).map(Some),
        _ => Ok(None),
    }
}

/// Parameter shapes of a function under test.
///
/// # YAML Format
///
/// ```yaml
/// parameters:
///   - int64
///   - type: sequence
///     element: string
///   - type: pointer
///     depth: 2
///     target: float32
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterList {
    pub parameters: Vec<Shape>,
}

impl ParameterList {
    /// Parse a parameter list from a YAML string.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse parameter list")
    }

    /// Load a parameter list from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read parameter list from {path:?}"))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid parameter list in {path:?}"))
    }
}
