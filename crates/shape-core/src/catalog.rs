//! Configuration catalog.
//!
//! The catalog maps each shape kind to the generator configuration the
//! dispatcher should use for it. It is built once (usually from defaults, then
//! selectively overridden from code or a YAML file) and handed to the
//! dispatcher by value before generation begins.

use crate::config::GeneratorConfig;
use crate::defaults;
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Entry whose generator family cannot produce the kind it is stored under
    #[error("Catalog entry for '{kind}' has a '{family}' generator")]
    MismatchedEntry {
        kind: ShapeKind,
        family: &'static str,
    },
}

/// Mapping from kind to generator configuration.
///
/// # YAML Format
///
/// ```yaml
/// int64:
///   type: int
///   min: -5
///   max: 5
/// string:
///   type: string
///   max_len: 3
///   charset: xyz
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<ShapeKind, GeneratorConfig>,
}

impl Catalog {
    /// Create a catalog pre-populated with defaults.
    ///
    /// Leaf kinds get their default configuration. Composite kinds get the
    /// unset configuration of their family, so the dispatcher derives their
    /// defaults from the requested shape.
    pub fn new() -> Self {
        let entries = ShapeKind::ALL
            .iter()
            .filter_map(|&kind| {
                let config = if kind.is_composite() {
                    GeneratorConfig::unset_for(kind)
                } else {
                    defaults::default_for_kind(kind)
                }?;
                Some((kind, config))
            })
            .collect();
        Self { entries }
    }

    /// Create a catalog with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Load overrides from a YAML file on top of the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse overrides from a YAML string on top of the defaults.
    ///
    /// Kinds missing from the document keep their default entry.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let overrides: BTreeMap<ShapeKind, GeneratorConfig> = serde_yaml::from_str(yaml)?;
        let mut catalog = Self::new();
        for (kind, config) in overrides {
            if !config.serves(kind) {
                return Err(CatalogError::MismatchedEntry {
                    kind,
                    family: config.family(),
                });
            }
            catalog.set(kind, config);
        }
        Ok(catalog)
    }

    /// Serialize the catalog to YAML.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get the entry for a kind.
    pub fn get(&self, kind: ShapeKind) -> Option<&GeneratorConfig> {
        self.entries.get(&kind)
    }

    /// Set the entry for a kind, returning the previous entry.
    ///
    /// Leaf widths are aligned with `kind`.
    pub fn set(
        &mut self,
        kind: ShapeKind,
        config: impl Into<GeneratorConfig>,
    ) -> Option<GeneratorConfig> {
        let mut config = config.into();
        config.set_width_for(kind);
        self.entries.insert(kind, config)
    }

    /// Builder-style [`Catalog::set`].
    pub fn with(mut self, kind: ShapeKind, config: impl Into<GeneratorConfig>) -> Self {
        self.set(kind, config);
        self
    }

    /// Remove the entry for a kind.
    pub fn remove(&mut self, kind: ShapeKind) -> Option<GeneratorConfig> {
        self.entries.remove(&kind)
    }

    /// Check if the catalog has an entry for a kind.
    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Kinds with an entry, in order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IntConfig, IntWidth, StringConfig};
    use std::io::Write;

    #[test]
    fn test_new_catalog_covers_supported_kinds() {
        let catalog = Catalog::new();
        for kind in ShapeKind::ALL {
            assert_eq!(catalog.contains(kind), kind.is_supported(), "{kind}");
        }

        // Composite entries are unset, leaf entries are not
        assert!(catalog.get(ShapeKind::Sequence).unwrap().is_unset());
        assert!(catalog.get(ShapeKind::Record).unwrap().is_unset());
        assert!(!catalog.get(ShapeKind::Int32).unwrap().is_unset());
    }

    #[test]
    fn test_set_aligns_width() {
        let mut catalog = Catalog::empty();
        assert!(catalog.is_empty());

        catalog.set(ShapeKind::Int16, IntConfig::new(1, 9));
        let Some(GeneratorConfig::Int(config)) = catalog.get(ShapeKind::Int16) else {
            panic!("Expected int config");
        };
        assert_eq!(config.width, IntWidth::I16);
        assert_eq!(catalog.kinds().collect::<Vec<_>>(), vec![ShapeKind::Int16]);
    }

    #[test]
    fn test_from_yaml_overrides_defaults() {
        let yaml = r#"
int64:
  type: int
  min: -5
  max: 5
string:
  type: string
  max_len: 3
  charset: xyz
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(
            catalog.get(ShapeKind::Int64),
            Some(&GeneratorConfig::Int(IntConfig::new(-5, 5)))
        );
        assert_eq!(
            catalog.get(ShapeKind::String),
            Some(&GeneratorConfig::String(
                StringConfig::new(0, 3).with_charset("xyz")
            ))
        );
        // Untouched kinds keep defaults
        assert_eq!(catalog.get(ShapeKind::Bool), Catalog::new().get(ShapeKind::Bool));
    }

    #[test]
    fn test_from_yaml_rejects_mismatched_entry() {
        let yaml = r#"
int8:
  type: string
  max_len: 3
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MismatchedEntry {
                kind: ShapeKind::Int8,
                family: "string"
            }
        ));

        let err = Catalog::from_yaml("chan:\n  type: bool\n").unwrap_err();
        assert!(matches!(err, CatalogError::MismatchedEntry { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_kind() {
        let err = Catalog::from_yaml("int128:\n  type: int\n").unwrap_err();
        assert!(matches!(err, CatalogError::YamlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bool:\n  type: bool\n  force_true: true").unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        let Some(GeneratorConfig::Bool(config)) = catalog.get(ShapeKind::Bool) else {
            panic!("Expected bool config");
        };
        assert!(config.force_true);

        let err = Catalog::from_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let catalog = Catalog::new().with(ShapeKind::Uint8, crate::config::UintConfig::new(3, 4));
        let yaml = catalog.to_yaml().unwrap();
        let parsed: Catalog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(catalog, parsed);
    }
}
