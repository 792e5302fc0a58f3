//! TOML-driven condition catalog.
//!
//! `TomlCatalog` loads a `CatalogConfig` from a TOML string or file, runs the
//! catalog invariants over it, and implements `ConditionCatalog` from
//! carepoint-core. A catalog that loads is a catalog the assessor can score.
//!
//! Load sequence:
//!
//! 1. Parse the document into `CatalogConfig` (malformed TOML or a schema
//!    mismatch → `ConfigError`).
//! 2. Run `validate_definitions` (first violation → `CatalogInvalid`).
//! 3. Freeze the definitions; there is no mutation API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use carepoint_contracts::{
    condition::ConditionDefinition,
    error::{CarepointError, CarepointResult},
};
use carepoint_core::{traits::ConditionCatalog, validate::validate_definitions};

/// The catalog shipped with the engine.
const DEFAULT_CATALOG: &str = include_str!("../catalogs/default.toml");

/// The top-level structure deserialized from a catalog TOML file.
///
/// Example:
/// ```toml
/// [[conditions]]
/// name = "Angina (Heart Related)"
/// description = "Chest pain caused by reduced blood flow to the heart."
/// primary_symptoms = ["Chest Pain", "Shortness of Breath"]
/// secondary_symptoms = ["Sweating"]
/// min_match = 2
/// is_urgent = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Ordered list of definitions. Order breaks score ties.
    #[serde(default)]
    pub conditions: Vec<ConditionDefinition>,
}

/// A validated, immutable catalog read from TOML.
///
/// ```rust,ignore
/// use carepoint_catalog::TomlCatalog;
///
/// let catalog = TomlCatalog::from_file(Path::new("catalogs/default.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    config: CatalogConfig,
}

impl TomlCatalog {
    /// Parse and validate `s`.
    ///
    /// Returns `ConfigError` if the TOML is malformed or does not match
    /// `CatalogConfig`, and `CatalogInvalid` if a definition breaks a catalog
    /// invariant.
    pub fn from_toml_str(s: &str) -> CarepointResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| CarepointError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;

        validate_definitions(&config.conditions)?;

        debug!(conditions = config.conditions.len(), "catalog loaded");
        Ok(Self { config })
    }

    /// Read the file at `path` and load it as a catalog.
    ///
    /// Returns `ConfigError` if the file cannot be read, otherwise the same
    /// errors as [`TomlCatalog::from_toml_str`].
    pub fn from_file(path: &Path) -> CarepointResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarepointError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            conditions = catalog.len(),
            "catalog loaded from file"
        );
        Ok(catalog)
    }

    /// The catalog embedded in this crate.
    pub fn builtin() -> CarepointResult<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Look up a definition by its exact name.
    pub fn get(&self, name: &str) -> Option<&ConditionDefinition> {
        self.config.conditions.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.config.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config.conditions.is_empty()
    }
}

impl ConditionCatalog for TomlCatalog {
    fn conditions(&self) -> &[ConditionDefinition] {
        &self.config.conditions
    }
}
