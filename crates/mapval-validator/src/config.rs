//! # Validator Configuration
//!
//! Tunables of the structural validator, loadable from YAML. Every field
//! has a default, so an empty document reproduces the built-in behavior.
//!
//! ```yaml
//! max_shallow_depth: 2
//! array_target_prefix: items
//! unprefixed_placeholder: field_name
//! ```

use std::path::Path;

use mapval_core::{load_document, MapvalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or checking a [`ValidatorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be read or decoded.
    #[error("config load error: {0}")]
    Load(#[from] MapvalError),

    /// A field holds a value the validator cannot work with.
    #[error("invalid config field '{field}': {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Structural validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Root array paths with more `.`-segments than this are deep
    /// (`object_with_nested_arrays`) and skip per-rule checks.
    pub max_shallow_depth: usize,

    /// Array name used in the `ARRAY_MAPPING_WITHOUT_ARRAY_TARGET`
    /// suggestion: `<prefix>[*].<targetPath>`.
    pub array_target_prefix: String,

    /// Suggested target when stripping an array-root prefix leaves nothing.
    pub unprefixed_placeholder: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_shallow_depth: 2,
            array_target_prefix: "items".to_string(),
            unprefixed_placeholder: "field_name".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Parse and check a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| MapvalError::Serialization {
                source_name: "<config>".to_string(),
                reason: e.to_string(),
            })?
        };
        config.check()
    }

    /// Load and check a JSON or YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = load_document(path)?;
        config.check()
    }

    fn check(self) -> Result<Self, ConfigError> {
        if self.max_shallow_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_shallow_depth",
                reason: "must be at least 1; every path has one segment".to_string(),
            });
        }
        if self.array_target_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "array_target_prefix",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(self)
    }
}
