//! # Document Loading
//!
//! Rules, drafts, catalogs and configuration arrive as JSON or YAML files.
//! The format is chosen by file extension: `.yaml`/`.yml` decode as YAML,
//! anything else as JSON.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MapvalError;

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Decode `text` in this format. `source_name` labels errors.
    pub fn decode<T: DeserializeOwned>(
        &self,
        text: &str,
        source_name: &str,
    ) -> Result<T, MapvalError> {
        let decoded = match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };
        decoded.map_err(|reason| MapvalError::Serialization {
            source_name: source_name.to_string(),
            reason,
        })
    }

    /// Encode `value` in this format. JSON output is pretty-printed.
    pub fn encode<T: Serialize>(
        &self,
        value: &T,
        source_name: &str,
    ) -> Result<String, MapvalError> {
        let encoded = match self {
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        encoded.map_err(|reason| MapvalError::Serialization {
            source_name: source_name.to_string(),
            reason,
        })
    }
}

/// Encode `value` in the format implied by the extension of `path` and
/// write it there, replacing any previous contents.
pub fn save_document<T: Serialize>(path: &Path, value: &T) -> Result<(), MapvalError> {
    let text = DocumentFormat::from_path(path).encode(value, &path.display().to_string())?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Read and decode a JSON or YAML document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, MapvalError> {
    let text = std::fs::read_to_string(path)?;
    DocumentFormat::from_path(path).decode(&text, &path.display().to_string())
}
