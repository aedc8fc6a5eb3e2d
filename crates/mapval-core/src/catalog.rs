//! # Path Catalog: Discoverable Source Paths
//!
//! The path catalog service captures an example payload for an endpoint and
//! returns every addressable source path with its inferred type and a sample
//! value. Fetching it is the host's job; this module models the response
//! and the local search the operator uses to narrow it down.
//!
//! The catalog only feeds autocomplete. It never decides structural
//! validity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One discoverable path in a captured example payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPath {
    /// Dotted path, with `[*]` for array positions.
    pub path: String,
    /// Inferred JSON type (`string`, `number`, `array`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Sample value observed at this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<Value>,
}

/// The catalog for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCatalog {
    #[serde(default)]
    pub paths: Vec<CatalogPath>,
    /// Whether an example payload has been captured at all.
    #[serde(rename = "hasExample", alias = "has_example", default)]
    pub has_example: bool,
}

impl PathCatalog {
    /// Paths containing `term`, case-insensitively. An empty term returns
    /// every path. Catalog order is preserved.
    pub fn filter(&self, term: &str) -> Vec<&CatalogPath> {
        if term.is_empty() {
            return self.paths.iter().collect();
        }
        let needle = term.to_lowercase();
        self.paths
            .iter()
            .filter(|p| p.path.to_lowercase().contains(&needle))
            .collect()
    }
}
