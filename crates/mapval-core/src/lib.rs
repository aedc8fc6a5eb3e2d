//! # mapval-core: Foundational Types for Field-Mapping Validation
//!
//! This crate defines the data model shared by every other `mapval` crate:
//! the mapping rules an operator configures per external API endpoint, the
//! literal `[*]` wildcard path helpers the structural validator is built on,
//! canonical fingerprints of rule sets, and the path catalog filter.
//!
//! ## Key Design Principles
//!
//! 1. **Paths stay strings.** `sourcePath` and `targetPath` are dot-separated
//!    strings where `[*]` is matched as a literal substring. There is no path
//!    grammar and therefore no path parse error: degenerate paths simply fail
//!    to match and flow through as ordinary rules.
//!
//! 2. **Draft identity is structural.** Two rules denote the same draft iff
//!    their source and target paths are byte-equal. Store ids never take part
//!    in validation.
//!
//! 3. **Fingerprints flow through `CanonicalBytes`.** Memoization keys are
//!    SHA-256 digests of JCS-canonical JSON, so the same `(rules, draft)`
//!    pair always produces the same key.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mapval-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod catalog;
pub mod digest;
pub mod document;
pub mod error;
pub mod path;
pub mod rule;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use catalog::{CatalogPath, PathCatalog};
pub use digest::{fingerprint_rules, sha256_fingerprint, Fingerprint};
pub use document::{load_document, save_document, DocumentFormat};
pub use error::{CanonicalizationError, MapvalError};
pub use path::WILDCARD;
pub use rule::{Direction, MappingRule, MappingSet};
