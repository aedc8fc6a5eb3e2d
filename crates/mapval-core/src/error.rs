//! # Error Types
//!
//! Defines the error types shared across `mapval`. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Structural validation problems are *not* errors in this sense: the
//! validator reports them as data in its result and never fails.

use thiserror::Error;

/// Top-level error type for mapval.
#[derive(Error, Debug)]
pub enum MapvalError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A rule, draft, or catalog document could not be decoded.
    #[error("serialization error in '{source_name}': {reason}")]
    Serialization {
        /// File path or other label of the offending document.
        source_name: String,
        /// Decoder message.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
