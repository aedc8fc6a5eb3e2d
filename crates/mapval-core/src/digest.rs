//! # Fingerprints: Structural Hashes of Validator Inputs
//!
//! The structural validator is a pure function of `(existing rules, draft)`.
//! A `Fingerprint` is the SHA-256 digest of the canonical form of that pair
//! and serves as the memoization key: equal fingerprints mean equal inputs,
//! and therefore an equal validation result.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CanonicalizationError;
use crate::rule::MappingRule;

/// A SHA-256 digest over canonical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bytes: [u8; 32],
}

impl Fingerprint {
    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 fingerprint from canonical bytes.
pub fn sha256_fingerprint(data: &CanonicalBytes) -> Fingerprint {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Fingerprint { bytes }
}

#[derive(Serialize)]
struct ValidatorInputs<'a> {
    rules: &'a [MappingRule],
    draft: Option<&'a MappingRule>,
}

/// Fingerprint the two inputs of a validation call.
///
/// `None` and a present draft always hash differently, as do rule lists
/// that differ only in order.
pub fn fingerprint_rules(
    rules: &[MappingRule],
    draft: Option<&MappingRule>,
) -> Result<Fingerprint, CanonicalizationError> {
    let cb = CanonicalBytes::new(&ValidatorInputs { rules, draft })?;
    Ok(sha256_fingerprint(&cb))
}
