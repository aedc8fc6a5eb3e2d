//! # Memoized Validation
//!
//! Hosts re-run validation on every change to the rule set or the draft,
//! and often on unrelated re-renders as well. `MemoizedValidator` keeps the
//! last result keyed by the fingerprint of `(rules, draft)` and returns it
//! while the inputs are unchanged.
//!
//! Validation is O(n) in the rule count, so this is about avoiding churn in
//! the presenter rather than saving CPU. Because the validator is pure, a
//! cache hit is indistinguishable from a recomputation.

use std::sync::atomic::{AtomicU64, Ordering};

use mapval_core::{fingerprint_rules, Fingerprint, MappingRule};
use parking_lot::Mutex;

use crate::result::ValidationResult;
use crate::validator::StructuralValidator;

/// A [`StructuralValidator`] with a single-entry result cache.
///
/// Safe to share across threads; concurrent calls may both miss and both
/// compute, which is harmless since they produce the same result.
#[derive(Debug, Default)]
pub struct MemoizedValidator {
    inner: StructuralValidator,
    last: Mutex<Option<(Fingerprint, ValidationResult)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoizedValidator {
    pub fn new(inner: StructuralValidator) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &StructuralValidator {
        &self.inner
    }

    /// Validate, reusing the previous result when the inputs are unchanged.
    pub fn validate(
        &self,
        existing: &[MappingRule],
        draft: Option<&MappingRule>,
    ) -> ValidationResult {
        let key = match fingerprint_rules(existing, draft) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(error = %e, "could not fingerprint rules; validating without cache");
                self.misses.fetch_add(1, Ordering::Relaxed);
                return self.inner.validate(existing, draft);
            }
        };

        if let Some((cached_key, cached)) = self.last.lock().as_ref() {
            if *cached_key == key {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(%key, "validation cache hit");
                return cached.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = self.inner.validate(existing, draft);
        *self.last.lock() = Some((key, result.clone()));
        result
    }

    /// Drop the cached result.
    pub fn invalidate(&self) {
        *self.last.lock() = None;
    }

    /// Number of calls served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of calls that ran the validator.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
