//! # mapval-validator: Structural Mapping Validation
//!
//! Decides whether a set of field-mapping rules describes a structurally
//! consistent transformation of a JSON payload, classifies the payload's
//! shape, and produces actionable diagnostics for the rule being edited.
//!
//! ## Validation (`validator`)
//!
//! - [`StructuralValidator::validate`]: pure and total.
//!   Inputs are borrowed read-only; the [`ValidationResult`] is built fresh
//!   on every call.
//! - [`validate`]: the same with the default [`ValidatorConfig`].
//!
//! ## Host Integration
//!
//! - [`MemoizedValidator`] (`memo`): skips recomputation when the
//!   fingerprint of `(rules, draft)` is unchanged.
//! - [`check_commit`] / [`commit`] (`gate`): the save gate, admitting response rules
//!   only when validation passes.
//!
//! ## Crate Policy
//!
//! - Depends only on `mapval-core` internally.
//! - Structural problems are returned as data. The validator has no error
//!   path and never panics.

pub mod config;
pub mod gate;
pub mod memo;
pub mod result;
pub mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use gate::{check_commit, commit, GateError};
pub use memo::MemoizedValidator;
pub use result::{ErrorKind, RuleField, Scenario, ValidationError, ValidationResult};
pub use validator::{validate, StructuralValidator};
