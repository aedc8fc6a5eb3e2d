//! # Structural Mapping Validator
//!
//! Given the saved rules of an endpoint and an optional draft, decides which
//! shape family the response payload belongs to and whether the draft is
//! consistent with it.
//!
//! ## Algorithm
//!
//! 1. An incomplete draft (blank source or target) is never flagged.
//! 2. Only `response` rules take part. None left: scenario `none`.
//! 3. Rules split into array-bound (`sourcePath` contains `[*]`) and simple.
//!    No array-bound rules: `simple_object`.
//! 4. The *root array path* of an array-bound rule is its source path up to
//!    the first `[*]`. More than one distinct non-empty root is a hard
//!    contradiction: one `MULTIPLE_ROOT_ARRAYS` error, scenario `invalid`,
//!    nothing else is checked.
//! 5. A root deeper than `max_shallow_depth` segments is accepted as
//!    `object_with_nested_arrays` without per-rule checks.
//! 6. Shallow root, simple rules present (`object_with_arrays`): the draft's
//!    target must contain `[*]`.
//!    Shallow root, no simple rules (`array_root`): the draft's target must
//!    not carry a `prefix[*]`.
//!
//! Per-rule checks in step 6 apply only to the array-bound rule whose paths
//! equal the draft's. Saved rules that no longer fit are not re-flagged.

use mapval_core::path;
use mapval_core::{Direction, MappingRule};

use crate::config::ValidatorConfig;
use crate::result::{ErrorKind, RuleField, Scenario, ValidationError, ValidationResult};

/// Pure structural validator.
///
/// Holds configuration only; there is no state between calls, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct StructuralValidator {
    config: ValidatorConfig,
}

impl StructuralValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `existing` extended with `draft`.
    pub fn validate(
        &self,
        existing: &[MappingRule],
        draft: Option<&MappingRule>,
    ) -> ValidationResult {
        if let Some(d) = draft {
            if !d.is_complete() {
                tracing::trace!("draft incomplete; skipping structural validation");
                return ValidationResult::passed(Scenario::None);
            }
        }

        let (array_rules, simple_rules): (Vec<&MappingRule>, Vec<&MappingRule>) = existing
            .iter()
            .chain(draft)
            .filter(|r| r.direction == Direction::Response)
            .partition(|r| r.is_array_bound());

        tracing::trace!(
            array_rules = array_rules.len(),
            simple_rules = simple_rules.len(),
            "partitioned response rules"
        );

        if array_rules.is_empty() {
            let scenario = if simple_rules.is_empty() {
                Scenario::None
            } else {
                Scenario::SimpleObject
            };
            return ValidationResult::passed(scenario);
        }

        let roots = root_arrays(&array_rules);
        if roots.len() > 1 {
            let names: Vec<&str> = roots.iter().map(|(root, _)| *root).collect();
            tracing::debug!(roots = ?names, "multiple root arrays");
            return ValidationResult::from_errors(
                Scenario::Invalid,
                vec![multiple_roots_error(&roots)],
            );
        }

        let root = roots.first().map(|(root, _)| *root).unwrap_or("");
        let depth = path::segment_count(root);
        if depth > self.config.max_shallow_depth {
            tracing::debug!(root, depth, "deep root array; per-rule checks skipped");
            return ValidationResult::passed(Scenario::ObjectWithNestedArrays);
        }

        let current = draft.and_then(|d| array_rules.iter().copied().find(|r| d.same_paths(r)));

        let (scenario, error) = if simple_rules.is_empty() {
            (
                Scenario::ArrayRoot,
                current.and_then(|r| self.check_array_root(r)),
            )
        } else {
            (
                Scenario::ObjectWithArrays,
                current.and_then(|r| self.check_mixed(r)),
            )
        };

        tracing::debug!(%scenario, root, flagged = error.is_some(), "classified response mapping");
        ValidationResult::from_errors(scenario, error.into_iter().collect())
    }

    /// Mixed payload: the target of an array-bound rule must be per-element too.
    fn check_mixed(&self, rule: &MappingRule) -> Option<ValidationError> {
        if path::has_wildcard(&rule.target_path) {
            return None;
        }
        Some(ValidationError {
            kind: ErrorKind::ArrayMappingWithoutArrayTarget,
            field: Some(RuleField::TargetPath),
            message: format!(
                "the response has fields outside the array, so the target of an array field \
                 must also contain {}",
                path::WILDCARD
            ),
            suggestion: Some(format!(
                "{}{}.{}",
                self.config.array_target_prefix,
                path::WILDCARD,
                rule.target_path
            )),
            related_rule: Some(rule.clone()),
        })
    }

    /// Array-root payload: the target must be a plain field, not `prefix[*].field`.
    fn check_array_root(&self, rule: &MappingRule) -> Option<ValidationError> {
        let stripped = path::strip_wildcard_prefix(&rule.target_path)?;
        let prefix = path::root_array_path(&rule.target_path).unwrap_or_default();
        let suggestion = if stripped.is_empty() {
            self.config.unprefixed_placeholder.clone()
        } else {
            stripped.to_string()
        };
        Some(ValidationError {
            kind: ErrorKind::ArrayRootWithPrefixedTarget,
            field: Some(RuleField::TargetPath),
            message: format!(
                "the response is an array root, so the target must not be prefixed with '{prefix}{}'",
                path::WILDCARD
            ),
            suggestion: Some(suggestion),
            related_rule: Some(rule.clone()),
        })
    }
}

/// Distinct non-empty root array paths in first-seen order, each with the
/// rule that introduced it.
fn root_arrays<'a>(array_rules: &[&'a MappingRule]) -> Vec<(&'a str, &'a MappingRule)> {
    let mut roots: Vec<(&'a str, &'a MappingRule)> = Vec::new();
    for &rule in array_rules {
        let Some(root) = path::root_array_path(&rule.source_path) else {
            continue;
        };
        if root.is_empty() || roots.iter().any(|(seen, _)| *seen == root) {
            continue;
        }
        roots.push((root, rule));
    }
    roots
}

fn multiple_roots_error(roots: &[(&str, &MappingRule)]) -> ValidationError {
    let names: Vec<&str> = roots.iter().map(|(root, _)| *root).collect();
    ValidationError {
        kind: ErrorKind::MultipleRootArrays,
        field: Some(RuleField::SourcePath),
        message: format!("multiple root arrays detected: {}", names.join(", ")),
        suggestion: None,
        // The rule that introduced the second root.
        related_rule: roots.get(1).map(|(_, rule)| (*rule).clone()),
    }
}

/// Validate with the default configuration.
pub fn validate(existing: &[MappingRule], draft: Option<&MappingRule>) -> ValidationResult {
    StructuralValidator::default().validate(existing, draft)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("a".to_string()),
            Just("b".to_string()),
            Just("items".to_string()),
            Just("[*]".to_string()),
            Just("a[*]".to_string()),
            Just("b[*]".to_string()),
            Just("".to_string()),
        ]
    }

    fn path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..5).prop_map(|segs| segs.join("."))
    }

    fn rule() -> impl Strategy<Value = MappingRule> {
        (
            prop_oneof![Just(Direction::Request), Just(Direction::Response)],
            path(),
            path(),
        )
            .prop_map(|(d, s, t)| MappingRule::new(d, s, t))
    }

    proptest! {
        /// Same inputs, same output.
        #[test]
        fn validation_is_idempotent(
            rules in prop::collection::vec(rule(), 0..8),
            draft in prop::option::of(rule()),
        ) {
            let a = validate(&rules, draft.as_ref());
            let b = validate(&rules, draft.as_ref());
            prop_assert_eq!(
                serde_json::to_vec(&a).unwrap(),
                serde_json::to_vec(&b).unwrap()
            );
        }

        /// `valid` is exactly "no errors", and warnings stay empty.
        #[test]
        fn valid_iff_no_errors(
            rules in prop::collection::vec(rule(), 0..8),
            draft in prop::option::of(rule()),
        ) {
            let result = validate(&rules, draft.as_ref());
            prop_assert_eq!(result.valid, result.errors.is_empty());
            prop_assert!(result.warnings.is_empty());
        }

        /// A multiple-roots error never co-occurs with any other error.
        #[test]
        fn multiple_roots_is_exclusive(
            rules in prop::collection::vec(rule(), 0..8),
            draft in prop::option::of(rule()),
        ) {
            let result = validate(&rules, draft.as_ref());
            if result.error_of(ErrorKind::MultipleRootArrays).is_some() {
                prop_assert_eq!(result.errors.len(), 1);
                prop_assert_eq!(result.scenario, Scenario::Invalid);
            }
            if result.scenario == Scenario::Invalid {
                prop_assert!(result.error_of(ErrorKind::MultipleRootArrays).is_some());
            }
        }

        /// Without a draft no per-rule diagnostic is ever raised.
        #[test]
        fn per_rule_checks_need_a_draft(rules in prop::collection::vec(rule(), 0..8)) {
            let result = validate(&rules, None);
            prop_assert!(result.errors.iter().all(|e| e.kind == ErrorKind::MultipleRootArrays));
        }

        /// At most one diagnostic per call.
        #[test]
        fn at_most_one_error(
            rules in prop::collection::vec(rule(), 0..8),
            draft in prop::option::of(rule()),
        ) {
            prop_assert!(validate(&rules, draft.as_ref()).errors.len() <= 1);
        }

        /// Arbitrary strings never panic.
        #[test]
        fn arbitrary_paths_never_panic(
            source in "\\PC{0,24}",
            target in "\\PC{0,24}",
        ) {
            let draft = MappingRule::response(source, target);
            let _ = validate(&[MappingRule::response("status", "s")], Some(&draft));
            let _ = validate(&[], Some(&draft));
        }
    }
}
