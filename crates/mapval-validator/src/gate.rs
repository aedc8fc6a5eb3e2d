//! # Commit Gate
//!
//! The save action of the host must not persist a `response` rule that
//! fails structural validation. `request` rules bypass the gate entirely:
//! they build outbound payloads and have no schema-shape constraint.
//!
//! A rejection carries the full [`ValidationResult`] so the operator sees
//! every message and suggestion.

use mapval_core::{Direction, MappingRule, MappingSet};
use thiserror::Error;

use crate::result::{Scenario, ValidationResult};
use crate::validator::StructuralValidator;

/// Why a rule was not admitted.
#[derive(Error, Debug)]
pub enum GateError {
    /// Source or target path is blank.
    #[error("mapping {rule} is incomplete: source and target paths are required")]
    IncompleteRule {
        /// The offending rule.
        rule: MappingRule,
    },

    /// Structural validation failed.
    #[error("mapping rejected ({}): {}", .result.scenario, summarize(.result))]
    Rejected {
        /// The failing validation, for display to the operator.
        result: ValidationResult,
    },
}

fn summarize(result: &ValidationResult) -> String {
    result
        .errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Decide whether `rule` may be saved alongside `existing`.
///
/// Returns the validation that admitted a response rule, or a passing
/// result with scenario `none` for request rules.
pub fn check_commit(
    validator: &StructuralValidator,
    existing: &MappingSet,
    rule: &MappingRule,
) -> Result<ValidationResult, GateError> {
    if rule.direction == Direction::Request {
        tracing::debug!(%rule, "request mapping bypasses structural gate");
        return Ok(ValidationResult::passed(Scenario::None));
    }
    if !rule.is_complete() {
        return Err(GateError::IncompleteRule { rule: rule.clone() });
    }

    let result = validator.validate(existing.rules(), Some(rule));
    if result.valid {
        Ok(result)
    } else {
        tracing::info!(%rule, errors = result.errors.len(), "mapping rejected by structural gate");
        Err(GateError::Rejected { result })
    }
}

/// Gate `rule` and, if admitted, upsert it into `set`.
pub fn commit(
    validator: &StructuralValidator,
    set: &mut MappingSet,
    rule: MappingRule,
) -> Result<ValidationResult, GateError> {
    let result = check_commit(validator, set, &rule)?;
    set.upsert(rule);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorKind;

    fn saved() -> MappingSet {
        MappingSet::from(vec![MappingRule::response("status", "situacao")])
    }

    #[test]
    fn valid_response_rule_is_committed() {
        let v = StructuralValidator::default();
        let mut set = saved();
        let result = commit(&v, &mut set, MappingRule::response("object[*].id", "veiculos[*].id"))
            .unwrap();
        assert_eq!(result.scenario, Scenario::ObjectWithArrays);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn invalid_response_rule_is_rejected_with_suggestion() {
        let v = StructuralValidator::default();
        let mut set = saved();
        let err = commit(&v, &mut set, MappingRule::response("object[*].id", "id")).unwrap_err();
        match &err {
            GateError::Rejected { result } => {
                let e = result.error_of(ErrorKind::ArrayMappingWithoutArrayTarget).unwrap();
                assert_eq!(e.suggestion.as_deref(), Some("items[*].id"));
            }
            other => panic!("expected Rejected, got: {other}"),
        }
        assert!(err.to_string().contains("items[*].id"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn request_rules_bypass_validation() {
        let v = StructuralValidator::default();
        let mut set = MappingSet::from(vec![MappingRule::response("object[*].id", "x")]);
        // Would be MULTIPLE_ROOT_ARRAYS as a response rule.
        let result = commit(&v, &mut set, MappingRule::request("records[*].id", "y")).unwrap();
        assert!(result.valid);
        assert_eq!(result.scenario, Scenario::None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn incomplete_rule_is_rejected() {
        let v = StructuralValidator::default();
        let err = check_commit(&v, &saved(), &MappingRule::response("", "y")).unwrap_err();
        assert!(matches!(err, GateError::IncompleteRule { .. }));
    }

    #[test]
    fn blank_request_rule_bypasses_completeness_check() {
        let v = StructuralValidator::default();
        let result = check_commit(&v, &MappingSet::new(), &MappingRule::request("", "y")).unwrap();
        assert!(result.valid);
        assert_eq!(result.scenario, Scenario::None);
    }

    // Validation runs against the saved set before the upsert, so the copy
    // being replaced still takes part.
    #[test]
    fn edit_is_validated_against_the_pre_edit_set() {
        let v = StructuralValidator::default();
        let mut set = MappingSet::from(vec![MappingRule::response("records[*].id", "id").with_id("1")]);
        let edited = MappingRule::response("items[*].id", "id").with_id("1");

        let err = commit(&v, &mut set, edited.clone()).unwrap_err();
        match err {
            GateError::Rejected { result } => {
                let e = result.error_of(ErrorKind::MultipleRootArrays).unwrap();
                assert!(e.message.contains("records, items"));
            }
            other => panic!("expected Rejected, got: {other}"),
        }
        assert_eq!(set.rules()[0].source_path, "records[*].id");

        let mut after = set.clone();
        after.upsert(edited);
        let post = v.validate(after.rules(), None);
        assert!(post.valid);
        assert_eq!(post.scenario, Scenario::ArrayRoot);
    }

    #[test]
    fn multiple_roots_block_commit() {
        let v = StructuralValidator::default();
        let set = MappingSet::from(vec![MappingRule::response("object[*].id", "x")]);
        let err = check_commit(&v, &set, &MappingRule::response("records[*].name", "y")).unwrap_err();
        match err {
            GateError::Rejected { result } => assert_eq!(result.scenario, Scenario::Invalid),
            other => panic!("expected Rejected, got: {other}"),
        }
    }

    #[test]
    fn edit_replaces_rule_with_same_id() {
        let v = StructuralValidator::default();
        let mut set = MappingSet::from(vec![
            MappingRule::response("status", "situacao"),
            MappingRule::response("object[*].id", "veiculos[*].id").with_id("42"),
        ]);
        commit(
            &v,
            &mut set,
            MappingRule::response("object[*].id", "frota[*].id").with_id("42"),
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[1].target_path, "frota[*].id");
    }
}
