//! # Validation Results
//!
//! The output contract of the structural validator. Every type here is
//! JSON-serializable in the shape the diagnostics presenter consumes:
//!
//! ```json
//! {"valid": false, "errors": [...], "warnings": [], "scenario": "array_root"}
//! ```

use std::fmt;

use mapval_core::MappingRule;
use serde::{Deserialize, Serialize};

/// Structural shape family implied by the response rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Nothing to classify: no response rules, or an incomplete draft.
    None,
    /// Flat object, no array-bound rules.
    SimpleObject,
    /// The payload is an array; every rule reads from inside it.
    ArrayRoot,
    /// Scalar fields plus one shallow array.
    ObjectWithArrays,
    /// The array sits deeper than the shallow limit. Accepted unchecked.
    ObjectWithNestedArrays,
    /// Contradictory structure (several root arrays).
    Invalid,
}

impl Scenario {
    /// Returns the wire name of the scenario.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SimpleObject => "simple_object",
            Self::ArrayRoot => "array_root",
            Self::ObjectWithArrays => "object_with_arrays",
            Self::ObjectWithNestedArrays => "object_with_nested_arrays",
            Self::Invalid => "invalid",
        }
    }

    /// Operator-facing description of the detected shape.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::None => "no response mappings to classify",
            Self::SimpleObject => "simple object (no arrays)",
            Self::ArrayRoot => "array root: the response is an array of objects",
            Self::ObjectWithArrays => "object with an array field",
            Self::ObjectWithNestedArrays => "complex structure with deeply nested arrays",
            Self::Invalid => "invalid structure",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed taxonomy of structural diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// More than one distinct root array. Fatal, short-circuits all checks.
    MultipleRootArrays,
    /// Mixed payload, but the draft's array-bound target has no `[*]`.
    ArrayMappingWithoutArrayTarget,
    /// Array-root payload, but the draft's target carries a `prefix[*]`.
    ArrayRootWithPrefixedTarget,
}

impl ErrorKind {
    /// Returns the wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleRootArrays => "MULTIPLE_ROOT_ARRAYS",
            Self::ArrayMappingWithoutArrayTarget => "ARRAY_MAPPING_WITHOUT_ARRAY_TARGET",
            Self::ArrayRootWithPrefixedTarget => "ARRAY_ROOT_WITH_PREFIXED_TARGET",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule field a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleField {
    #[serde(rename = "sourcePath")]
    SourcePath,
    #[serde(rename = "targetPath")]
    TargetPath,
}

/// A single structural diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<RuleField>,
    pub message: String,
    /// Corrected path the operator can apply directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_rule: Option<MappingRule>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}

/// Outcome of one validation call.
///
/// Invariant: `valid == errors.is_empty()`. The constructors below are the
/// only way the validator builds one, which keeps the invariant local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    /// Reserved for non-blocking diagnostics; currently always empty.
    pub warnings: Vec<ValidationError>,
    pub scenario: Scenario,
}

impl ValidationResult {
    /// A passing result for `scenario`.
    pub fn passed(scenario: Scenario) -> Self {
        Self::from_errors(scenario, Vec::new())
    }

    /// A result whose validity is derived from `errors`.
    pub fn from_errors(scenario: Scenario, errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
            scenario,
        }
    }

    /// First diagnostic of `kind`, if any.
    pub fn error_of(&self, kind: ErrorKind) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.kind == kind)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid { "valid" } else { "invalid" };
        write!(f, "{status} ({}: {})", self.scenario, self.scenario.describe())?;
        for e in &self.errors {
            write!(f, "\n  error {e}")?;
        }
        for w in &self.warnings {
            write!(f, "\n  warning {w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_wire_names_match_as_str() {
        for s in [
            Scenario::None,
            Scenario::SimpleObject,
            Scenario::ArrayRoot,
            Scenario::ObjectWithArrays,
            Scenario::ObjectWithNestedArrays,
            Scenario::Invalid,
        ] {
            assert_eq!(
                serde_json::to_value(s).unwrap(),
                serde_json::Value::String(s.as_str().to_string())
            );
        }
    }

    #[test]
    fn error_kind_wire_names_match_as_str() {
        for k in [
            ErrorKind::MultipleRootArrays,
            ErrorKind::ArrayMappingWithoutArrayTarget,
            ErrorKind::ArrayRootWithPrefixedTarget,
        ] {
            assert_eq!(
                serde_json::to_value(k).unwrap(),
                serde_json::Value::String(k.as_str().to_string())
            );
        }
    }

    #[test]
    fn passed_result_shape() {
        let json = serde_json::to_value(ValidationResult::passed(Scenario::None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": true, "errors": [], "warnings": [], "scenario": "none"})
        );
    }

    #[test]
    fn validity_follows_errors() {
        let err = ValidationError {
            kind: ErrorKind::MultipleRootArrays,
            field: None,
            message: "m".into(),
            suggestion: None,
            related_rule: None,
        };
        let r = ValidationResult::from_errors(Scenario::Invalid, vec![err]);
        assert!(!r.valid);
        assert!(r.error_of(ErrorKind::MultipleRootArrays).is_some());
        assert!(r.error_of(ErrorKind::ArrayRootWithPrefixedTarget).is_none());
    }

    #[test]
    fn error_serializes_camel_case_fields() {
        let err = ValidationError {
            kind: ErrorKind::ArrayRootWithPrefixedTarget,
            field: Some(RuleField::TargetPath),
            message: "m".into(),
            suggestion: Some("id".into()),
            related_rule: Some(MappingRule::response("records[*].id", "x[*].id")),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "ARRAY_ROOT_WITH_PREFIXED_TARGET");
        assert_eq!(json["field"], "targetPath");
        assert_eq!(json["relatedRule"]["sourcePath"], "records[*].id");
    }

    #[test]
    fn display_includes_suggestion() {
        let err = ValidationError {
            kind: ErrorKind::ArrayMappingWithoutArrayTarget,
            field: Some(RuleField::TargetPath),
            message: "needs [*]".into(),
            suggestion: Some("items[*].id".into()),
            related_rule: None,
        };
        assert_eq!(
            err.to_string(),
            "ARRAY_MAPPING_WITHOUT_ARRAY_TARGET: needs [*] (suggestion: items[*].id)"
        );
    }
}
