//! # Mapping Rules: Operator-Configured Field Translations
//!
//! A `MappingRule` translates one field between an external payload and the
//! internal canonical schema. Rules are grouped per endpoint into a
//! `MappingSet`; while the operator edits, one additional *draft* rule is
//! validated against the saved set.
//!
//! ## Wire Format
//!
//! Rules serialize as `{"id"?, "direction", "sourcePath", "targetPath"}`.
//! The rule store emits snake_case keys in some responses, so
//! `source_path`/`target_path` are accepted as aliases on input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::path;

/// Which payload a rule applies to.
///
/// Only `Response` rules are structurally validated. `Request` rules build
/// outbound payloads and carry no schema-shape constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Outbound payload construction.
    Request,
    /// Inbound payload translation into the canonical schema.
    Response,
}

impl Direction {
    /// Returns the wire name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "request" => Ok(Self::Request),
            "response" => Ok(Self::Response),
            other => Err(format!(
                "unknown direction '{other}', expected 'request' or 'response'"
            )),
        }
    }
}

/// A single field-mapping rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingRule {
    /// Opaque store identifier. Used for upserts only, never for validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Payload the rule applies to.
    pub direction: Direction,

    /// Path in the external payload.
    #[serde(rename = "sourcePath", alias = "source_path", default)]
    pub source_path: String,

    /// Path in the internal canonical schema.
    #[serde(rename = "targetPath", alias = "target_path", default)]
    pub target_path: String,
}

impl MappingRule {
    /// Build a rule without a store id.
    pub fn new(
        direction: Direction,
        source_path: impl Into<String>,
        target_path: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            direction,
            source_path: source_path.into(),
            target_path: target_path.into(),
        }
    }

    /// Shorthand for a `Response` rule.
    pub fn response(source_path: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self::new(Direction::Response, source_path, target_path)
    }

    /// Shorthand for a `Request` rule.
    pub fn request(source_path: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self::new(Direction::Request, source_path, target_path)
    }

    /// Attach a store id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// True when both paths are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.source_path.trim().is_empty() && !self.target_path.trim().is_empty()
    }

    /// Draft identity: exact equality of both paths.
    ///
    /// Direction and id are ignored. Two saved rules with identical paths
    /// are indistinguishable under this relation.
    pub fn same_paths(&self, other: &MappingRule) -> bool {
        self.source_path == other.source_path && self.target_path == other.target_path
    }

    /// True when the source path iterates an array.
    pub fn is_array_bound(&self) -> bool {
        path::has_wildcard(&self.source_path)
    }
}

impl fmt::Display for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}",
            self.direction, self.source_path, self.target_path
        )
    }
}

/// Ordered collection of saved rules for one endpoint.
///
/// Order carries no meaning for validation; it only makes iteration, and
/// therefore diagnostic order, deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSet {
    rules: Vec<MappingRule>,
}

impl MappingSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of all rules.
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<MappingRule> {
        self.rules
    }

    /// The saved rules followed by the draft, if any.
    pub fn effective<'a>(&'a self, draft: Option<&'a MappingRule>) -> Vec<&'a MappingRule> {
        self.rules.iter().chain(draft).collect()
    }

    /// Rules of one direction, in order.
    pub fn by_direction(&self, direction: Direction) -> impl Iterator<Item = &MappingRule> {
        self.rules.iter().filter(move |r| r.direction == direction)
    }

    /// Rules of `direction` whose source or target path contains `term`,
    /// case-insensitively. An empty term matches every rule of the direction.
    pub fn search(&self, direction: Direction, term: &str) -> Vec<&MappingRule> {
        let needle = term.to_lowercase();
        self.by_direction(direction)
            .filter(|r| {
                needle.is_empty()
                    || r.source_path.to_lowercase().contains(&needle)
                    || r.target_path.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Replace the rule carrying the same id, or append.
    ///
    /// Rules without an id are always appended.
    pub fn upsert(&mut self, rule: MappingRule) {
        if let Some(id) = rule.id.as_deref() {
            if let Some(slot) = self
                .rules
                .iter_mut()
                .find(|r| r.id.as_deref() == Some(id))
            {
                *slot = rule;
                return;
            }
        }
        self.rules.push(rule);
    }
}

impl From<Vec<MappingRule>> for MappingSet {
    fn from(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<MappingRule> for MappingSet {
    fn from_iter<I: IntoIterator<Item = MappingRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
