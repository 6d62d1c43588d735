use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::FieldPath;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    MissingRequired,
    WrongType,
    NotInEnumeration,
    /// Only produced when `SchemaConfig::enforce_salary_order` is on.
    InvalidRange,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::MissingRequired => "missing_required",
            Reason::WrongType => "wrong_type",
            Reason::NotInEnumeration => "not_in_enumeration",
            Reason::InvalidRange => "invalid_range",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: FieldPath,
    pub reason: Reason,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Every violation found while validating one raw document as `entity`.
///
/// Violations are listed in field declaration order, nested fields inline
/// with their container.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{entity} is invalid: {}", summarize(.violations))]
pub struct ValidationError {
    pub entity: &'static str,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(entity: &'static str, violations: Vec<Violation>) -> Self {
        Self { entity, violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Reasons reported at exactly `path` (rendered form, e.g. `salary_range.min`).
    pub fn reasons_at(&self, path: &str) -> Vec<Reason> {
        self.violations
            .iter()
            .filter(|v| v.path == path)
            .map(|v| v.reason)
            .collect()
    }

    pub fn has(&self, path: &str, reason: Reason) -> bool {
        self.violations
            .iter()
            .any(|v| v.reason == reason && v.path == path)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returned by `FromStr` on an enumeration when the text is not a member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {enumeration}")]
pub struct UnknownVariant {
    pub enumeration: &'static str,
    pub value: String,
}

/// A resume whose `version` can no longer be incremented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resume {id} has reached the maximum version")]
pub struct VersionExhausted {
    pub id: String,
}
