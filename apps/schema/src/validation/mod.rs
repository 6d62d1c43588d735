//! Structural validation of raw JSON documents against the entity types.
//!
//! Every field is checked independently and all violations are collected in
//! one pass. Nested composites and list elements are validated recursively
//! with their container's path as prefix.

pub mod path;
pub mod reader;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::SchemaConfig;
use crate::errors::{Reason, ValidationError, Violation};

pub use path::{FieldPath, Segment};
pub use reader::{read_enumeration, FromField, ObjectReader};

/// Accumulates violations for one validation pass.
pub struct Collector<'a> {
    config: &'a SchemaConfig,
    violations: Vec<Violation>,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a SchemaConfig) -> Self {
        Self {
            config,
            violations: Vec::new(),
        }
    }

    pub fn config(&self) -> &SchemaConfig {
        self.config
    }

    pub fn report(&mut self, path: FieldPath, reason: Reason) {
        trace!(path = %path, reason = %reason, "field rejected");
        self.violations.push(Violation { path, reason });
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// An object shape that can be read out of a raw JSON value.
///
/// `read` must query every field before combining them, so that a missing
/// first field never hides violations further down.
pub trait Schema: Sized {
    const ENTITY: &'static str;

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self>;

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        Self::validate_with(raw, &SchemaConfig::default())
    }

    fn validate_with(raw: &Value, config: &SchemaConfig) -> Result<Self, ValidationError> {
        let mut cx = Collector::new(config);
        let parsed = read_object::<Self>(raw, &FieldPath::root(), &mut cx);
        let violations = cx.into_violations();

        match parsed {
            Some(value) if violations.is_empty() => Ok(value),
            _ => {
                debug!(
                    entity = Self::ENTITY,
                    violations = violations.len(),
                    "document rejected"
                );
                Err(ValidationError::new(Self::ENTITY, violations))
            }
        }
    }

    /// Parses `text` as JSON, then validates it. Malformed JSON is a single
    /// `wrong_type` at the root.
    fn validate_json(text: &str) -> Result<Self, ValidationError> {
        match serde_json::from_str::<Value>(text) {
            Ok(raw) => Self::validate(&raw),
            Err(e) => {
                debug!(entity = Self::ENTITY, "malformed JSON: {e}");
                Err(ValidationError::new(
                    Self::ENTITY,
                    vec![Violation {
                        path: FieldPath::root(),
                        reason: Reason::WrongType,
                    }],
                ))
            }
        }
    }
}

/// Reads `value` as the object shape `S`, reporting `wrong_type` at `path`
/// when it is not a JSON object.
pub fn read_object<S: Schema>(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<S> {
    match value {
        Value::Object(map) => S::read(&ObjectReader::new(map, path.clone()), cx),
        _ => {
            cx.report(path.clone(), Reason::WrongType);
            None
        }
    }
}

/// Lets a `Schema` type appear as a field (directly, optionally, or in a list).
macro_rules! schema_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::validation::FromField for $ty {
                fn from_field(
                    value: &::serde_json::Value,
                    path: &$crate::validation::FieldPath,
                    cx: &mut $crate::validation::Collector<'_>,
                ) -> Option<Self> {
                    $crate::validation::read_object(value, path, cx)
                }
            }
        )+
    };
}

pub(crate) use schema_field;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::JobType;

    #[derive(Debug, PartialEq)]
    struct Probe {
        name: String,
        tags: Option<Vec<String>>,
        kind: JobType,
        count: Option<u32>,
    }

    impl Schema for Probe {
        const ENTITY: &'static str = "Probe";

        fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
            let name = obj.required(cx, "name");
            let tags = obj.optional(cx, "tags");
            let kind = obj.required(cx, "kind");
            let count = obj.optional(cx, "count");
            Some(Probe {
                name: name?,
                tags: tags?,
                kind: kind?,
                count: count?,
            })
        }
    }

    #[test]
    fn test_accepts_well_typed_document() {
        let probe = Probe::validate(&json!({"name": "a", "kind": "REMOTE", "count": 3})).unwrap();
        assert_eq!(
            probe,
            Probe {
                name: "a".to_string(),
                tags: None,
                kind: JobType::Remote,
                count: Some(3),
            }
        );
    }

    #[test]
    fn test_collects_all_violations_in_declaration_order() {
        let err = Probe::validate(&json!({"tags": ["x", 1], "kind": "HYBRID", "count": "3"}))
            .unwrap_err();
        let rendered: Vec<_> = err.violations().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "name: missing_required",
                "tags[1]: wrong_type",
                "kind: not_in_enumeration",
                "count: wrong_type",
            ]
        );
    }

    #[test]
    fn test_non_object_root_is_wrong_type() {
        let err = Probe::validate(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.entity, "Probe");
        assert!(err.has("$", Reason::WrongType));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let probe = Probe::validate(&json!({"name": "a", "kind": "CONTRACT", "tags": null})).unwrap();
        assert_eq!(probe.tags, None);

        let err = Probe::validate(&json!({"name": null, "kind": "CONTRACT"})).unwrap_err();
        assert!(err.has("name", Reason::MissingRequired));
    }

    #[test]
    fn test_malformed_json_text() {
        let err = Probe::validate_json("{\"name\": ").unwrap_err();
        assert_eq!(err.reasons_at("$"), vec![Reason::WrongType]);
    }

    #[test]
    fn test_validate_json_parses_then_validates() {
        let probe = Probe::validate_json(r#"{"name": "b", "kind": "PART_TIME"}"#).unwrap();
        assert_eq!(probe.kind, JobType::PartTime);
    }
}
