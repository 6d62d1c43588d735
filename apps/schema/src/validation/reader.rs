use serde_json::{Map, Value};

use crate::enums::Enumeration;
use crate::errors::Reason;
use crate::validation::{Collector, FieldPath};

/// A field value type that can be checked and extracted from raw JSON.
///
/// Implementations report at most their own violations (and those of their
/// children) and return `None` if anything under `path` was rejected.
pub trait FromField: Sized {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self>;
}

/// Field accessor over one JSON object.
pub struct ObjectReader<'v> {
    map: &'v Map<String, Value>,
    path: FieldPath,
}

impl<'v> ObjectReader<'v> {
    pub fn new(map: &'v Map<String, Value>, path: FieldPath) -> Self {
        Self { map, path }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// `null` counts as absent.
    fn present(&self, key: &str) -> Option<&'v Value> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required<T: FromField>(&self, cx: &mut Collector<'_>, key: &str) -> Option<T> {
        let path = self.path.key(key);
        match self.present(key) {
            Some(value) => T::from_field(value, &path, cx),
            None => {
                cx.report(path, Reason::MissingRequired);
                None
            }
        }
    }

    /// `Some(None)` when absent, `Some(Some(_))` when present and valid,
    /// `None` when present but rejected.
    pub fn optional<T: FromField>(&self, cx: &mut Collector<'_>, key: &str) -> Option<Option<T>> {
        match self.present(key) {
            Some(value) => T::from_field(value, &self.path.key(key), cx).map(Some),
            None => Some(None),
        }
    }
}

fn wrong_type<T>(path: &FieldPath, cx: &mut Collector<'_>) -> Option<T> {
    cx.report(path.clone(), Reason::WrongType);
    None
}

impl FromField for String {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => wrong_type(path, cx),
        }
    }
}

impl FromField for f64 {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
        match value.as_f64() {
            Some(n) => Some(n),
            None => wrong_type(path, cx),
        }
    }
}

/// Integral value of a JSON number, including ones written as `1.0` or `1e3`.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl FromField for i32 {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
        match whole_number(value).and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => wrong_type(path, cx),
        }
    }
}

impl FromField for u32 {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
        match whole_number(value).and_then(|n| u32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => wrong_type(path, cx),
        }
    }
}

impl<T: FromField> FromField for Vec<T> {
    fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
        let Value::Array(items) = value else {
            return wrong_type(path, cx);
        };

        // Visit every element so each bad one is reported.
        let read: Vec<Option<T>> = items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_field(item, &path.index(i), cx))
            .collect();
        read.into_iter().collect()
    }
}

/// Strings outside `E::ALL` are `not_in_enumeration`; non-strings are `wrong_type`.
pub fn read_enumeration<E: Enumeration>(
    value: &Value,
    path: &FieldPath,
    cx: &mut Collector<'_>,
) -> Option<E> {
    let Value::String(raw) = value else {
        return wrong_type(path, cx);
    };
    match E::parse(raw) {
        Some(member) => Some(member),
        None => {
            tracing::trace!(enumeration = E::NAME, value = %raw, "value outside enumeration");
            cx.report(path.clone(), Reason::NotInEnumeration);
            None
        }
    }
}
