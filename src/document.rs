//! Loosely-typed metadata documents.
//!
//! A [`RawDocument`] is the JSON object an extractor tool prints for one
//! media resource. Nothing about its shape is trusted: keys come and go
//! between sites, values may be `null`, and numbers sometimes arrive as
//! strings. Reads therefore go through [`Field`], which keeps "absent"
//! and "null" apart from a present value and coerces lazily.

use serde_json::{Map, Value};

use crate::error::FetchError;

/// Why a single field could not be read as the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum FieldErrorKind {
    /// The key does not exist.
    Missing,
    /// The key exists but holds `null`.
    Null,
    /// The value exists but cannot be coerced.
    WrongType { expected: &'static str },
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Null => write!(f, "null"),
            Self::WrongType { expected } => write!(f, "not coercible to {expected}"),
        }
    }
}

/// Tri-state view of one key in a JSON object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Absent,
    Null,
    Value(&'a Value),
}

impl<'a> Field<'a> {
    /// Look up `key` in `map`.
    pub fn of(map: &'a Map<String, Value>, key: &str) -> Self {
        match map.get(key) {
            None => Field::Absent,
            Some(Value::Null) => Field::Null,
            Some(value) => Field::Value(value),
        }
    }

    /// `true` unless the key is missing. A `null` value counts as present.
    pub fn is_present(&self) -> bool {
        !matches!(self, Field::Absent)
    }

    /// Read as a string. Scalars are rendered to text; containers are rejected.
    pub fn string(self) -> Result<String, FieldErrorKind> {
        match self.value()? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(FieldErrorKind::WrongType { expected: "string" }),
        }
    }

    /// Read as an integer. Floats truncate, numeric strings are parsed.
    pub fn int(self) -> Result<i64, FieldErrorKind> {
        coerce_int(self.value()?).ok_or(FieldErrorKind::WrongType {
            expected: "integer",
        })
    }

    /// Read as an integer, falling back to `default` on any failure.
    pub fn int_or(self, default: i64) -> i64 {
        self.int().unwrap_or(default)
    }

    fn value(self) -> Result<&'a Value, FieldErrorKind> {
        match self {
            Field::Absent => Err(FieldErrorKind::Missing),
            Field::Null => Err(FieldErrorKind::Null),
            Field::Value(value) => Ok(value),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_int(value: &Value) -> Option<i64> {
    let truncate = |f: f64| {
        let in_range = f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64;
        in_range.then(|| f.trunc() as i64)
    };
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(truncate),
        _ => None,
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An untyped key-value document describing one media resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDocument {
    fields: Map<String, Value>,
}

impl RawDocument {
    /// Wrap an already parsed JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(FetchError::NotAnObject(kind_of(&other))),
        }
    }

    /// Parse a JSON document from text.
    pub fn parse(text: &str) -> Result<Self, FetchError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn field(&self, key: &str) -> Field<'_> {
        Field::of(&self.fields, key)
    }

    /// The array stored under `key`, if any.
    pub fn array(&self, key: &str) -> Option<&[Value]> {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}
