//! JSON request bodies such as `{"year": 1990, "month": "5", ...}`.

use std::borrow::Cow;

use bazi_core::Field;
use serde_json::{Map, Value};

use crate::error::BaziRsError;
use crate::source::{FieldSource, RawValue};

/// A parsed JSON object used as a field source.
///
/// Integers, integral floats (`1990.0`) and numeric strings are accepted.
/// `null` counts as a missing field. Booleans, fractional numbers, arrays
/// and objects are malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody {
    fields: Map<String, Value>,
}

impl JsonBody {
    /// Parse a request body; anything but a JSON object is rejected.
    pub fn parse(text: &str) -> Result<Self, BaziRsError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| BaziRsError::body(format!("malformed JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, BaziRsError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(BaziRsError::body(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }
}

impl FieldSource for JsonBody {
    fn raw(&self, field: Field) -> Option<RawValue<'_>> {
        match self.fields.get(field.name())? {
            Value::Null => None,
            Value::String(s) => Some(RawValue::Text(Cow::Borrowed(s.as_str()))),
            Value::Number(n) => Some(number(n)),
            other => Some(RawValue::Other(other.to_string())),
        }
    }
}

fn number(n: &serde_json::Number) -> RawValue<'static> {
    if let Some(i) = n.as_i64() {
        return RawValue::Integer(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            RawValue::Integer(f as i64)
        }
        _ => RawValue::Other(n.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
