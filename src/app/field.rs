//! Reading loosely-typed JSON fields, so a wrongly-typed value becomes a field error
//! instead of rejecting the whole body.

use serde_json::Value;

use crate::domain::RawField;

/// A required text field. Absent and `null` read as empty text.
pub fn text(value: Option<Value>) -> RawField {
    optional_text(value).map(Option::unwrap_or_default)
}

pub fn optional_text(value: Option<Value>) -> RawField<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(format!("Expected string, received {}", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
