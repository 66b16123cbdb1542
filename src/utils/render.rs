//! Canonical string rendering of field values.

use serde_json::Value;

/// Render a field value to its canonical string form
///
/// String values render verbatim (no JSON quoting); numbers and booleans use
/// their canonical textual representation; nested arrays and objects render
/// as compact JSON text. A JSON `null` has no string form and yields `None` -
/// callers decide how to fail.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // compact JSON text for nested values
        other => Some(other.to_string()),
    }
}
