//! Value coercion helpers shared by the rule predicates
//!
//! Record values arrive as loosely-typed JSON; the numeric, length, and
//! format predicates all agree on one coercion policy, defined here:
//!
//! - numbers: a JSON number, or a string that parses as one
//! - length: element count for arrays, char count for strings, char count
//!   of the rendered form for everything else
//! - text: strings as-is, scalars rendered, containers serialized

use serde_json::Value;
use std::borrow::Cow;

/// Extracts a number for the `min`/`max`/`range`/`step`/`number` rules.
///
/// Strings are trimmed and parsed; anything else non-numeric yields `None`,
/// which the comparison rules treat as a failed comparison.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Computed length for the `minLength`/`maxLength`/`lengthRange` rules.
///
/// Arrays count elements; strings count chars. Other values are measured on
/// their rendered form, so `lengthRange` on a number behaves like checking
/// its digit count.
#[must_use]
pub fn length_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        other => text_of(other).chars().count(),
    }
}

/// String form used by the format and pattern rules.
#[must_use]
pub fn text_of(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        container => Cow::Owned(container.to_string()),
    }
}

/// Presence check for the `required` rule.
///
/// Arrays are present iff non-empty; everything else follows truthiness:
/// null, `false`, `0`, and `""` are absent.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
