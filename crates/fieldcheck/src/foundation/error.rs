//! Error types for validation failures
//!
//! Two kinds of failure live here and they must not be confused:
//!
//! - [`ValidationError`] — a rule said "no". These are data, collected and
//!   returned inside an [`Outcome`](crate::foundation::Outcome), never raised.
//! - [`ValidateFault`] — the machinery broke: a deferred predicate rejected
//!   instead of producing a boolean. This aborts the whole `validate` call.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Boxed error a custom predicate may reject with.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed `(field, rule)` pair.
///
/// `value` is the field's actual input value at failure time, not the rule
/// parameter. `message` is already resolved: literal messages are carried
/// verbatim, computed messages have been invoked with `(param, value, rule)`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::ValidationError;
/// use serde_json::json;
///
/// let error = ValidationError::new("age", json!(15), "min", json!(18), "too young");
/// assert_eq!(error.rule, "min");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Name of the field that failed.
    pub field: String,

    /// The field's input value at failure time.
    pub value: Value,

    /// Wire name of the failing rule, e.g. `"min"`, `"pattern"`.
    pub rule: &'static str,

    /// JSON rendering of the rule's parameter.
    pub param: Value,

    /// Resolved human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error from its five components.
    pub fn new(
        field: impl Into<String>,
        value: Value,
        rule: &'static str,
        param: Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value,
            rule,
            param,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (value: {}, param: {}): {}",
            self.field, self.rule, self.value, self.param, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CALL-LEVEL FAULTS
// ============================================================================

/// Fatal failure of a single `validate` call.
///
/// Raised only when a deferred predicate rejects outright — it failed to
/// produce any boolean at all. Rule failures never take this path; they are
/// aggregated into the outcome instead.
#[derive(Debug, Error)]
pub enum ValidateFault {
    /// A deferred predicate rejected instead of settling to a boolean.
    #[error("rule `{rule}` on field `{field}` failed to produce a result")]
    Predicate {
        /// Field the predicate was evaluating.
        field: String,
        /// Wire name of the rule.
        rule: &'static str,
        /// The predicate's own error.
        #[source]
        source: PredicateError,
    },
}

impl ValidateFault {
    /// Field the faulting predicate was attached to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Predicate { field, .. } => field,
        }
    }

    /// Wire name of the faulting rule.
    #[must_use]
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Predicate { rule, .. } => rule,
        }
    }
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

/// Error produced while loading a [`RuleSet`](crate::config::RuleSet) from JSON.
///
/// Unknown rule keys are *not* errors — they are skipped silently for forward
/// compatibility. Only structurally unusable documents surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The top-level document was not a JSON object.
    #[error("rule set must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type name of what was found instead.
        found: &'static str,
    },

    /// A field entry was neither a config object nor an array of them.
    #[error("field `{field}`: expected a config object or an array of config objects")]
    BadFieldEntry {
        /// Offending field name.
        field: String,
    },

    /// A recognized rule key carried a parameter of the wrong JSON type.
    #[error("field `{field}`, rule `{rule}`: expected {expected}")]
    BadParam {
        /// Offending field name.
        field: String,
        /// Wire name of the rule.
        rule: &'static str,
        /// Description of the expected parameter shape.
        expected: &'static str,
    },

    /// A `pattern` entry did not compile as a regular expression.
    #[error("field `{field}`: invalid pattern")]
    BadPattern {
        /// Offending field name.
        field: String,
        /// Compilation failure from the regex engine.
        #[source]
        source: Box<regex::Error>,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let error = ValidationError::new("age", json!(15), "min", json!(18), "too young");
        let rendered = error.to_string();
        assert!(rendered.contains("age"));
        assert!(rendered.contains("min"));
        assert!(rendered.contains("too young"));
    }

    #[test]
    fn test_error_serializes_all_fields() {
        let error = ValidationError::new("age", json!(15), "min", json!(18), "too young");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            json!({
                "field": "age",
                "value": 15,
                "rule": "min",
                "param": 18,
                "message": "too young",
            })
        );
    }

    #[test]
    fn test_fault_accessors() {
        let fault = ValidateFault::Predicate {
            field: "name".into(),
            rule: "validator",
            source: "boom".into(),
        };
        assert_eq!(fault.field(), "name");
        assert_eq!(fault.rule(), "validator");
        assert!(fault.to_string().contains("validator"));
    }
}
