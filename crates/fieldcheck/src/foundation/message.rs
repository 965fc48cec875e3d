//! Error message strategy for a rule config
//!
//! A config carries exactly one message, used for every rule in that config
//! that fails. It is either a literal string or a callback invoked at failure
//! time with `(param, value, rule)`.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Signature of a computed message callback.
///
/// Receives the failing rule's parameter, the field's input value, and the
/// rule's wire name; returns the message to record verbatim.
pub type MessageFn = dyn Fn(&Value, &Value, &str) -> String + Send + Sync;

/// Message strategy for one [`RuleConfig`](crate::config::RuleConfig).
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::Message;
///
/// let literal = Message::from("too young");
/// let computed = Message::computed(|param, _value, rule| {
///     format!("{rule} violated (expected {param})")
/// });
/// ```
#[derive(Clone)]
pub enum Message {
    /// Fixed string, recorded verbatim for every failure in the config.
    Literal(Cow<'static, str>),
    /// Callback resolved once per failure with `(param, value, rule)`.
    Computed(Arc<MessageFn>),
}

impl Message {
    /// Wraps a callback as a computed message.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value, &str) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Resolves the message for one failure.
    ///
    /// Literals are cloned as-is; computed messages are invoked with
    /// `(param, value, rule)` and their return value captured.
    #[must_use]
    pub fn resolve(&self, param: &Value, value: &Value, rule: &str) -> String {
        match self {
            Self::Literal(text) => text.clone().into_owned(),
            Self::Computed(f) => f(param, value, rule),
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::Literal(Cow::Borrowed("invalid value"))
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Literal(Cow::Owned(text))
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
