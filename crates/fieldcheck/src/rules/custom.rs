//! Caller-supplied predicates for the `validator` rule
//!
//! A [`Predicate`] wraps a closure that inspects a field value and either
//! answers immediately or defers to a future. Deferred predicates may also
//! reject, which aborts the whole `validate` call (see
//! [`ValidateFault`](crate::foundation::ValidateFault)).

use super::Evaluation;
use crate::foundation::PredicateError;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A caller-supplied rule body.
///
/// Cheap to clone; the closure is shared behind an `Arc`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::rules::Predicate;
///
/// // Synchronous:
/// let even = Predicate::sync(|value| {
///     value.as_i64().is_some_and(|n| n % 2 == 0)
/// });
///
/// // Deferred (e.g. a uniqueness check against a store):
/// let unique = Predicate::deferred(|value| async move {
///     Ok(lookup(&value).await?.is_none())
/// });
/// ```
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Evaluation + Send + Sync>);

impl Predicate {
    /// Wraps a pure synchronous check.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(move |value| Evaluation::Immediate(f(value))))
    }

    /// Wraps an asynchronous check.
    ///
    /// The closure receives an owned clone of the field value so the returned
    /// future can outlive the synchronous sweep. Resolving `Ok(false)` records
    /// a validation error; rejecting with `Err` is fatal for the call.
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, PredicateError>> + Send + 'static,
    {
        Self(Arc::new(move |value| {
            Evaluation::Pending(Box::pin(f(value.clone())))
        }))
    }

    /// Runs the predicate against one field value.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> Evaluation {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&"<fn>").finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
