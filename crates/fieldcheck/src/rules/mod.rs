//! The rule table: a closed vocabulary of per-field constraints
//!
//! Each [`Rule`] variant pairs a recognized rule kind with its parameter.
//! The enum is the single source of truth for what rule names exist — the
//! engine dispatches by pattern-matching, so adding a variant is a
//! compile-time-checked change, not a string lookup.
//!
//! Predicates answer through [`Evaluation`]: either an immediate boolean or
//! a pending future of one. Only [`Rule::Custom`] can defer; the built-in
//! rules are pure and synchronous.

pub mod coerce;
pub mod custom;
pub mod patterns;

pub use custom::Predicate;

use crate::foundation::PredicateError;
use futures::future::BoxFuture;
use regex::Regex;
use serde_json::{json, Value};
use std::fmt;

// ============================================================================
// EVALUATION
// ============================================================================

/// Result of running one rule predicate against one value.
pub enum Evaluation {
    /// The predicate answered synchronously.
    Immediate(bool),
    /// The predicate deferred; the future settles to a boolean or rejects.
    Pending(BoxFuture<'static, Result<bool, PredicateError>>),
}

impl fmt::Debug for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(b) => f.debug_tuple("Immediate").field(b).finish(),
            Self::Pending(_) => f.debug_tuple("Pending").field(&"<future>").finish(),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One named, parameterized constraint on a field value.
///
/// The boolean-parameterized format rules (`required`, `number`, `digits`,
/// `dateISO`, `url`, `email`) treat a `false` param as an off-switch and
/// always pass. The comparison rules (`min`, `max`, ...) have no off-switch;
/// their param is always applied.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::rules::{Evaluation, Rule};
/// use serde_json::json;
///
/// let rule = Rule::Min(18.0);
/// assert!(matches!(rule.evaluate(&json!(21)), Evaluation::Immediate(true)));
/// assert!(matches!(rule.evaluate(&json!(15)), Evaluation::Immediate(false)));
/// ```
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present (non-empty array, otherwise truthy). `false` ⇒ off.
    Required(bool),
    /// Value must be numerically coercible. `false` ⇒ off.
    Number(bool),
    /// String form must be digits only. `false` ⇒ off.
    Digits(bool),
    /// String form must be an ISO `YYYY-MM-DD` date. `false` ⇒ off.
    DateIso(bool),
    /// String form must be a URL. `false` ⇒ off.
    Url(bool),
    /// String form must be an email address. `false` ⇒ off.
    Email(bool),
    /// Numeric value must be `>=` the param.
    Min(f64),
    /// Numeric value must be `<=` the param.
    Max(f64),
    /// Numeric value must lie in `[lo, hi]`.
    Range(f64, f64),
    /// Computed length must be `>=` the param.
    MinLength(usize),
    /// Computed length must be `<=` the param.
    MaxLength(usize),
    /// Computed length must lie in `[lo, hi]`.
    LengthRange(usize, usize),
    /// Numeric value must be an exact multiple of the param.
    Step(f64),
    /// Value must equal the param exactly.
    Equal(Value),
    /// Value must not equal the param.
    NotEqual(Value),
    /// String form must match the regex.
    Pattern(Regex),
    /// Caller-supplied predicate, possibly deferred.
    Custom(Predicate),
}

impl Rule {
    /// Wire name of this rule, as it appears in configs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required(_) => "required",
            Self::Number(_) => "number",
            Self::Digits(_) => "digits",
            Self::DateIso(_) => "dateISO",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Range(_, _) => "range",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::LengthRange(_, _) => "lengthRange",
            Self::Step(_) => "step",
            Self::Equal(_) => "equal",
            Self::NotEqual(_) => "notEqual",
            Self::Pattern(_) => "pattern",
            Self::Custom(_) => "validator",
        }
    }

    /// JSON rendering of this rule's parameter, for error reporting.
    ///
    /// Custom predicates have no renderable parameter and report `null`.
    #[must_use]
    pub fn param(&self) -> Value {
        match self {
            Self::Required(p)
            | Self::Number(p)
            | Self::Digits(p)
            | Self::DateIso(p)
            | Self::Url(p)
            | Self::Email(p) => json!(p),
            Self::Min(p) | Self::Max(p) | Self::Step(p) => json!(p),
            Self::Range(lo, hi) => json!([lo, hi]),
            Self::MinLength(p) | Self::MaxLength(p) => json!(p),
            Self::LengthRange(lo, hi) => json!([lo, hi]),
            Self::Equal(p) | Self::NotEqual(p) => p.clone(),
            Self::Pattern(re) => json!(re.as_str()),
            Self::Custom(_) => Value::Null,
        }
    }

    /// Evaluates this rule against one field value.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> Evaluation {
        use Evaluation::Immediate;

        match self {
            Self::Required(param) => Immediate(!param || coerce::is_present(value)),
            Self::Number(param) => Immediate(!param || coerce::as_number(value).is_some()),
            Self::Digits(param) => {
                Immediate(!param || patterns::DIGITS.is_match(&coerce::text_of(value)))
            }
            Self::DateIso(param) => {
                Immediate(!param || patterns::DATE_ISO.is_match(&coerce::text_of(value)))
            }
            Self::Url(param) => {
                Immediate(!param || patterns::URL.is_match(&coerce::text_of(value)))
            }
            Self::Email(param) => {
                Immediate(!param || patterns::EMAIL.is_match(&coerce::text_of(value)))
            }
            Self::Min(min) => Immediate(coerce::as_number(value).is_some_and(|n| n >= *min)),
            Self::Max(max) => Immediate(coerce::as_number(value).is_some_and(|n| n <= *max)),
            Self::Range(lo, hi) => {
                Immediate(coerce::as_number(value).is_some_and(|n| in_range(*lo, *hi, n)))
            }
            Self::MinLength(min) => Immediate(coerce::length_of(value) >= *min),
            Self::MaxLength(max) => Immediate(coerce::length_of(value) <= *max),
            // Delegates to the same interval predicate as `range`, applied to
            // the computed length.
            Self::LengthRange(lo, hi) => {
                Immediate(in_range(*lo as f64, *hi as f64, coerce::length_of(value) as f64))
            }
            // `step == 0` yields NaN for the remainder and therefore fails,
            // matching the comparison-against-zero semantics.
            Self::Step(step) => {
                Immediate(coerce::as_number(value).is_some_and(|n| n % *step == 0.0))
            }
            Self::Equal(param) => Immediate(value == param),
            Self::NotEqual(param) => Immediate(value != param),
            Self::Pattern(re) => Immediate(re.is_match(&coerce::text_of(value))),
            Self::Custom(pred) => pred.evaluate(value),
        }
    }
}

fn in_range(lo: f64, hi: f64, n: f64) -> bool {
    n >= lo && n <= hi
}

// ============================================================================
// TESTS
// ============================================================================
