//! Core validation types
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Outcomes**: [`Outcome`], [`Record`]
//! - **Errors**: [`ValidationError`] (rule failure as data),
//!   [`ValidateFault`] (call-level fault), [`ConfigError`] (rule-set loading)
//! - **Messages**: [`Message`] — literal or computed per-config message
//!
//! # Error taxonomy
//!
//! Rule failures never escape as faults; they are converted into
//! [`ValidationError`] values and aggregated into an [`Outcome`]. Only
//! infrastructure failures — a deferred predicate rejecting outright —
//! propagate as [`ValidateFault`]. Callers therefore distinguish three
//! terminal states: valid, invalid with structured errors, and fault.

pub mod error;
pub mod message;
pub mod outcome;

pub use error::{ConfigError, PredicateError, ValidateFault, ValidationError};
pub use message::{Message, MessageFn};
pub use outcome::{Outcome, Record};
