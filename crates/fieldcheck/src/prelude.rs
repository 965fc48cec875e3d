//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in
//! everything needed for typical usage.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let engine = Engine::new(
//!     RuleSet::new().field(
//!         "name",
//!         RuleConfig::new()
//!             .with_rule(Rule::Required(true))
//!             .with_rule(Rule::MinLength(2))
//!             .with_message("invalid name"),
//!     ),
//! );
//! ```

pub use crate::config::{RuleConfig, RuleSet};
pub use crate::engine::Engine;
pub use crate::foundation::{
    ConfigError, Message, Outcome, PredicateError, Record, ValidateFault, ValidationError,
};
pub use crate::rules::{Evaluation, Predicate, Rule};
