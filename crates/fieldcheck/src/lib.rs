//! # fieldcheck
//!
//! Declarative per-field record validation with transparently mixed
//! synchronous and asynchronous rules.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let engine = Engine::new(
//!     RuleSet::new()
//!         .field("age", RuleConfig::new()
//!             .with_rule(Rule::Min(18.0))
//!             .with_message("too young"))
//!         .field("email", RuleConfig::new()
//!             .with_rule(Rule::Email(true))
//!             .with_message("bad email")),
//! );
//!
//! let data = json!({"age": 21, "email": "a@b.com"});
//! let outcome = engine.validate(data.as_object().unwrap().clone()).await?;
//! assert!(outcome.is_valid());
//! ```
//!
//! ## Anatomy
//!
//! - [`rules`] — the closed rule vocabulary ([`Rule`](rules::Rule)) and the
//!   sync/deferred evaluation type ([`Evaluation`](rules::Evaluation))
//! - [`config`] — [`RuleSet`](config::RuleSet) / [`RuleConfig`](config::RuleConfig),
//!   built fluently or loaded from JSON
//! - [`engine`] — the dispatch loop and the join-all barrier for deferred rules
//! - [`foundation`] — outcomes, structured errors, faults, message strategies
//!
//! ## Three terminal states
//!
//! `validate` distinguishes success, validation failure, and call failure:
//! rule failures are data ([`Outcome::Invalid`](foundation::Outcome)), while a
//! deferred predicate that rejects outright aborts the call with
//! [`ValidateFault`](foundation::ValidateFault).

pub mod config;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use config::{RuleConfig, RuleSet};
pub use engine::Engine;
pub use foundation::{
    ConfigError, Message, Outcome, PredicateError, Record, ValidateFault, ValidationError,
};
pub use rules::{Evaluation, Predicate, Rule};
