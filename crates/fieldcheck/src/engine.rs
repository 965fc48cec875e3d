//! The validation engine
//!
//! [`Engine`] owns a [`RuleSet`] and exposes one operation: `validate`.
//! Each call walks the fields present in the input record, evaluates every
//! matching rule, and aggregates the results into a single [`Outcome`].
//!
//! # Concurrency model
//!
//! A call runs in two phases. The synchronous sweep evaluates every rule
//! without suspending; immediate results are checked on the spot and pending
//! futures are parked with their error context. The call then suspends until
//! *all* pending evaluations have settled (join semantics, not race).
//!
//! Synchronous errors land in deterministic order: field order × config
//! order × rule order. Deferred errors append in arrival order, which is not
//! guaranteed — callers must not rely on where deferred errors appear in the
//! list.
//!
//! The engine holds no per-call state, so one engine serves arbitrarily many
//! concurrent `validate` calls.

use crate::config::RuleSet;
use crate::foundation::{Message, Outcome, Record, ValidateFault, ValidationError};
use crate::rules::{Evaluation, Rule};
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;

/// Per-field rule validator for JSON records.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let engine = Engine::new(
///     RuleSet::new().field(
///         "age",
///         RuleConfig::new().with_rule(Rule::Min(18.0)).with_message("too young"),
///     ),
/// );
///
/// let outcome = engine.validate(record(json!({"age": 15}))).await?;
/// assert!(!outcome.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    rules: RuleSet,
}

impl Engine {
    /// Creates an engine over a rule set.
    ///
    /// The rule set is stored as-is; no structural checking happens here.
    /// Configs that never match a field simply never fire.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The engine's rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates one record against the configured rules.
    ///
    /// Fields absent from `data` are never evaluated, and fields without
    /// configured rules are skipped entirely. Returns:
    ///
    /// - `Ok(Outcome::Valid(data))` — every applicable rule passed; `data`
    ///   is the input, passed through untransformed.
    /// - `Ok(Outcome::Invalid(errors))` — at least one rule failed.
    /// - `Err(ValidateFault)` — a deferred predicate rejected outright; the
    ///   whole call is abandoned, no partial outcome is produced.
    pub async fn validate(&self, data: Record) -> Result<Outcome, ValidateFault> {
        let mut errors = Vec::new();
        let mut pending = FuturesUnordered::new();

        // Synchronous sweep: no suspension between fields or rules.
        for (field, value) in &data {
            let Some(configs) = self.rules.configs(field) else {
                continue;
            };
            for config in configs {
                for rule in config.rules() {
                    match rule.evaluate(value) {
                        Evaluation::Immediate(true) => {}
                        Evaluation::Immediate(false) => {
                            tracing::trace!(field = %field, rule = rule.name(), "rule failed");
                            errors.push(rule_error(field, value, rule, config.message()));
                        }
                        Evaluation::Pending(outcome) => {
                            pending.push(settle(
                                outcome,
                                field.clone(),
                                value.clone(),
                                rule.name(),
                                rule.param(),
                                config.message().clone(),
                            ));
                        }
                    }
                }
            }
        }

        tracing::debug!(
            fields = data.len(),
            sync_errors = errors.len(),
            deferred = pending.len(),
            "synchronous sweep complete"
        );

        // Join barrier: every deferred evaluation must settle before the call
        // resolves. A rejection aborts the call; remaining futures are dropped.
        while let Some(settled) = pending.next().await {
            if let Some(error) = settled? {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(Outcome::Valid(data))
        } else {
            Ok(Outcome::Invalid(errors))
        }
    }
}

/// Builds the error for one failed `(field, rule)` pair, resolving the
/// config's message at failure time.
fn rule_error(field: &str, value: &Value, rule: &Rule, message: &Message) -> ValidationError {
    let name = rule.name();
    let param = rule.param();
    let message = message.resolve(&param, value, name);
    ValidationError::new(field, value.clone(), name, param, message)
}

/// Drives one deferred evaluation to completion and applies the same
/// pass/fail check the synchronous path uses.
async fn settle(
    outcome: futures::future::BoxFuture<'static, Result<bool, crate::foundation::PredicateError>>,
    field: String,
    value: Value,
    rule: &'static str,
    param: Value,
    message: Message,
) -> Result<Option<ValidationError>, ValidateFault> {
    match outcome.await {
        Ok(true) => Ok(None),
        Ok(false) => {
            tracing::trace!(field = %field, rule, "deferred rule failed");
            let message = message.resolve(&param, &value, rule);
            Ok(Some(ValidationError::new(field, value, rule, param, message)))
        }
        Err(source) => Err(ValidateFault::Predicate {
            field,
            rule,
            source,
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::rules::Predicate;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().expect("object literal").clone()
    }

    #[tokio::test]
    async fn test_empty_rule_set_accepts_everything() {
        let engine = Engine::new(RuleSet::new());
        let outcome = engine
            .validate(record(json!({"anything": [1, 2, 3]})))
            .await
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_data_passes_through_unchanged() {
        let engine = Engine::new(RuleSet::new().field(
            "age",
            RuleConfig::new().with_rule(Rule::Min(18.0)).with_message("too young"),
        ));
        let data = record(json!({"age": 21, "extra": "untouched"}));
        let outcome = engine.validate(data.clone()).await.unwrap();
        assert_eq!(outcome.data(), Some(&data));
    }

    #[tokio::test]
    async fn test_unconfigured_fields_are_skipped() {
        let engine = Engine::new(RuleSet::new().field(
            "age",
            RuleConfig::new().with_rule(Rule::Min(18.0)).with_message("too young"),
        ));
        // "name" has no config; its nonsense value must not produce errors.
        let outcome = engine
            .validate(record(json!({"age": 21, "name": null})))
            .await
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_absent_configured_fields_are_not_evaluated() {
        let engine = Engine::new(RuleSet::new().field(
            "age",
            RuleConfig::new().with_rule(Rule::Required(true)).with_message("required"),
        ));
        let outcome = engine.validate(record(json!({}))).await.unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_sync_custom_rule() {
        let engine = Engine::new(RuleSet::new().field(
            "n",
            RuleConfig::new()
                .with_rule(Rule::Custom(Predicate::sync(|v| {
                    v.as_i64().is_some_and(|n| n % 2 == 0)
                })))
                .with_message("must be even"),
        ));

        assert!(engine.validate(record(json!({"n": 4}))).await.unwrap().is_valid());

        let outcome = engine.validate(record(json!({"n": 3}))).await.unwrap();
        let errors = outcome.errors().unwrap();
        assert_eq!(errors[0].rule, "validator");
        assert_eq!(errors[0].message, "must be even");
    }

    #[tokio::test]
    async fn test_engine_is_shareable_across_concurrent_calls() {
        let engine = Engine::new(RuleSet::new().field(
            "age",
            RuleConfig::new().with_rule(Rule::Min(18.0)).with_message("too young"),
        ));

        let (a, b) = tokio::join!(
            engine.validate(record(json!({"age": 21}))),
            engine.validate(record(json!({"age": 15}))),
        );
        assert!(a.unwrap().is_valid());
        assert!(!b.unwrap().is_valid());
    }
}
