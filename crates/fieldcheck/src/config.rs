//! Rule-set configuration
//!
//! A [`RuleSet`] maps field names to one or more [`RuleConfig`]s. It is built
//! once, handed to the [`Engine`](crate::engine::Engine), and never mutated
//! afterwards — it is shared read-only across concurrent `validate` calls.
//!
//! Rule sets come from two places:
//!
//! - the fluent builder API (required for custom predicates and computed
//!   messages, which are closures), or
//! - [`RuleSet::from_json`], which loads the declarative subset from a JSON
//!   document and skips unrecognized rule keys silently.

use crate::foundation::{ConfigError, Message};
use crate::rules::Rule;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};

// ============================================================================
// RULE CONFIG
// ============================================================================

/// The rules applied to one field, plus the message strategy for failures.
///
/// Rules evaluate in the order they were added; that order is observable in
/// the error list for synchronous rules.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::config::RuleConfig;
/// use fieldcheck::rules::Rule;
///
/// let age = RuleConfig::new()
///     .with_rule(Rule::Required(true))
///     .with_rule(Rule::Min(18.0))
///     .with_message("must be an adult");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleConfig {
    rules: Vec<Rule>,
    message: Message,
}

impl RuleConfig {
    /// Creates an empty config with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Order of addition is evaluation order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the message strategy for every rule in this config.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.message = message.into();
        self
    }

    /// The configured rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The message strategy.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The full per-engine configuration: field name → ordered config sequence.
///
/// No structural validation happens at construction time; a config that
/// matches nothing simply never fires.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: IndexMap<String, Vec<RuleConfig>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a config to a field.
    ///
    /// Calling this repeatedly for the same field appends further configs;
    /// all of them are evaluated, in attachment order.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, config: RuleConfig) -> Self {
        self.fields.entry(name.into()).or_default().push(config);
        self
    }

    /// The configs attached to a field, if any.
    #[must_use]
    pub fn configs(&self, field: &str) -> Option<&[RuleConfig]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Number of configured fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no field has any config.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Loads a rule set from a JSON document.
    ///
    /// The document is an object mapping field names to a config object or an
    /// array of config objects. Inside a config object, entries map to rules
    /// by wire name and `"message"` sets a literal message:
    ///
    /// ```json
    /// {
    ///   "age":  { "required": true, "min": 18, "message": "must be an adult" },
    ///   "name": [
    ///     { "required": true, "message": "name is required" },
    ///     { "minLength": 2, "message": "name is too short" }
    ///   ]
    /// }
    /// ```
    ///
    /// Unknown keys are skipped silently so documents written for a newer
    /// rule vocabulary still load. `validator` rules and computed messages
    /// are closures and cannot appear in JSON; attach them via the builder.
    pub fn from_json(doc: &Value) -> Result<Self, ConfigError> {
        let Value::Object(fields) = doc else {
            return Err(ConfigError::NotAnObject {
                found: json_type_name(doc),
            });
        };

        let mut set = Self::new();
        for (field, entry) in fields {
            match entry {
                Value::Object(config) => {
                    set = set.field(field.as_str(), parse_config(field, config)?);
                }
                Value::Array(configs) => {
                    for config in configs {
                        let Value::Object(config) = config else {
                            return Err(ConfigError::BadFieldEntry {
                                field: field.clone(),
                            });
                        };
                        set = set.field(field.as_str(), parse_config(field, config)?);
                    }
                }
                _ => {
                    return Err(ConfigError::BadFieldEntry {
                        field: field.clone(),
                    });
                }
            }
        }
        Ok(set)
    }
}

// ============================================================================
// JSON PARSING
// ============================================================================

fn parse_config(field: &str, entries: &Map<String, Value>) -> Result<RuleConfig, ConfigError> {
    let mut config = RuleConfig::new();

    for (key, param) in entries {
        let rule = match key.as_str() {
            "message" => {
                let text = param.as_str().ok_or(ConfigError::BadParam {
                    field: field.to_string(),
                    rule: "message",
                    expected: "a string message",
                })?;
                config = config.with_message(text.to_string());
                continue;
            }
            "required" => Rule::Required(bool_param(field, "required", param)?),
            "number" => Rule::Number(bool_param(field, "number", param)?),
            "digits" => Rule::Digits(bool_param(field, "digits", param)?),
            "dateISO" => Rule::DateIso(bool_param(field, "dateISO", param)?),
            "url" => Rule::Url(bool_param(field, "url", param)?),
            "email" => Rule::Email(bool_param(field, "email", param)?),
            "min" => Rule::Min(number_param(field, "min", param)?),
            "max" => Rule::Max(number_param(field, "max", param)?),
            "step" => Rule::Step(number_param(field, "step", param)?),
            "range" => {
                let (lo, hi) = pair_param(field, "range", param)?;
                Rule::Range(lo, hi)
            }
            "minLength" => Rule::MinLength(length_param(field, "minLength", param)?),
            "maxLength" => Rule::MaxLength(length_param(field, "maxLength", param)?),
            "lengthRange" => {
                let (lo, hi) = pair_param(field, "lengthRange", param)?;
                if lo < 0.0 || hi < 0.0 || lo.fract() != 0.0 || hi.fract() != 0.0 {
                    return Err(ConfigError::BadParam {
                        field: field.to_string(),
                        rule: "lengthRange",
                        expected: "a [lo, hi] pair of non-negative integers",
                    });
                }
                Rule::LengthRange(lo as usize, hi as usize)
            }
            "equal" => Rule::Equal(param.clone()),
            "notEqual" => Rule::NotEqual(param.clone()),
            "pattern" => {
                let source = param.as_str().ok_or(ConfigError::BadParam {
                    field: field.to_string(),
                    rule: "pattern",
                    expected: "a regular expression string",
                })?;
                let re = Regex::new(source).map_err(|source| ConfigError::BadPattern {
                    field: field.to_string(),
                    source: Box::new(source),
                })?;
                Rule::Pattern(re)
            }
            // Not expressible in JSON (the param is a closure); builder only.
            "validator" => continue,
            unknown => {
                tracing::trace!(field, key = unknown, "skipping unrecognized rule key");
                continue;
            }
        };
        config = config.with_rule(rule);
    }

    Ok(config)
}

fn bool_param(field: &str, rule: &'static str, param: &Value) -> Result<bool, ConfigError> {
    param.as_bool().ok_or(ConfigError::BadParam {
        field: field.to_string(),
        rule,
        expected: "a boolean",
    })
}

fn number_param(field: &str, rule: &'static str, param: &Value) -> Result<f64, ConfigError> {
    param.as_f64().ok_or(ConfigError::BadParam {
        field: field.to_string(),
        rule,
        expected: "a number",
    })
}

fn length_param(field: &str, rule: &'static str, param: &Value) -> Result<usize, ConfigError> {
    param
        .as_u64()
        .map(|n| n as usize)
        .ok_or(ConfigError::BadParam {
            field: field.to_string(),
            rule,
            expected: "a non-negative integer",
        })
}

fn pair_param(field: &str, rule: &'static str, param: &Value) -> Result<(f64, f64), ConfigError> {
    let err = || ConfigError::BadParam {
        field: field.to_string(),
        rule,
        expected: "a [lo, hi] pair of numbers",
    };
    let items = param.as_array().ok_or_else(err)?;
    match items.as_slice() {
        [lo, hi] => Ok((lo.as_f64().ok_or_else(err)?, hi.as_f64().ok_or_else(err)?)),
        _ => Err(err()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// TESTS
// ============================================================================
