//! Basic usage example for fieldcheck

use fieldcheck::prelude::*;
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ValidateFault> {
    let engine = Engine::new(
        RuleSet::new()
            .field(
                "age",
                RuleConfig::new()
                    .with_rule(Rule::Required(true))
                    .with_rule(Rule::Min(18.0))
                    .with_message("must be an adult"),
            )
            .field(
                "email",
                RuleConfig::new().with_rule(Rule::Email(true)).with_message("bad email"),
            )
            .field(
                "username",
                RuleConfig::new()
                    .with_rule(Rule::MinLength(3))
                    .with_rule(Rule::Custom(Predicate::deferred(|value| async move {
                        // Stand-in for a uniqueness lookup against a store.
                        Ok(value.as_str() != Some("admin"))
                    })))
                    .with_message(Message::computed(|_param, value, rule| {
                        format!("username {value} rejected by `{rule}`")
                    })),
            ),
    );

    for input in [
        json!({"age": 30, "email": "ada@example.com", "username": "ada"}),
        json!({"age": 15, "email": "nope", "username": "admin"}),
    ] {
        let data = input.as_object().expect("object literal").clone();
        match engine.validate(data).await? {
            Outcome::Valid(data) => println!("✓ valid: {}", json!(data)),
            Outcome::Invalid(errors) => {
                println!("✗ {} error(s):", errors.len());
                for error in errors {
                    println!("    {error}");
                }
            }
        }
    }

    Ok(())
}
