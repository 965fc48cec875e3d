//! Loading rule sets from JSON documents and validating with them.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    value.as_object().expect("object literal").clone()
}

#[tokio::test]
async fn json_loaded_rule_set_validates_records() {
    let rules = RuleSet::from_json(&json!({
        "age": { "required": true, "min": 18, "message": "must be an adult" },
        "email": { "email": true, "message": "bad email" },
        "name": [
            { "required": true, "message": "name is required" },
            { "minLength": 2, "maxLength": 32, "message": "bad name length" },
        ],
    }))
    .unwrap();
    let engine = Engine::new(rules);

    let ok = record(json!({"age": 30, "email": "a@b.com", "name": "Ada"}));
    assert!(engine.validate(ok.clone()).await.unwrap().is_valid());

    let outcome = engine
        .validate(record(json!({"age": 15, "email": "nope", "name": ""})))
        .await
        .unwrap();
    let ids: Vec<_> = outcome
        .errors()
        .unwrap()
        .iter()
        .map(|e| (e.field.as_str(), e.rule, e.message.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("age", "min", "must be an adult"),
            ("email", "email", "bad email"),
            ("name", "required", "name is required"),
            ("name", "minLength", "bad name length"),
        ]
    );
}

#[tokio::test]
async fn unknown_keys_in_documents_are_no_ops() {
    let rules = RuleSet::from_json(&json!({
        "age": { "min": 18, "someFutureRule": 42, "message": "too young" },
    }))
    .unwrap();
    let engine = Engine::new(rules);

    // Only "min" applies; the unknown key contributes nothing.
    assert!(engine.validate(record(json!({"age": 20}))).await.unwrap().is_valid());
    let outcome = engine.validate(record(json!({"age": 10}))).await.unwrap();
    assert_eq!(outcome.errors().unwrap().len(), 1);
}

#[tokio::test]
async fn format_rules_from_json() {
    let rules = RuleSet::from_json(&json!({
        "day": { "dateISO": true, "message": "bad date" },
        "site": { "url": true, "message": "bad url" },
        "pin": { "digits": true, "lengthRange": [4, 6], "message": "bad pin" },
        "parity": { "step": 2, "message": "odd" },
        "kind": { "equal": "user", "message": "not a user" },
    }))
    .unwrap();
    let engine = Engine::new(rules);

    let ok = record(json!({
        "day": "2024-06-01",
        "site": "https://example.com",
        "pin": "12345",
        "parity": 8,
        "kind": "user",
    }));
    assert!(engine.validate(ok).await.unwrap().is_valid());

    let outcome = engine
        .validate(record(json!({
            "day": "01/06/2024",
            "site": "example.com",
            "pin": "abc",
            "parity": 7,
            "kind": "admin",
        })))
        .await
        .unwrap();
    let mut fields: Vec<_> = outcome
        .errors()
        .unwrap()
        .iter()
        .map(|e| e.field.as_str())
        .collect();
    fields.sort_unstable();
    fields.dedup();
    assert_eq!(fields, vec!["day", "kind", "parity", "pin", "site"]);
}

#[tokio::test]
async fn pattern_rule_from_json() {
    let rules = RuleSet::from_json(&json!({
        "slug": { "pattern": "^[a-z0-9-]+$", "message": "bad slug" },
    }))
    .unwrap();
    let engine = Engine::new(rules);

    assert!(engine
        .validate(record(json!({"slug": "my-page-2"})))
        .await
        .unwrap()
        .is_valid());

    let outcome = engine.validate(record(json!({"slug": "My Page"}))).await.unwrap();
    let error = &outcome.errors().unwrap()[0];
    assert_eq!(error.rule, "pattern");
    assert_eq!(error.param, json!("^[a-z0-9-]+$"));
}

#[test]
fn outcome_serializes_to_wire_shape() {
    let outcome = Outcome::Invalid(vec![ValidationError::new(
        "age",
        json!(15),
        "min",
        json!(18),
        "too young",
    )]);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "valid": false,
            "errors": [
                {"field": "age", "value": 15, "rule": "min", "param": 18, "message": "too young"},
            ],
        })
    );
}
