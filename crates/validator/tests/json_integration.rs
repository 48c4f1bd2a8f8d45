//! Integration tests for validating decoded JSON bodies.

#![cfg(feature = "json")]

use fieldcheck::Session;
use fieldcheck::foundation::Value;
use serde_json::json;

// ============================================================================
// REQUEST BODIES
// ============================================================================

fn validate_signup(body: &serde_json::Value) -> Session {
    let mut session = Session::new();
    session
        .chain("username", &body["username"])
        .required()
        .length(3, 20)
        .is_alphanumeric();
    session.chain("email", &body["email"]).required().is_email();
    session.chain("age", &body["age"]).numeric().range(13, 130);
    session
        .chain("interests", &body["interests"])
        .min_count(1)
        .max_count(5);
    session.chain("born", &body["born"]).is_iso8601_date();
    session
}

#[test]
fn valid_body_has_no_errors() {
    let body = json!({
        "username": "alice42",
        "email": "alice@example.com",
        "age": 30,
        "interests": ["rust"],
        "born": "1994-05-01"
    });
    assert!(validate_signup(&body).result().is_none());
}

#[test]
fn missing_keys_are_absent() {
    // `body["missing"]` indexes to null, which converts to Absent: optional
    // fields are skipped, required ones fail.
    let body = json!({ "username": "alice42" });

    let errors = validate_signup(&body).finish().unwrap_err();
    assert_eq!(errors.render(), "email: email is required");
}

#[test]
fn invalid_body_renders_in_chain_order() {
    let body = json!({
        "username": "a!",
        "email": null,
        "age": "thirty",
        "interests": "rust",
        "born": "05/01/1994"
    });

    let errors = validate_signup(&body).finish().unwrap_err();
    insta::assert_snapshot!(errors.render(), @"username: username must be between 3 and 20 characters long, email: email is required, age: age must be numeric, interests: interests must be an array or slice, born: born is not a valid ISO8601 date");
}

#[test]
fn aggregate_serializes_to_json() {
    let body = json!({ "age": 12, "interests": [] });

    let mut session = Session::new();
    session.chain("age", &body["age"]).range(13, 130);
    session.chain("interests", &body["interests"]).min_count(1);

    let errors = session.result().unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&errors.to_json()).unwrap(), @r#"
    {
      "age": {
        "field": "age",
        "message": "age must be between 13 and 130",
        "tag": "range",
        "value": 12,
        "params": {
          "min": 13,
          "max": 130
        }
      },
      "interests": {
        "field": "interests",
        "message": "interests must have at least 1 items",
        "tag": "min_count",
        "value": [],
        "params": {
          "min_count": 1
        }
      }
    }
    "#);
}

// ============================================================================
// CONVERSIONS
// ============================================================================

#[test]
fn json_numbers_coerce_like_native_numbers() {
    assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
    assert_eq!(Value::from(json!(i64::MIN)), Value::Int(i64::MIN));

    let mut session = Session::new();
    session.chain("big", json!(u64::MAX)).min_uint(1);
    session.chain("neg", json!(-5)).max_int(-5);
    session.chain("frac", json!(0.5)).range_float(0.0, 1.0);
    assert!(session.is_valid());
}
