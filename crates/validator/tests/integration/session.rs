//! Session aggregation: one error per field, first-seen rendering order.

use fieldcheck::foundation::{FieldError, ValidationErrors, Value};
use fieldcheck::validators::{email, max_length, min, min_length, required, uuid};
use fieldcheck::{AbsentPolicy, Session, SessionOptions};
use pretty_assertions::assert_eq;

// ============================================================================
// AT MOST ONE ERROR PER FIELD
// ============================================================================

#[test]
fn repeated_failures_keep_the_first() {
    let mut session = Session::new();
    session.chain("name", "").required().min_length(3);
    session.add("name", &[&max_length("", 0), &min_length("", 1)]);
    session.chain("name", "x").is_email();

    let errors = session.result().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name").unwrap().tag(), "required");
}

#[test]
fn fields_fail_independently() {
    let mut session = Session::new();
    session.chain("a", 1).min(2);
    session.chain("b", 1).min(0);
    session.chain("c", "nope").is_uuid();

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["a", "c"]);
    assert!(!errors.contains("b"));
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn render_follows_first_failure_order() {
    let mut session = Session::new();
    session.chain("zeta", "").required();
    session.chain("alpha", 3).range(5, 10);
    session.chain("mid", "abc").is_email();
    session.chain("zeta", 0).min(1);
    session.chain("alpha", "").required();

    let errors = session.result().unwrap();
    insta::assert_snapshot!(
        errors.render(),
        @"zeta: zeta is required, alpha: alpha must be between 5 and 10, mid: mid is not a valid email address"
    );
    assert_eq!(errors.to_string(), errors.render());
}

#[test]
fn entries_expose_the_ordered_mapping() {
    let mut session = Session::new();
    session.add("id", &[&uuid("not-a-uuid")]);
    session.add("contact", &[&email("abc")]);

    let errors = session.result().unwrap();
    let entries = errors.entries().unwrap();
    assert_eq!(entries.keys().collect::<Vec<_>>(), ["id", "contact"]);
    assert_eq!(entries["id"].tag(), "is_uuid");
    assert_eq!(entries["contact"].tag(), "is_email");
}

// ============================================================================
// FINALIZATION
// ============================================================================

fn register(name: &str, age: i64) -> Result<(), ValidationErrors> {
    let mut session = Session::new();
    session.chain("name", name).required().max_length(32);
    session.chain("age", age).range(18, 130);
    session.finish()?;
    Ok(())
}

#[test]
fn finish_propagates_with_question_mark() {
    assert!(register("alice", 30).is_ok());

    let errors = register("", 12).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "age"]);
}

#[test]
fn no_error_is_none_not_empty() {
    let mut session = Session::new();
    session.add("name", &[&required("alice"), &min_length("alice", 2)]);
    assert!(session.result().is_none());
}

// ============================================================================
// FIELD ERROR SURFACE
// ============================================================================

#[test]
fn field_error_carries_params() {
    let mut session = Session::new();
    session.add("n", &[&min(4_i64, 5)]);

    let error = session.error("n").unwrap();
    assert_eq!(error.field(), "n");
    assert_eq!(error.message(), "n must be at least 5");
    assert_eq!(error.value(), &Value::Int(4));
    assert_eq!(error.param("min"), Some(&Value::Int(5)));
    assert!(error.has_params());
    assert_eq!(error.params().len(), 1);
}

#[test]
fn custom_errors_can_override_the_message() {
    let mut session = Session::new();
    session.chain("pin", "12").custom(|field: &str| -> Result<(), FieldError> {
        Err(FieldError::new(field, "bad pin", "pin", "12").with_message("PIN rejected"))
    });

    let error = session.error("pin").unwrap();
    assert_eq!(error.message(), "PIN rejected");
    assert!(!error.has_params());
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn reject_policy_turns_absent_into_required() {
    let options = SessionOptions::default().with_absent(AbsentPolicy::Reject);
    let mut session = Session::with_options(options);
    session.chain("nick", None::<&str>).max_length(10);
    session.chain("bio", Some("hi")).max_length(10);

    let errors = session.finish().unwrap_err();
    assert_eq!(errors.render(), "nick: nick is required");
}
