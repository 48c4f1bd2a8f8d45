//! Rule chains: short-circuiting and per-rule semantics through a session.

use std::cell::Cell;
use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use fieldcheck::foundation::{FieldError, Value};
use fieldcheck::Session;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn single_tag(build: impl FnOnce(&mut Session)) -> Option<String> {
    let mut session = Session::new();
    build(&mut session);
    session
        .result()
        .and_then(|errors| errors.iter().next().map(|e| e.tag().to_owned()))
}

fn utc(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().fixed_offset()
}

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

#[test]
fn only_the_first_failing_rule_is_recorded() {
    let ran = Cell::new(false);
    let mut session = Session::new();
    session
        .chain("f", 6)
        .min(10)
        .max(3)
        .custom(|_: &str| -> Result<(), FieldError> {
            ran.set(true);
            Ok(())
        });

    let errors = session.result().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("f").unwrap().tag(), "min");
    assert!(!ran.get());
}

#[test]
fn coercion_failure_stops_the_chain() {
    let mut session = Session::new();
    session.chain("n", "abc").min(1).min_length(10).is_email();

    let error = session.error("n").unwrap();
    assert_eq!(error.tag(), "invalid_type");
    assert_eq!(error.param("expected"), Some(&Value::from("integer")));
}

#[test]
fn custom_runs_while_the_field_is_clean() {
    let ran = Cell::new(0);
    let mut session = Session::new();
    session
        .chain("f", 1)
        .custom(|_: &str| -> Result<(), FieldError> {
            ran.set(ran.get() + 1);
            Ok(())
        })
        .min(0);
    assert_eq!(ran.get(), 1);
    assert!(session.is_valid());
}

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case::empty_text(Value::from(""), false)]
#[case::text(Value::from("x"), true)]
#[case::whitespace(Value::from(" "), true)]
#[case::absent(Value::from(None::<String>), false)]
#[case::list(Value::from(vec![1, 2]), true)]
#[case::map(Value::from(BTreeMap::from([("k", 1)])), true)]
#[case::zero(Value::from(0), true)]
fn required(#[case] value: Value, #[case] passes: bool) {
    let tag = single_tag(|s| {
        s.chain("f", value).required();
    });
    assert_eq!(tag.is_none(), passes);
}

// ============================================================================
// NUMBERS
// ============================================================================

#[rstest]
#[case::min_boundary(5, 5, true)]
#[case::min_below(4, 5, false)]
fn min_is_inclusive(#[case] value: i64, #[case] min: i64, #[case] passes: bool) {
    let tag = single_tag(|s| {
        s.chain("f", value).min(min);
    });
    assert_eq!(tag.is_none(), passes);
}

#[rstest]
#[case::low_boundary(5, true)]
#[case::high_boundary(10, true)]
#[case::above(11, false)]
#[case::below(4, false)]
fn range_is_inclusive(#[case] value: i64, #[case] passes: bool) {
    let tag = single_tag(|s| {
        s.chain("f", value).range(5, 10);
    });
    assert_eq!(tag.as_deref(), if passes { None } else { Some("range") });
}

#[test]
fn explicit_numeric_domains() {
    let mut session = Session::new();
    session.chain("u", 3_u16).min_uint(1).max_uint(3).range_uint(0, 10);
    session.chain("i", -3_i8).min_int(-3).max_int(0).range_int(-5, 5);
    session.chain("x", 2.5_f64).min_float(2.5).max_float(2.5).range_float(0.0, 3.0);
    session.chain("y", "1e3").max_float(999.0);
    assert_eq!(session.result().unwrap().render(), "y: y must be at most 999");
}

#[test]
fn numeric_checks_the_raw_shape() {
    let mut session = Session::new();
    session.chain("a", 1_u32).numeric();
    session.chain("b", 1.5_f32).numeric();
    session.chain("c", "1").numeric();
    session.chain("d", true).numeric();

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["c", "d"]);
    assert_eq!(errors.get("c").unwrap().message(), "c must be numeric");
}

// ============================================================================
// TEXT
// ============================================================================

#[rstest]
#[case::min_length_short("ab", "min_length")]
#[case::max_length_long("abcdefghijk", "max_length")]
fn length_bounds(#[case] input: &str, #[case] expected: &str) {
    let tag = single_tag(|s| {
        s.chain("f", input).min_length(3).max_length(10);
    });
    assert_eq!(tag.as_deref(), Some(expected));
}

#[test]
fn length_counts_code_points() {
    let mut session = Session::new();
    session.chain("a", "héllo").length(5, 5);
    session.chain("b", "日本").min_length(2).max_length(2);
    assert!(session.is_valid());
}

#[test]
fn one_of_is_exact() {
    let mut session = Session::new();
    session.chain("a", "red").one_of(["red", "green"]);
    session.chain("b", "Red").one_of(["red", "green"]);
    session.chain("c", "red").one_of(Vec::<&str>::new());

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["b", "c"]);
    assert_eq!(
        errors.get("b").unwrap().param("collection"),
        Some(&Value::from(vec!["red", "green"]))
    );
}

#[rstest]
#[case::email_ok("a@b.com", None)]
#[case::email_bad("abc", Some("is_email"))]
fn is_email(#[case] input: &str, #[case] expected: Option<&str>) {
    let tag = single_tag(|s| {
        s.chain("f", input).is_email();
    });
    assert_eq!(tag.as_deref(), expected);
}

#[rstest]
#[case::uuid_ok("6ba7b810-9dad-11d1-80b4-00c04fd430c8", None)]
#[case::uuid_bad("not-a-uuid", Some("is_uuid"))]
fn is_uuid(#[case] input: &str, #[case] expected: Option<&str>) {
    let tag = single_tag(|s| {
        s.chain("f", input).is_uuid();
    });
    assert_eq!(tag.as_deref(), expected);
}

#[test]
fn character_class_rules() {
    let mut session = Session::new();
    session.chain("alnum", "abc123").is_alphanumeric();
    session.chain("alnum_space", "abc 123").is_alphanumeric();
    session.chain("phone", "+15551234").is_phone();
    session.chain("phone_dash", "555-1234").is_phone();
    session.chain("digits", "0042").is_only_digits();
    session.chain("signed", "-42").is_only_digits();
    session.chain("date", "2024-02-29").is_iso8601_date();
    session.chain("stamp", "2024-02-29").is_iso8601();

    let errors = session.result().unwrap();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        ["alnum_space", "phone_dash", "signed", "stamp"]
    );
    assert_eq!(errors.get("signed").unwrap().tag(), "is_only_digits");
    assert_eq!(errors.get("stamp").unwrap().tag(), "is_iso8601");
}

// ============================================================================
// TIME
// ============================================================================

#[test]
fn date_bounds_are_inclusive() {
    let lo = utc(2024, 1, 1);
    let hi = utc(2024, 12, 31);

    let mut session = Session::new();
    session.chain("lo", lo).min_date(lo).between_date(lo, hi);
    session.chain("hi", hi).max_date(hi).between_date(lo, hi);
    session.chain("before", utc(2023, 12, 31)).min_date(lo);
    session.chain("after", "2025-01-01").between_date(lo, hi);

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["before", "after"]);
    assert_eq!(errors.get("before").unwrap().tag(), "min_date");
    assert_eq!(errors.get("after").unwrap().tag(), "between_date");
}

#[test]
fn utc_bounds_are_accepted() {
    let bound = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut session = Session::new();
    session.chain("t", "2023-06-01 08:00:00").max_date(bound);
    assert!(session.is_valid());
}

#[test]
fn date_rules_reject_non_time_shapes() {
    let mut session = Session::new();
    session.chain("n", 20240101).min_date(utc(2024, 1, 1));
    session.chain("s", "31.12.2024").min_date(utc(2024, 1, 1));

    assert_eq!(session.error("n").unwrap().tag(), "invalid_type");
    assert_eq!(session.error("s").unwrap().tag(), "invalid_time");
}

// ============================================================================
// COLLECTIONS
// ============================================================================

#[test]
fn count_bounds_are_inclusive() {
    let set: HashSet<&str> = ["a", "b"].into_iter().collect();

    let mut session = Session::new();
    session.chain("list", vec![1, 2, 3]).min_count(3).max_count(3);
    session.chain("set", set).min_count(3);
    session.chain("map", BTreeMap::from([("k", "v")])).max_count(0);

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["set", "map"]);
    assert_eq!(errors.get("set").unwrap().message(), "set must have at least 3 items");
    assert_eq!(errors.get("map").unwrap().message(), "map must have at most 0 items");
}

#[test]
fn count_on_scalar_is_a_failure() {
    let mut session = Session::new();
    session.chain("tags", 5).min_count(0);

    let error = session.error("tags").unwrap();
    assert_eq!(error.tag(), "min_count");
    assert_eq!(error.message(), "tags must be an array or slice");
}
