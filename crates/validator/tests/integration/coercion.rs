//! Coercion from loosely typed inputs into rule domains.

use chrono::{DateTime, FixedOffset};
use fieldcheck::coerce::{self, CoercionError, TIME_LAYOUTS, parse_timestamp};
use fieldcheck::foundation::{Domain, Value};
use fieldcheck::Session;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// OPTIONAL UNWRAPPING
// ============================================================================

#[test]
fn options_unwrap_before_coercion() {
    assert_eq!(coerce::coerce::<i64>(&Value::from(Some(5_u8))), Ok(5));
    assert_eq!(
        coerce::coerce::<i64>(&Value::from(None::<u8>)),
        Err(CoercionError::Absent)
    );
    assert_eq!(Value::from(Some(Some("x"))), Value::from("x"));
}

#[test]
fn absent_values_never_record_invalid_type() {
    let mut session = Session::new();
    session
        .chain("f", None::<i32>)
        .min(1)
        .min_length(1)
        .min_date(DateTime::<chrono::Utc>::UNIX_EPOCH)
        .max_count(0);
    assert!(session.is_valid());
}

// ============================================================================
// NUMERIC DOMAINS
// ============================================================================

#[rstest]
#[case::i8(Value::from(-8_i8), -8)]
#[case::u32(Value::from(32_u32), 32)]
#[case::usize(Value::from(7_usize), 7)]
#[case::float_truncates(Value::from(9.99_f64), 9)]
#[case::text(Value::from(" 12".trim()), 12)]
#[case::negative_text(Value::from("-12"), -12)]
fn integer_domain(#[case] input: Value, #[case] expected: i64) {
    assert_eq!(coerce::coerce::<i64>(&input), Ok(expected));
}

#[test]
fn parse_failures_name_the_domain() {
    let err = coerce::coerce::<u64>(&Value::from("-1")).unwrap_err();
    assert_eq!(err.expected(), Some(Domain::UnsignedInteger));
    assert!(matches!(err, CoercionError::Parse { .. }));

    let err = coerce::coerce::<f64>(&Value::from(true)).unwrap_err();
    assert_eq!(
        err,
        CoercionError::Mismatch {
            expected: Domain::Float,
            found: "bool"
        }
    );
}

#[test]
fn invalid_type_message_names_both_sides() {
    let mut session = Session::new();
    session.chain("qty", vec![1]).max_uint(3);
    assert_eq!(
        session.error("qty").unwrap().message(),
        "Invalid type: expected unsigned integer got list, field: qty"
    );
}

// ============================================================================
// TIMESTAMPS
// ============================================================================

fn rfc3339(input: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(input).unwrap()
}

#[rstest]
#[case::rfc3339("2024-03-05T10:20:30+02:00", "2024-03-05T10:20:30+02:00")]
#[case::rfc3339_zulu("2024-03-05T10:20:30Z", "2024-03-05T10:20:30Z")]
#[case::date("2024-03-05", "2024-03-05T00:00:00Z")]
#[case::date_time("2024-03-05 10:20:30", "2024-03-05T10:20:30Z")]
#[case::zoneless("2024-03-05T10:20:30", "2024-03-05T10:20:30Z")]
#[case::us_slash("03/05/2024", "2024-03-05T00:00:00Z")]
#[case::us_dash("03-05-2024", "2024-03-05T00:00:00Z")]
#[case::us_slash_time("03/05/2024 10:20:30", "2024-03-05T10:20:30Z")]
#[case::us_dash_time("03-05-2024 10:20:30", "2024-03-05T10:20:30Z")]
fn every_layout_parses(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_timestamp(input), Some(rfc3339(expected)));
}

#[test]
fn layout_list_is_fixed() {
    assert_eq!(TIME_LAYOUTS.len(), 9);
}

#[rstest]
#[case::words("tomorrow")]
#[case::european("05.03.2024")]
#[case::bad_month("2024-13-01")]
#[case::empty("")]
#[case::single_digit_parts("2023-5-6")]
#[case::signed_year("+2023-05-06")]
#[case::short_us_date("5/6/2023")]
fn unknown_layouts_fail(#[case] input: &str) {
    assert_eq!(
        coerce::coerce::<DateTime<FixedOffset>>(&Value::from(input)),
        Err(CoercionError::UnknownTimeLayout {
            input: input.to_owned()
        })
    );
}

#[test]
fn loose_digit_widths_record_invalid_time() {
    let epoch = DateTime::<chrono::Utc>::UNIX_EPOCH;
    let mut session = Session::new();
    session.chain("short", "2023-5-6").min_date(epoch);
    session.chain("padded", "2023-05-06").min_date(epoch);

    let errors = session.result().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["short"]);
    assert_eq!(errors.get("short").unwrap().tag(), "invalid_time");
}

// ============================================================================
// SEQUENCE DOMAIN
// ============================================================================

#[test]
fn count_covers_every_container() {
    assert_eq!(coerce::count(&Value::from(vec!["a"; 4])), Ok(4));
    assert_eq!(coerce::count(&Value::from([1, 2])), Ok(2));
    assert_eq!(coerce::count(&Value::from(&[1_u8][..])), Ok(1));
    assert!(coerce::count(&Value::from("abc")).is_err());
}
