//! Value coercion into semantic domains.
//!
//! Each target domain has one coercion, an exhaustive match over the
//! [`Value`] shapes:
//!
//! | target          | accepts                                               |
//! |-----------------|-------------------------------------------------------|
//! | `i64`           | `Int`, `Uint`, `Float` (reinterpreted), base-10 text  |
//! | `u64`           | `Int`, `Uint`, `Float` (reinterpreted), base-10 text  |
//! | `f64`           | `Int`, `Uint`, `Float`, float text                    |
//! | `String`        | `Text`                                                |
//! | timestamp       | `Timestamp`, text in any of [`TIME_LAYOUTS`]          |
//! | [`count`]       | `List`, `Set`, `Map` (element count)                  |
//!
//! `Absent` always fails with [`CoercionError::Absent`]; what that means for
//! the rule is the caller's decision.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::foundation::{Domain, FieldError, Value};

// ============================================================================
// ERRORS
// ============================================================================

/// Why a value could not be brought into the requested domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// The value is an absent optional.
    #[error("value is absent")]
    Absent,

    /// The value's shape cannot represent the domain at all.
    #[error("expected {expected}, got {found}")]
    Mismatch {
        /// Requested domain.
        expected: Domain,
        /// Dynamic shape of the input, see [`Value::kind`].
        found: &'static str,
    },

    /// Text that is not a base-10 number of the requested domain.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// Requested domain.
        expected: Domain,
        /// The rejected text.
        input: String,
    },

    /// Text that matches none of [`TIME_LAYOUTS`].
    #[error("{input:?} matches no supported time layout")]
    UnknownTimeLayout {
        /// The rejected text.
        input: String,
    },
}

impl CoercionError {
    /// Returns `true` for [`CoercionError::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, CoercionError::Absent)
    }

    /// The domain the failed coercion was aiming for, if known.
    pub fn expected(&self) -> Option<Domain> {
        match self {
            CoercionError::Absent => None,
            CoercionError::Mismatch { expected, .. } | CoercionError::Parse { expected, .. } => {
                Some(*expected)
            }
            CoercionError::UnknownTimeLayout { .. } => Some(Domain::Timestamp),
        }
    }

    /// The error a rule chain records for this failure.
    ///
    /// Unparseable time text becomes `invalid_time`; every other mismatch
    /// becomes `invalid_type`. `Absent` has no error of its own and yields
    /// `None`.
    pub fn to_field_error(&self, field: &str, value: &Value) -> Option<FieldError> {
        match self {
            CoercionError::Absent => None,
            CoercionError::UnknownTimeLayout { .. } => Some(FieldError::invalid_time(field, value)),
            CoercionError::Mismatch { expected, .. } | CoercionError::Parse { expected, .. } => {
                Some(FieldError::invalid_type(field, expected, value))
            }
        }
    }
}

// ============================================================================
// COERCE TRAIT
// ============================================================================

/// A Rust type that a [`Value`] can be coerced into.
pub trait Coerce: Sized {
    /// The semantic domain this type represents.
    const DOMAIN: Domain;

    /// Attempts the coercion.
    fn coerce(value: &Value) -> Result<Self, CoercionError>;
}

fn mismatch(expected: Domain, value: &Value) -> CoercionError {
    CoercionError::Mismatch {
        expected,
        found: value.kind(),
    }
}

fn parse_error(expected: Domain, input: &str) -> CoercionError {
    CoercionError::Parse {
        expected,
        input: input.to_owned(),
    }
}

impl Coerce for i64 {
    const DOMAIN: Domain = Domain::Integer;

    fn coerce(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Absent => Err(CoercionError::Absent),
            Value::Int(n) => Ok(*n),
            Value::Uint(n) => Ok(*n as i64),
            Value::Float(n) => Ok(*n as i64),
            Value::Text(s) => s.parse().map_err(|_| parse_error(Self::DOMAIN, s)),
            Value::Bool(_)
            | Value::Timestamp(_)
            | Value::List(_)
            | Value::Set(_)
            | Value::Map(_) => Err(mismatch(Self::DOMAIN, value)),
        }
    }
}

impl Coerce for u64 {
    const DOMAIN: Domain = Domain::UnsignedInteger;

    fn coerce(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Absent => Err(CoercionError::Absent),
            Value::Int(n) => Ok(*n as u64),
            Value::Uint(n) => Ok(*n),
            Value::Float(n) => Ok(*n as u64),
            Value::Text(s) => s.parse().map_err(|_| parse_error(Self::DOMAIN, s)),
            Value::Bool(_)
            | Value::Timestamp(_)
            | Value::List(_)
            | Value::Set(_)
            | Value::Map(_) => Err(mismatch(Self::DOMAIN, value)),
        }
    }
}

impl Coerce for f64 {
    const DOMAIN: Domain = Domain::Float;

    fn coerce(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Absent => Err(CoercionError::Absent),
            Value::Int(n) => Ok(*n as f64),
            Value::Uint(n) => Ok(*n as f64),
            Value::Float(n) => Ok(*n),
            Value::Text(s) => s.parse().map_err(|_| parse_error(Self::DOMAIN, s)),
            Value::Bool(_)
            | Value::Timestamp(_)
            | Value::List(_)
            | Value::Set(_)
            | Value::Map(_) => Err(mismatch(Self::DOMAIN, value)),
        }
    }
}

impl Coerce for String {
    const DOMAIN: Domain = Domain::Text;

    fn coerce(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Absent => Err(CoercionError::Absent),
            Value::Text(s) => Ok(s.clone()),
            Value::Bool(_)
            | Value::Int(_)
            | Value::Uint(_)
            | Value::Float(_)
            | Value::Timestamp(_)
            | Value::List(_)
            | Value::Set(_)
            | Value::Map(_) => Err(mismatch(Self::DOMAIN, value)),
        }
    }
}

impl Coerce for DateTime<FixedOffset> {
    const DOMAIN: Domain = Domain::Timestamp;

    fn coerce(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Absent => Err(CoercionError::Absent),
            Value::Timestamp(t) => Ok(*t),
            Value::Text(s) => parse_timestamp(s).ok_or_else(|| CoercionError::UnknownTimeLayout {
                input: s.clone(),
            }),
            Value::Bool(_)
            | Value::Int(_)
            | Value::Uint(_)
            | Value::Float(_)
            | Value::List(_)
            | Value::Set(_)
            | Value::Map(_) => Err(mismatch(Self::DOMAIN, value)),
        }
    }
}

/// Coerces `value` into `T`.
///
/// # Examples
///
/// ```
/// use fieldcheck::coerce::{CoercionError, coerce};
/// use fieldcheck::foundation::Value;
///
/// assert_eq!(coerce::<i64>(&Value::from("42")), Ok(42));
/// assert_eq!(coerce::<f64>(&Value::from(3_u8)), Ok(3.0));
/// assert_eq!(coerce::<u64>(&Value::from(None::<u64>)), Err(CoercionError::Absent));
/// assert!(coerce::<String>(&Value::from(7)).is_err());
/// ```
pub fn coerce<T: Coerce>(value: &Value) -> Result<T, CoercionError> {
    T::coerce(value)
}

/// Element count of a container value (the sequence domain).
pub fn count(value: &Value) -> Result<usize, CoercionError> {
    match value {
        Value::Absent => Err(CoercionError::Absent),
        Value::List(items) | Value::Set(items) => Ok(items.len()),
        Value::Map(entries) => Ok(entries.len()),
        Value::Bool(_)
        | Value::Int(_)
        | Value::Uint(_)
        | Value::Float(_)
        | Value::Text(_)
        | Value::Timestamp(_) => Err(mismatch(Domain::Sequence, value)),
    }
}

// ============================================================================
// TIME LAYOUTS
// ============================================================================

/// One accepted textual timestamp layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// RFC 3339 with `Z` or a numeric offset, optional fractional seconds.
    ///
    /// As RFC 3339 permits, the date and time may be split by `T`, `t` or a
    /// space, and `Z` may be lowercase.
    Rfc3339,
    /// A calendar date (chrono format string), taken as UTC midnight.
    Date(&'static str),
    /// A zoneless date-time (chrono format string), taken as UTC.
    DateTime(&'static str),
}

impl TimeLayout {
    /// Parses `input` with this layout only.
    pub fn parse(self, input: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeLayout::Rfc3339 => DateTime::parse_from_rfc3339(input).ok(),
            TimeLayout::Date(fmt) => fixed_width(input, fmt)
                .then(|| NaiveDate::parse_from_str(input, fmt).ok())
                .flatten()
                .map(|d| d.and_time(NaiveTime::default()).and_utc().fixed_offset()),
            TimeLayout::DateTime(fmt) => fixed_width(input, fmt)
                .then(|| NaiveDateTime::parse_from_str(input, fmt).ok())
                .flatten()
                .map(|dt| dt.and_utc().fixed_offset()),
        }
    }
}

/// Checks that `input` has the exact shape of `fmt`: `%Y` is four digits,
/// `%m %d %H %M %S` are two, anything else is a literal byte.
///
/// chrono alone accepts `2023-5-6` and `+2023-05-06` for `%Y-%m-%d`.
fn fixed_width(input: &str, fmt: &str) -> bool {
    let mut input = input.bytes();
    let mut fmt = fmt.bytes();
    while let Some(expected) = fmt.next() {
        if expected != b'%' {
            if input.next() != Some(expected) {
                return false;
            }
            continue;
        }
        let digits = match fmt.next() {
            Some(b'Y') => 4,
            Some(b'm' | b'd' | b'H' | b'M' | b'S') => 2,
            _ => return false,
        };
        for _ in 0..digits {
            if !input.next().is_some_and(|b| b.is_ascii_digit()) {
                return false;
            }
        }
    }
    input.next().is_none()
}

/// Accepted layouts, tried in order; the first that parses wins.
pub const TIME_LAYOUTS: &[TimeLayout] = &[
    TimeLayout::Rfc3339,
    TimeLayout::Date("%Y-%m-%d"),
    TimeLayout::DateTime("%Y-%m-%d %H:%M:%S"),
    TimeLayout::DateTime("%Y-%m-%dT%H:%M:%SZ"),
    TimeLayout::DateTime("%Y-%m-%dT%H:%M:%S"),
    TimeLayout::Date("%m/%d/%Y"),
    TimeLayout::Date("%m-%d-%Y"),
    TimeLayout::DateTime("%m/%d/%Y %H:%M:%S"),
    TimeLayout::DateTime("%m-%d-%Y %H:%M:%S"),
];

/// Parses text against [`TIME_LAYOUTS`] in order.
///
/// # Examples
///
/// ```
/// use fieldcheck::coerce::parse_timestamp;
///
/// let t = parse_timestamp("12/31/2023").unwrap();
/// assert_eq!(t.to_rfc3339(), "2023-12-31T00:00:00+00:00");
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    TIME_LAYOUTS.iter().find_map(|layout| layout.parse(input))
}

// ============================================================================
// TESTS
// ============================================================================
