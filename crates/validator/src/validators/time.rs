//! Timestamp predicates.
//!
//! Two format checks over raw text (`is_iso8601`, `is_iso8601_date`) and
//! three chronological bounds over already-coerced timestamps. Bounds are
//! inclusive and compare instants, so offsets do not matter:
//! `10:00+02:00` equals `08:00Z`.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::foundation::{FieldError, tag};

// ============================================================================
// FORMAT CHECKS
// ============================================================================

crate::predicate! {
    /// Passes for a full RFC 3339 timestamp with zone (`2014-01-01T00:00:00Z`).
    ///
    /// The separator may also be `t` or a space and the zone `z`, as
    /// RFC 3339 allows: `2014-01-01 00:00:00Z` passes.
    pub Iso8601 { value: String };
    rule(self) { DateTime::parse_from_rfc3339(&self.value).is_ok() }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not a valid ISO8601 date"),
            tag::IS_ISO8601,
            self.value.clone(),
        )
    }
}

/// Creates an [`Iso8601`] predicate.
pub fn iso8601(value: impl Into<String>) -> Iso8601 {
    Iso8601::new(value.into())
}

/// `YYYY-MM-DD` with exactly four, two and two digits.
fn is_calendar_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
        && NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}

crate::predicate! {
    /// Passes for a calendar date in `YYYY-MM-DD` form.
    pub Iso8601Date { value: String };
    rule(self) { is_calendar_date(&self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not a valid ISO8601 date"),
            tag::IS_ISO8601_DATE,
            self.value.clone(),
        )
    }
}

/// Creates an [`Iso8601Date`] predicate.
pub fn iso8601_date(value: impl Into<String>) -> Iso8601Date {
    Iso8601Date::new(value.into())
}

// ============================================================================
// CHRONOLOGICAL BOUNDS
// ============================================================================

crate::predicate! {
    /// Passes when the timestamp is not before `min`.
    #[derive(Copy, PartialEq)]
    pub MinDate { value: DateTime<FixedOffset>, min: DateTime<FixedOffset> };
    rule(self) { self.value >= self.min }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is before {}", self.min.to_rfc3339()),
            tag::MIN_DATE,
            self.value,
        )
        .with_param("min_date", self.min)
    }
}

/// Creates a [`MinDate`] predicate.
pub fn min_date(value: DateTime<FixedOffset>, min: DateTime<FixedOffset>) -> MinDate {
    MinDate::new(value, min)
}

crate::predicate! {
    /// Passes when the timestamp is not after `max`.
    #[derive(Copy, PartialEq)]
    pub MaxDate { value: DateTime<FixedOffset>, max: DateTime<FixedOffset> };
    rule(self) { self.value <= self.max }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is after {}", self.max.to_rfc3339()),
            tag::MAX_DATE,
            self.value,
        )
        .with_param("max_date", self.max)
    }
}

/// Creates a [`MaxDate`] predicate.
pub fn max_date(value: DateTime<FixedOffset>, max: DateTime<FixedOffset>) -> MaxDate {
    MaxDate::new(value, max)
}

crate::predicate! {
    /// Passes when `min <= timestamp <= max`.
    #[derive(Copy, PartialEq)]
    pub BetweenDate {
        value: DateTime<FixedOffset>,
        min: DateTime<FixedOffset>,
        max: DateTime<FixedOffset>,
    };
    rule(self) { self.value >= self.min && self.value <= self.max }
    error(self, field) {
        FieldError::new(
            field,
            format!(
                "{field} is not between {} and {}",
                self.min.to_rfc3339(),
                self.max.to_rfc3339()
            ),
            tag::BETWEEN_DATE,
            self.value,
        )
        .with_param("min_date", self.min)
        .with_param("max_date", self.max)
    }
}

/// Creates a [`BetweenDate`] predicate.
pub fn between_date(
    value: DateTime<FixedOffset>,
    min: DateTime<FixedOffset>,
    max: DateTime<FixedOffset>,
) -> BetweenDate {
    BetweenDate::new(value, min, max)
}

// ============================================================================
// TESTS
// ============================================================================
