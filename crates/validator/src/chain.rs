//! Fluent per-field rule chains
//!
//! A [`RuleChain`] is a cursor over one field of a [`Session`]. Every method
//! follows the same steps:
//!
//! 1. If the field already failed in the session, do nothing.
//! 2. Coerce the raw value into the rule's domain (see [`crate::coerce`]).
//!    An absent value is handled by the session's [`AbsentPolicy`]; any
//!    other coercion failure records `invalid_type` or `invalid_time`.
//! 3. Otherwise evaluate the predicate and record its failure, if any.
//!
//! So the first failing rule of a field is authoritative and nothing after
//! it is evaluated, in this chain or in any later chain for the same field.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Session;
//!
//! let mut session = Session::new();
//! session.chain("age", 6).min(10).max(3);
//! session.chain("since", "01/15/2024").min_date(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
//!
//! let errors = session.result().unwrap();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.get("age").unwrap().tag(), "min");
//! ```

use chrono::{DateTime, FixedOffset};
use tracing::trace;

use crate::coerce::{self, Coerce, CoercionError};
use crate::foundation::{FieldError, Validate, Value, tag};
use crate::session::{AbsentPolicy, Session};
use crate::validators::{self, Number};

/// A chain of rules applied to one field's value.
///
/// Obtained from [`Session::chain`]. Each method consumes and returns the
/// chain, so calls read left to right in evaluation order.
#[derive(Debug)]
pub struct RuleChain<'s> {
    session: &'s mut Session,
    field: String,
    value: Value,
}

impl<'s> RuleChain<'s> {
    pub(crate) fn new(session: &'s mut Session, field: String, value: Value) -> Self {
        Self {
            session,
            field,
            value,
        }
    }

    /// The field this chain validates.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The raw, uncoerced value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns `true` once the field carries an error.
    pub fn has_error(&self) -> bool {
        self.session.has_error(&self.field)
    }

    // ------------------------------------------------------------------------
    // Evaluation plumbing
    // ------------------------------------------------------------------------

    fn skipped(&self, rule: &'static str) -> bool {
        if self.has_error() {
            trace!(field = %self.field, rule, "field already failed, rule skipped");
            true
        } else {
            false
        }
    }

    fn add(&mut self, validator: &dyn Validate) {
        self.session.add(&self.field, &[validator]);
    }

    fn absent(&mut self, rule: &'static str) {
        match self.session.options().absent {
            AbsentPolicy::Skip => {
                trace!(field = %self.field, rule, "absent value, rule skipped");
            }
            AbsentPolicy::Reject => {
                let error = FieldError::required(&self.field, Value::Absent);
                self.session.record(&self.field, error);
            }
        }
    }

    fn coercion_failed(&mut self, rule: &'static str, error: &CoercionError) {
        match error.to_field_error(&self.field, &self.value) {
            Some(field_error) => self.session.record(&self.field, field_error),
            None => self.absent(rule),
        }
    }

    /// Coerces into `T`, then builds and evaluates the predicate.
    fn coerced<T, V>(mut self, rule: &'static str, build: impl FnOnce(T) -> V) -> Self
    where
        T: Coerce,
        V: Validate,
    {
        if self.skipped(rule) {
            return self;
        }
        match coerce::coerce::<T>(&self.value) {
            Ok(value) => self.add(&build(value)),
            Err(error) => self.coercion_failed(rule, &error),
        }
        self
    }

    /// Evaluates a predicate over the raw value; only `Absent` is intercepted.
    fn present<V>(mut self, rule: &'static str, build: impl FnOnce(Value) -> V) -> Self
    where
        V: Validate,
    {
        if self.skipped(rule) {
            return self;
        }
        if self.value.is_absent() {
            self.absent(rule);
        } else {
            let validator = build(self.value.clone());
            self.add(&validator);
        }
        self
    }

    fn compare_min<T: Number>(self, min: T) -> Self {
        self.coerced(tag::MIN, |value: T| validators::min(value, min))
    }

    fn compare_max<T: Number>(self, max: T) -> Self {
        self.coerced(tag::MAX, |value: T| validators::max(value, max))
    }

    fn compare_range<T: Number>(self, min: T, max: T) -> Self {
        self.coerced(tag::RANGE, |value: T| validators::range(value, min, max))
    }

    // ------------------------------------------------------------------------
    // Presence
    // ------------------------------------------------------------------------

    /// The value is present and, if text, non-empty.
    ///
    /// Works on the raw value; this is the only rule that fails on `Absent`
    /// regardless of the session's [`AbsentPolicy`].
    pub fn required(mut self) -> Self {
        if self.skipped(tag::REQUIRED) {
            return self;
        }
        let validator = validators::required(self.value.clone());
        self.add(&validator);
        self
    }

    // ------------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------------

    /// Alias of [`min_int`](Self::min_int).
    pub fn min(self, min: i64) -> Self {
        self.min_int(min)
    }

    /// Alias of [`max_int`](Self::max_int).
    pub fn max(self, max: i64) -> Self {
        self.max_int(max)
    }

    /// Alias of [`range_int`](Self::range_int).
    pub fn range(self, min: i64, max: i64) -> Self {
        self.range_int(min, max)
    }

    /// Signed integer `>= min`.
    pub fn min_int(self, min: i64) -> Self {
        self.compare_min(min)
    }

    /// Signed integer `<= max`.
    pub fn max_int(self, max: i64) -> Self {
        self.compare_max(max)
    }

    /// Signed integer within `min..=max`.
    pub fn range_int(self, min: i64, max: i64) -> Self {
        self.compare_range(min, max)
    }

    /// Unsigned integer `>= min`.
    pub fn min_uint(self, min: u64) -> Self {
        self.compare_min(min)
    }

    /// Unsigned integer `<= max`.
    pub fn max_uint(self, max: u64) -> Self {
        self.compare_max(max)
    }

    /// Unsigned integer within `min..=max`.
    pub fn range_uint(self, min: u64, max: u64) -> Self {
        self.compare_range(min, max)
    }

    /// Float `>= min`.
    pub fn min_float(self, min: f64) -> Self {
        self.compare_min(min)
    }

    /// Float `<= max`.
    pub fn max_float(self, max: f64) -> Self {
        self.compare_max(max)
    }

    /// Float within `min..=max`.
    pub fn range_float(self, min: f64, max: f64) -> Self {
        self.compare_range(min, max)
    }

    /// The raw value is an integer, unsigned integer or float.
    pub fn numeric(self) -> Self {
        self.present(tag::NUMERIC, |value: Value| validators::numeric(value))
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// At least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.coerced(tag::MIN_LENGTH, |value: String| validators::min_length(value, min))
    }

    /// At most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.coerced(tag::MAX_LENGTH, |value: String| validators::max_length(value, max))
    }

    /// Between `min` and `max` characters.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.coerced(tag::LENGTH, |value: String| validators::length(value, min, max))
    }

    /// Exactly equal to one of `allowed`. An empty list always fails.
    pub fn one_of<I>(self, allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.coerced(tag::ONE_OF, |value: String| validators::one_of(value, allowed))
    }

    /// A mailbox address.
    pub fn is_email(self) -> Self {
        self.coerced(tag::IS_EMAIL, |value: String| validators::email(value))
    }

    /// ASCII letters and digits only.
    pub fn is_alphanumeric(self) -> Self {
        self.coerced(tag::IS_ALPHANUMERIC, |value: String| validators::alphanumeric(value))
    }

    /// A full RFC 3339 timestamp.
    pub fn is_iso8601(self) -> Self {
        self.coerced(tag::IS_ISO8601, |value: String| validators::iso8601(value))
    }

    /// A `YYYY-MM-DD` calendar date.
    pub fn is_iso8601_date(self) -> Self {
        self.coerced(tag::IS_ISO8601_DATE, |value: String| validators::iso8601_date(value))
    }

    /// Digits with an optional leading `+`.
    pub fn is_phone(self) -> Self {
        self.coerced(tag::IS_PHONE, |value: String| validators::phone(value))
    }

    /// A UUID of any version.
    pub fn is_uuid(self) -> Self {
        self.coerced(tag::IS_UUID, |value: String| validators::uuid(value))
    }

    /// ASCII digits only, no sign.
    pub fn is_only_digits(self) -> Self {
        self.coerced(tag::IS_ONLY_DIGITS, |value: String| validators::only_digits(value))
    }

    // ------------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------------

    /// Not before `min`.
    pub fn min_date(self, min: impl Into<DateTime<FixedOffset>>) -> Self {
        let min = min.into();
        self.coerced(tag::MIN_DATE, |value: DateTime<FixedOffset>| validators::min_date(value, min))
    }

    /// Not after `max`.
    pub fn max_date(self, max: impl Into<DateTime<FixedOffset>>) -> Self {
        let max = max.into();
        self.coerced(tag::MAX_DATE, |value: DateTime<FixedOffset>| validators::max_date(value, max))
    }

    /// Within `min..=max`.
    pub fn between_date(
        self,
        min: impl Into<DateTime<FixedOffset>>,
        max: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        let (min, max) = (min.into(), max.into());
        self.coerced(tag::BETWEEN_DATE, |value: DateTime<FixedOffset>| {
            validators::between_date(value, min, max)
        })
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    /// A list, set or map with at least `min` elements.
    pub fn min_count(self, min: usize) -> Self {
        self.present(tag::MIN_COUNT, |value: Value| validators::min_count(value, min))
    }

    /// A list, set or map with at most `max` elements.
    pub fn max_count(self, max: usize) -> Self {
        self.present(tag::MAX_COUNT, |value: Value| validators::max_count(value, max))
    }

    // ------------------------------------------------------------------------
    // Escape hatch
    // ------------------------------------------------------------------------

    /// Registers an arbitrary validator, evaluated only if the field has not
    /// failed yet.
    pub fn custom(mut self, validator: impl Validate) -> Self {
        if self.skipped("custom") {
            return self;
        }
        self.add(&validator);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
