//! Numeric range predicates
//!
//! All comparisons are boundary-inclusive. The same three predicates serve
//! every numeric domain through the [`Number`] bound.

use std::fmt::Display;

use crate::coerce::Coerce;
use crate::foundation::{FieldError, Value, tag};

/// A numeric domain the range predicates can compare in.
///
/// Implemented for `i64`, `u64` and `f64`, the three numeric domains a
/// [`Value`] coerces into.
pub trait Number: PartialOrd + Display + Copy + Into<Value> + Coerce {}

impl Number for i64 {}
impl Number for u64 {}
impl Number for f64 {}

crate::predicate! {
    /// Passes when `value >= min`.
    #[derive(Copy, PartialEq)]
    pub Min<T: Number> { value: T, min: T };
    rule(self) { self.value >= self.min }
    error(self, field) {
        FieldError::new(field, format!("{field} must be at least {}", self.min), tag::MIN, self.value)
            .with_param("min", self.min)
    }
}

crate::predicate! {
    /// Passes when `value <= max`.
    #[derive(Copy, PartialEq)]
    pub Max<T: Number> { value: T, max: T };
    rule(self) { self.value <= self.max }
    error(self, field) {
        FieldError::new(field, format!("{field} must be at most {}", self.max), tag::MAX, self.value)
            .with_param("max", self.max)
    }
}

crate::predicate! {
    /// Passes when `min <= value <= max`.
    #[derive(Copy, PartialEq)]
    pub Range<T: Number> { value: T, min: T, max: T };
    rule(self) { self.value >= self.min && self.value <= self.max }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} must be between {} and {}", self.min, self.max),
            tag::RANGE,
            self.value,
        )
        .with_param("min", self.min)
        .with_param("max", self.max)
    }
}

/// Creates a [`Min`] predicate.
pub fn min<T: Number>(value: T, min: T) -> Min<T> {
    Min::new(value, min)
}

/// Creates a [`Max`] predicate.
pub fn max<T: Number>(value: T, max: T) -> Max<T> {
    Max::new(value, max)
}

/// Creates a [`Range`] predicate.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::Validate;
/// use fieldcheck::validators::range;
///
/// assert!(range(5_i64, 5, 10).validate("n").is_ok());
/// assert!(range(10_i64, 5, 10).validate("n").is_ok());
///
/// let err = range(11_i64, 5, 10).validate("n").unwrap_err();
/// assert_eq!(err.message(), "n must be between 5 and 10");
/// ```
pub fn range<T: Number>(value: T, min: T, max: T) -> Range<T> {
    Range::new(value, min, max)
}

// ============================================================================
// TESTS
// ============================================================================
