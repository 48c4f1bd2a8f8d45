//! Container size predicates
//!
//! These take the raw value and count it themselves, because a value that is
//! not a container at all is a failure of the predicate, not a skipped rule.
//! Lists, sets and maps are counted; anything else fails with the
//! predicate's own tag.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::{max_count, min_count};
//!
//! let tags = vec!["rust", "wasm"];
//! assert!(min_count(tags.clone(), 1).validate("tags").is_ok());
//! assert!(max_count(tags, 1).validate("tags").is_err());
//!
//! let err = min_count("rust", 1).validate("tags").unwrap_err();
//! assert_eq!(err.message(), "tags must be an array or slice");
//! ```

use crate::coerce;
use crate::foundation::{FieldError, Value, tag};

fn not_a_container(field: &str, tag: &'static str, value: &Value) -> FieldError {
    FieldError::new(
        field,
        format!("{field} must be an array or slice"),
        tag,
        value.clone(),
    )
}

// ============================================================================
// MIN COUNT
// ============================================================================

crate::predicate! {
    /// Passes when the container holds at least `min` elements.
    #[derive(PartialEq)]
    pub MinCount { value: Value, min: usize };
    rule(self) { coerce::count(&self.value).is_ok_and(|n| n >= self.min) }
    error(self, field) {
        let error = match coerce::count(&self.value) {
            Ok(_) => FieldError::new(
                field,
                format!("{field} must have at least {} items", self.min),
                tag::MIN_COUNT,
                self.value.clone(),
            ),
            Err(_) => not_a_container(field, tag::MIN_COUNT, &self.value),
        };
        error.with_param("min_count", self.min)
    }
}

/// Creates a [`MinCount`] predicate.
pub fn min_count(value: impl Into<Value>, min: usize) -> MinCount {
    MinCount::new(value.into(), min)
}

// ============================================================================
// MAX COUNT
// ============================================================================

crate::predicate! {
    /// Passes when the container holds at most `max` elements.
    #[derive(PartialEq)]
    pub MaxCount { value: Value, max: usize };
    rule(self) { coerce::count(&self.value).is_ok_and(|n| n <= self.max) }
    error(self, field) {
        let error = match coerce::count(&self.value) {
            Ok(_) => FieldError::new(
                field,
                format!("{field} must have at most {} items", self.max),
                tag::MAX_COUNT,
                self.value.clone(),
            ),
            Err(_) => not_a_container(field, tag::MAX_COUNT, &self.value),
        };
        error.with_param("max_count", self.max)
    }
}

/// Creates a [`MaxCount`] predicate.
pub fn max_count(value: impl Into<Value>, max: usize) -> MaxCount {
    MaxCount::new(value.into(), max)
}

// ============================================================================
// TESTS
// ============================================================================
