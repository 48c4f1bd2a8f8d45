//! String length predicates
//!
//! Length is measured in Unicode scalar values (`chars`), so `"héllo"` has
//! length 5. All bounds are inclusive.

use crate::foundation::{FieldError, tag};

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::predicate! {
    /// Passes when the text has at least `min` characters.
    pub MinLength { value: String, min: usize };
    rule(self) { char_len(&self.value) >= self.min }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} must be at least {} characters long", self.min),
            tag::MIN_LENGTH,
            self.value.clone(),
        )
        .with_param("min", self.min)
    }
}

/// Creates a [`MinLength`] predicate.
pub fn min_length(value: impl Into<String>, min: usize) -> MinLength {
    MinLength::new(value.into(), min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::predicate! {
    /// Passes when the text has at most `max` characters.
    pub MaxLength { value: String, max: usize };
    rule(self) { char_len(&self.value) <= self.max }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} must be at most {} characters long", self.max),
            tag::MAX_LENGTH,
            self.value.clone(),
        )
        .with_param("max", self.max)
    }
}

/// Creates a [`MaxLength`] predicate.
pub fn max_length(value: impl Into<String>, max: usize) -> MaxLength {
    MaxLength::new(value.into(), max)
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::predicate! {
    /// Passes when the character count is within `min..=max`.
    pub Length { value: String, min: usize, max: usize };
    rule(self) {
        let len = char_len(&self.value);
        len >= self.min && len <= self.max
    }
    error(self, field) {
        FieldError::new(
            field,
            format!(
                "{field} must be between {} and {} characters long",
                self.min, self.max
            ),
            tag::LENGTH,
            self.value.clone(),
        )
        .with_param("min", self.min)
        .with_param("max", self.max)
    }
}

/// Creates a [`Length`] predicate.
pub fn length(value: impl Into<String>, min: usize, max: usize) -> Length {
    Length::new(value.into(), min, max)
}

// ============================================================================
// TESTS
// ============================================================================
