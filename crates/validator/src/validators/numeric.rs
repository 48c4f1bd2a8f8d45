//! Numeric shape predicate.

use crate::foundation::{FieldError, Value, tag};

crate::predicate! {
    /// Passes when the value's dynamic shape is a signed integer, unsigned
    /// integer or float. Numeric-looking text does not count.
    #[derive(PartialEq)]
    pub Numeric { value: Value };
    rule(self) { self.value.is_numeric() }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} must be numeric"),
            tag::NUMERIC,
            self.value.clone(),
        )
    }
}

/// Creates a [`Numeric`] predicate.
pub fn numeric(value: impl Into<Value>) -> Numeric {
    Numeric::new(value.into())
}
