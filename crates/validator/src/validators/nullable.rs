//! Presence predicate
//!
//! [`Required`] works on the raw value rather than a coerced one: it is the
//! only predicate that needs to see `Absent`.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::required;
//!
//! assert!(required("hello").validate("name").is_ok());
//! assert!(required("").validate("name").is_err());
//! assert!(required(None::<String>).validate("name").is_err());
//! assert!(required(Vec::<i32>::new()).validate("tags").is_ok());
//! ```

use crate::foundation::{FieldError, Value};

crate::predicate! {
    /// Passes when the value is present and, if text, non-empty.
    ///
    /// Every other shape counts as present, including `0`, `false` and
    /// empty containers.
    #[derive(PartialEq)]
    pub Required { value: Value };
    rule(self) {
        match &self.value {
            Value::Absent => false,
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }
    error(self, field) { FieldError::required(field, self.value.clone()) }
}

/// Creates a [`Required`] predicate.
pub fn required(value: impl Into<Value>) -> Required {
    Required::new(value.into())
}
