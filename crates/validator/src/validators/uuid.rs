//! UUID predicate.
//!
//! Any version and variant is accepted, in every textual form the `uuid`
//! crate parses: hyphenated, simple (32 hex digits), braced and URN.

use crate::foundation::{FieldError, tag};

crate::predicate! {
    /// Passes when the text is a UUID.
    pub IsUuid { value: String };
    rule(self) { ::uuid::Uuid::try_parse(&self.value).is_ok() }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not a valid UUID"),
            tag::IS_UUID,
            self.value.clone(),
        )
    }
}

/// Creates an [`IsUuid`] predicate.
pub fn uuid(value: impl Into<String>) -> IsUuid {
    IsUuid::new(value.into())
}
