//! String content predicates
//!
//! Allowlist membership and the character-class checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{FieldError, tag};

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern compiles"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").expect("phone pattern compiles"));

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern compiles"));

// ============================================================================
// ONE OF
// ============================================================================

crate::predicate! {
    /// Passes when the text equals one of `allowed` exactly.
    ///
    /// An empty allowlist never passes.
    pub OneOf { value: String, allowed: Vec<String> };
    rule(self) { self.allowed.iter().any(|candidate| *candidate == self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not in the collection"),
            tag::ONE_OF,
            self.value.clone(),
        )
        .with_param("collection", self.allowed.clone())
    }
}

/// Creates a [`OneOf`] predicate.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::Validate;
/// use fieldcheck::validators::one_of;
///
/// assert!(one_of("red", ["red", "green"]).validate("color").is_ok());
/// assert!(one_of("Red", ["red", "green"]).validate("color").is_err());
/// assert!(one_of("x", Vec::<String>::new()).validate("color").is_err());
/// ```
pub fn one_of<I>(value: impl Into<String>, allowed: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    OneOf::new(value.into(), allowed.into_iter().map(Into::into).collect())
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::predicate! {
    /// Passes for non-empty ASCII letters and digits only.
    pub Alphanumeric { value: String };
    rule(self) { ALPHANUMERIC_REGEX.is_match(&self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} must be alphanumeric"),
            tag::IS_ALPHANUMERIC,
            self.value.clone(),
        )
    }
}

/// Creates an [`Alphanumeric`] predicate.
pub fn alphanumeric(value: impl Into<String>) -> Alphanumeric {
    Alphanumeric::new(value.into())
}

crate::predicate! {
    /// Passes for an optional leading `+` followed by one or more digits.
    ///
    /// No separators are accepted: `+14155551234` passes, `415-555-1234`
    /// does not.
    pub Phone { value: String };
    rule(self) { PHONE_REGEX.is_match(&self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not a valid phone number"),
            tag::IS_PHONE,
            self.value.clone(),
        )
    }
}

/// Creates a [`Phone`] predicate.
pub fn phone(value: impl Into<String>) -> Phone {
    Phone::new(value.into())
}

crate::predicate! {
    /// Passes for one or more ASCII digits, no sign.
    pub OnlyDigits { value: String };
    rule(self) { DIGITS_REGEX.is_match(&self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} contains non-digit characters"),
            tag::IS_ONLY_DIGITS,
            self.value.clone(),
        )
    }
}

/// Creates an [`OnlyDigits`] predicate.
pub fn only_digits(value: impl Into<String>) -> OnlyDigits {
    OnlyDigits::new(value.into())
}

// ============================================================================
// TESTS
// ============================================================================
