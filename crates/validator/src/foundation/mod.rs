//! Core validation types and traits
//!
//! This module contains the building blocks every other layer uses:
//!
//! - **Values**: [`Value`], the opaque input, and [`Domain`], what a rule
//!   coerces it into
//! - **Traits**: [`Validate`], a pure `field -> Result<(), FieldError>` check
//! - **Errors**: [`FieldError`] and the aggregate [`ValidationErrors`]
//!
//! # Examples
//!
//! Predicates can be evaluated on their own, outside any session:
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::min_length;
//!
//! assert!(min_length("abc", 3).validate("code").is_ok());
//!
//! let err = min_length("ab", 3).validate("code").unwrap_err();
//! assert_eq!(err.tag(), "min_length");
//! assert_eq!(err.message(), "code must be at least 3 characters long");
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{FieldError, ValidationErrors, tag};
pub use traits::{BoxedValidator, Validate};
pub use value::{Domain, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs validators in order and returns the first failure.
///
/// This is the evaluation rule [`Session::add`](crate::Session::add) applies
/// to each call; it is exposed for callers that want a one-off answer
/// without a session.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::first_failure;
/// use fieldcheck::validators::{max_length, min_length};
///
/// let name = "bob";
/// assert!(first_failure("name", &[&min_length(name, 2), &max_length(name, 10)]).is_ok());
/// assert!(first_failure("name", &[&min_length(name, 5), &max_length(name, 1)])
///     .is_err_and(|e| e.tag() == "min_length"));
/// ```
pub fn first_failure(field: &str, validators: &[&dyn Validate]) -> Result<(), FieldError> {
    validators.iter().try_for_each(|v| v.validate(field))
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a single check.
pub type ValidationResult<T> = Result<T, FieldError>;
