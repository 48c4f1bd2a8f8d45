//! The trait every predicate implements.

use super::FieldError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure check over an already-coerced value, parameterized by field name.
///
/// Implementors close over the value and the predicate's parameters; the
/// field name is only supplied at evaluation time so the same validator can
/// be registered under any field. Evaluation must have no side effects.
///
/// Any `Fn(&str) -> Result<(), FieldError>` closure is a validator:
///
/// ```
/// use fieldcheck::foundation::{FieldError, Validate};
///
/// let even = |field: &str| {
///     if 3 % 2 == 0 {
///         Ok(())
///     } else {
///         Err(FieldError::new(field, format!("{field} must be even"), "even", 3))
///     }
/// };
///
/// assert_eq!(even.validate("count").unwrap_err().tag(), "even");
/// ```
pub trait Validate {
    /// Evaluates the check for `field`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the check passes
    /// * `Err(FieldError)` describing the failure otherwise
    fn validate(&self, field: &str) -> Result<(), FieldError>;
}

impl<F> Validate for F
where
    F: Fn(&str) -> Result<(), FieldError>,
{
    #[inline]
    fn validate(&self, field: &str) -> Result<(), FieldError> {
        self(field)
    }
}

/// A type-erased validator, as stored by callers that build rule lists at runtime.
pub type BoxedValidator = Box<dyn Validate>;

// ============================================================================
// TESTS
// ============================================================================
