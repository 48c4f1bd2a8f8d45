//! Validation session: the per-run error aggregator
//!
//! A [`Session`] owns the field → error mapping for one validation unit (one
//! request, one form). It records at most one [`FieldError`] per field: the
//! first failure registered for a field is authoritative, and every later
//! registration for that field is ignored without being evaluated.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Session;
//!
//! let mut session = Session::new();
//! session.chain("name", "").required().min_length(3);
//! session.chain("age", 17).min(18);
//! session.chain("email", "a@b.com").is_email();
//!
//! let errors = session.finish().unwrap_err();
//! assert_eq!(errors.render(), "name: name is required, age: age must be at least 18");
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::chain::RuleChain;
use crate::foundation::{FieldError, Validate, ValidationErrors, Value};

// ============================================================================
// OPTIONS
// ============================================================================

/// What a domain rule does when the value is an absent optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AbsentPolicy {
    /// The rule is skipped and contributes nothing. Pair with
    /// [`RuleChain::required`] to demand presence.
    #[default]
    Skip,
    /// The rule records a `required` error for the field.
    Reject,
}

/// Behavioural knobs for a [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Handling of absent values by every rule except `required` and `custom`.
    pub absent: AbsentPolicy,
}

impl SessionOptions {
    /// Sets the absent-value policy.
    #[must_use]
    pub fn with_absent(mut self, absent: AbsentPolicy) -> Self {
        self.absent = absent;
        self
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Accumulates the first error of each field across a validation run.
///
/// Fields are kept in the order they first failed, so [`result`] renders
/// deterministically.
///
/// [`result`]: Session::result
#[derive(Debug, Clone, Default)]
pub struct Session {
    errors: IndexMap<String, FieldError>,
    options: SessionOptions,
}

impl Session {
    /// Creates an empty session with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given options.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            errors: IndexMap::new(),
            options,
        }
    }

    /// The options this session was created with.
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Opens a rule chain for `field` over `value`.
    ///
    /// The chain borrows the session mutably until it is dropped.
    pub fn chain(&mut self, field: impl Into<String>, value: impl Into<Value>) -> RuleChain<'_> {
        RuleChain::new(self, field.into(), value.into())
    }

    /// Registers validators for `field` directly, bypassing the chain.
    ///
    /// Nothing is evaluated if `field` already failed. Otherwise the
    /// validators run in order and the first failure is recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Session;
    /// use fieldcheck::validators::{max_length, min_length};
    ///
    /// let mut session = Session::new();
    /// session
    ///     .add("code", &[&min_length("ab", 3), &max_length("ab", 1)])
    ///     .add("code", &[&max_length("ab", 1)]);
    ///
    /// let errors = session.result().unwrap();
    /// assert_eq!(errors.get("code").unwrap().tag(), "min_length");
    /// ```
    pub fn add(&mut self, field: &str, validators: &[&dyn Validate]) -> &mut Self {
        if self.has_error(field) {
            trace!(field, "field already failed, validators skipped");
            return self;
        }
        for validator in validators {
            if let Err(error) = validator.validate(field) {
                self.record(field, error);
                break;
            }
        }
        self
    }

    /// Records `error` under `field` unless the field already failed.
    pub(crate) fn record(&mut self, field: &str, error: FieldError) {
        if self.errors.contains_key(field) {
            return;
        }
        debug!(field, tag = error.tag(), "validation error recorded");
        self.errors.insert(field.to_owned(), error);
    }

    /// Returns `true` if `field` already carries an error.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// The error recorded for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Returns `true` while no field has failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Snapshots the current errors, or `None` if no field failed.
    ///
    /// The session stays usable; later failures do not affect a snapshot
    /// already taken.
    pub fn result(&self) -> Option<ValidationErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(ValidationErrors::from_map(self.errors.clone()))
        }
    }

    /// Consumes the session, returning `Err` if any field failed.
    ///
    /// # Errors
    ///
    /// Returns the aggregated [`ValidationErrors`] when at least one field
    /// failed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::from_map(self.errors))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
