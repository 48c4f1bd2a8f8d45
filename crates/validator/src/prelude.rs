//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in
//! the session types, the core traits and every built-in predicate factory.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let mut session = Session::new();
//! session.add("zip", &[&only_digits("12a45"), &length("12a45", 5, 5)]);
//! assert_eq!(session.error("zip").map(FieldError::tag), Some(tag::IS_ONLY_DIGITS));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, Domain, FieldError, Validate, ValidationErrors, Value, tag,
};

// ============================================================================
// ENGINE: Sessions, chains, coercion
// ============================================================================

pub use crate::chain::RuleChain;
pub use crate::coerce::{Coerce, CoercionError};
pub use crate::session::{AbsentPolicy, Session, SessionOptions};

// ============================================================================
// VALIDATORS: All built-in predicates
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
