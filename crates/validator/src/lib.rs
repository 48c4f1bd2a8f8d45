//! # fieldcheck
//!
//! Per-field validation sessions for loosely typed input: request bodies,
//! form posts, DTOs.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let mut session = Session::new();
//! session.chain("username", "al").required().min_length(3).max_length(20);
//! session.chain("age", "17").min(18);
//! session.chain("email", "alice@example.com").is_email();
//! session.chain("nickname", None::<String>).is_alphanumeric();
//!
//! let errors = session.finish().unwrap_err();
//! assert_eq!(
//!     errors.render(),
//!     "username: username must be at least 3 characters long, age: age must be at least 18",
//! );
//! ```
//!
//! ## How it fits together
//!
//! - [`Value`](foundation::Value) is the opaque input. Anything from `u8` to
//!   `Option<Vec<String>>` converts into it.
//! - [`coerce`] brings a value into the domain a rule needs (integer,
//!   unsigned, float, text, timestamp, element count).
//! - [`validators`] holds the predicates; each is a small struct that
//!   implements [`Validate`](foundation::Validate).
//! - A [`RuleChain`] coerces, evaluates and stops at the field's first failure.
//! - A [`Session`] keeps exactly one [`FieldError`](foundation::FieldError)
//!   per field and renders them in first-seen order.
//!
//! ## Creating Predicates
//!
//! Use the [`predicate!`] macro for boilerplate-free predicate structs, or
//! pass any `Fn(&str) -> Result<(), FieldError>` closure to
//! [`RuleChain::custom`] / [`Session::add`].

// FieldError is the fundamental error type for all validators; boxing it
// would add indirection to every check.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod coerce;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod prelude;
pub mod session;
pub mod validators;

pub use chain::RuleChain;
pub use foundation::{FieldError, ValidationErrors, Value};
pub use session::{AbsentPolicy, Session, SessionOptions};
