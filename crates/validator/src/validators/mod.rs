//! Built-in predicates
//!
//! Every predicate owns an already-coerced value plus its parameters and
//! implements [`Validate`](crate::foundation::Validate). Each one has a
//! lowercase factory function, so predicates can be evaluated standalone or
//! handed to [`Session::add`](crate::Session::add).
//!
//! # Categories
//!
//! - **Presence**: `required`
//! - **Numeric**: `min`, `max`, `range` (over `i64`, `u64`, `f64`), `numeric`
//! - **Text**: `min_length`, `max_length`, `length`, `one_of`, `email`,
//!   `alphanumeric`, `phone`, `uuid`, `only_digits`
//! - **Time**: `iso8601`, `iso8601_date`, `min_date`, `max_date`, `between_date`
//! - **Collection**: `min_count`, `max_count`
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Session;
//! use fieldcheck::validators::{email, max_length, min};
//!
//! let mut session = Session::new();
//! session.add("age", &[&min(15_i64, 18)]);
//! session.add("email", &[&max_length("a@b.com", 64), &email("a@b.com")]);
//!
//! let errors = session.result().unwrap();
//! assert_eq!(errors.render(), "age: age must be at least 18");
//! ```

// Text validators
pub mod content;
pub mod email;
pub mod length;
pub mod uuid;

// Numeric validators
pub mod numeric;
pub mod range;

// Collection validators
pub mod size;

// Time validators
pub mod time;

// Presence validators
pub mod nullable;

// ============================================================================
// RE-EXPORTS: Text validators
// ============================================================================

pub use content::{
    Alphanumeric, OneOf, OnlyDigits, Phone, alphanumeric, one_of, only_digits, phone,
};
pub use email::{Email, email};
pub use length::{Length, MaxLength, MinLength, length, max_length, min_length};
pub use uuid::{IsUuid, uuid};

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use numeric::{Numeric, numeric};
pub use range::{Max, Min, Number, Range, max, min, range};

// ============================================================================
// RE-EXPORTS: Collection validators
// ============================================================================

pub use size::{MaxCount, MinCount, max_count, min_count};

// ============================================================================
// RE-EXPORTS: Time validators
// ============================================================================

pub use time::{
    BetweenDate, Iso8601, Iso8601Date, MaxDate, MinDate, between_date, iso8601, iso8601_date,
    max_date, min_date,
};

// ============================================================================
// RE-EXPORTS: Presence validators
// ============================================================================

pub use nullable::{Required, required};
