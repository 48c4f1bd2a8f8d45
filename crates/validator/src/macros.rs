//! Macro for declaring predicates with minimal boilerplate.
//!
//! A predicate is a struct that owns the coerced value plus its business
//! parameters and implements [`Validate`](crate::foundation::Validate).
//! [`predicate!`] writes the struct, an all-fields `new`, and the `Validate`
//! impl; the factory function callers actually use is written by hand next
//! to it so it can take `impl Into<..>` arguments.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::predicate;
//! use fieldcheck::foundation::{FieldError, Validate};
//!
//! predicate! {
//!     /// Passes when the value is even.
//!     pub Even { value: i64 };
//!     rule(self) { self.value % 2 == 0 }
//!     error(self, field) {
//!         FieldError::new(field, format!("{field} must be even"), "even", self.value)
//!     }
//! }
//!
//! assert!(Even::new(4).validate("n").is_ok());
//! assert_eq!(Even::new(3).validate("n").unwrap_err().message(), "n must be even");
//! ```

/// Declares a predicate struct and its `Validate` implementation.
///
/// `#[derive(Debug, Clone)]` is always applied; add more with `#[derive(...)]`.
///
/// # Variants
///
/// **Plain struct**:
/// ```rust,ignore
/// predicate! {
///     pub MinLength { value: String, min: usize };
///     rule(self) { self.value.chars().count() >= self.min }
///     error(self, field) { FieldError::new(field, "too short", "min_length", self.value.clone()) }
/// }
/// ```
///
/// **Generic struct** (one type parameter, simple-identifier bounds):
/// ```rust,ignore
/// predicate! {
///     #[derive(Copy)]
///     pub Min<T: Number> { value: T, min: T };
///     rule(self) { self.value >= self.min }
///     error(self, field) { FieldError::new(field, "too small", "min", self.value) }
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Plain struct ─────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident) $rule:block
        error($self2:ident, $fld:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            fn validate(
                &$self_,
                $fld: &str,
            ) -> ::std::result::Result<(), $crate::foundation::FieldError> {
                if $rule {
                    Ok(())
                } else {
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct ───────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident) $rule:block
        error($self2:ident, $fld:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            fn validate(
                &$self_,
                $fld: &str,
            ) -> ::std::result::Result<(), $crate::foundation::FieldError> {
                if $rule {
                    Ok(())
                } else {
                    Err($err)
                }
            }
        }
    };
}
