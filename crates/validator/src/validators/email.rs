//! Mailbox address predicate.
//!
//! Accepts the RFC 5322 `mailbox` production the way mail clients do:
//!
//! - a bare `addr-spec`: `user@example.com`
//! - an angle address with an optional display name:
//!   `<user@example.com>`, `Jane Doe <user@example.com>`,
//!   `"Doe, Jane" <user@example.com>`
//!
//! The local part is a dot-atom or a quoted string; the domain is a
//! dot-atom or a bracketed domain literal. A top-level domain is not
//! required (`root@localhost` is a valid mailbox).

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{FieldError, tag};

// atext plus any non-ASCII scalar (RFC 6532).
macro_rules! atext {
    () => {
        r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-[^\x00-\x7F]]"
    };
}

macro_rules! dot_atom {
    () => {
        concat!(atext!(), r"+(?:\.", atext!(), r"+)*")
    };
}

macro_rules! quoted_string {
    () => {
        r#""(?:[^"\\\r\n]|\\[^\r\n])*""#
    };
}

macro_rules! addr_spec {
    () => {
        concat!(
            r"(?:",
            dot_atom!(),
            r"|",
            quoted_string!(),
            r")@(?:",
            dot_atom!(),
            r"|\[[^\[\]\\\s]*\])"
        )
    };
}

// Display names may use the obsolete phrase form with embedded dots.
macro_rules! phrase_word {
    () => {
        concat!(
            r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~.\-[^\x00-\x7F]]+|",
            quoted_string!(),
            r")"
        )
    };
}

static MAILBOX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:",
        addr_spec!(),
        r"|(?:",
        phrase_word!(),
        r"(?:\s+",
        phrase_word!(),
        r")*\s*)?<",
        addr_spec!(),
        r">)\s*$"
    ))
    .expect("mailbox pattern compiles")
});

crate::predicate! {
    /// Passes when the text parses as a single mailbox address.
    pub Email { value: String };
    rule(self) { MAILBOX_REGEX.is_match(&self.value) }
    error(self, field) {
        FieldError::new(
            field,
            format!("{field} is not a valid email address"),
            tag::IS_EMAIL,
            self.value.clone(),
        )
    }
}

/// Creates an [`Email`] predicate.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::Validate;
/// use fieldcheck::validators::email;
///
/// assert!(email("a@b.com").validate("email").is_ok());
/// assert!(email("Jane <jane@example.org>").validate("email").is_ok());
/// assert!(email("abc").validate("email").is_err());
/// ```
pub fn email(value: impl Into<String>) -> Email {
    Email::new(value.into())
}

// ============================================================================
// TESTS
// ============================================================================
