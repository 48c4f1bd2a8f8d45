//! Error types for validation failures
//!
//! [`FieldError`] is the single failure recorded for one field;
//! [`ValidationErrors`] is the aggregate a session hands back once it is
//! finished. Tags and parameter keys use `Cow<'static, str>` so the built-in
//! predicates never allocate for them.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::Value;

// ============================================================================
// TAGS
// ============================================================================

/// Stable machine identifiers for every built-in failure kind.
///
/// Tags never change with message wording; match on these rather than on
/// [`FieldError::message`].
pub mod tag {
    pub const REQUIRED: &str = "required";
    pub const INVALID_TYPE: &str = "invalid_type";
    pub const INVALID_TIME: &str = "invalid_time";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const RANGE: &str = "range";
    pub const MIN_LENGTH: &str = "min_length";
    pub const MAX_LENGTH: &str = "max_length";
    pub const LENGTH: &str = "length";
    pub const ONE_OF: &str = "one_of";
    pub const IS_EMAIL: &str = "is_email";
    pub const IS_ALPHANUMERIC: &str = "is_alphanumeric";
    pub const IS_ISO8601: &str = "is_iso8601";
    pub const IS_ISO8601_DATE: &str = "is_iso8601_date";
    pub const IS_PHONE: &str = "is_phone";
    pub const IS_UUID: &str = "is_uuid";
    pub const IS_ONLY_DIGITS: &str = "is_only_digits";
    pub const MIN_DATE: &str = "min_date";
    pub const MAX_DATE: &str = "max_date";
    pub const BETWEEN_DATE: &str = "between_date";
    pub const MIN_COUNT: &str = "min_count";
    pub const MAX_COUNT: &str = "max_count";
    pub const NUMERIC: &str = "numeric";
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single failed check on a named field.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::FieldError;
///
/// let error = FieldError::new("age", "age must be at least 18", "min", 16)
///     .with_param("min", 18);
///
/// assert_eq!(error.tag(), "min");
/// assert_eq!(error.param("min").map(ToString::to_string).as_deref(), Some("18"));
/// assert_eq!(error.to_string(), "age: age must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    field: String,
    message: String,
    tag: Cow<'static, str>,
    value: Value,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    params: IndexMap<Cow<'static, str>, Value>,
}

impl FieldError {
    /// Creates an error with no parameters.
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        tag: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            tag: tag.into(),
            value: value.into(),
            params: IndexMap::new(),
        }
    }

    /// Adds a parameter for programmatic consumers (e.g. `min = 5`).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replaces the human-readable message, keeping tag and parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable failure identifier, see [`tag`](self::tag).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The offending value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Looks up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// All parameters, in the order they were added.
    pub fn params(&self) -> &IndexMap<Cow<'static, str>, Value> {
        &self.params
    }

    /// Returns `true` if any parameter was attached.
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl FieldError {
    /// Creates a "required" error.
    pub fn required(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, format!("{field} is required"), tag::REQUIRED, value)
    }

    /// Creates an "invalid_type" error for a value outside the requested domain.
    pub fn invalid_type(field: &str, expected: impl fmt::Display, value: &Value) -> Self {
        Self::new(
            field,
            format!(
                "Invalid type: expected {expected} got {}, field: {field}",
                value.kind()
            ),
            tag::INVALID_TYPE,
            value.clone(),
        )
        .with_param("expected", expected.to_string())
    }

    /// Creates an "invalid_time" error for text that matched no known layout.
    pub fn invalid_time(field: &str, value: &Value) -> Self {
        Self::new(
            field,
            format!("Invalid time: {value}, field: {field}"),
            tag::INVALID_TIME,
            value.clone(),
        )
    }
}

// ============================================================================
// AGGREGATE
// ============================================================================

/// The outcome of a failed validation session: at most one [`FieldError`]
/// per field, kept in the order fields first failed.
///
/// A session never builds an empty aggregate; "no error" is `None` / `Ok(())`.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", self.render())]
pub struct ValidationErrors {
    errors: IndexMap<String, FieldError>,
}

impl ValidationErrors {
    pub(crate) fn from_map(errors: IndexMap<String, FieldError>) -> Self {
        Self { errors }
    }

    /// The field → error mapping, or `None` when there is nothing in it.
    pub fn entries(&self) -> Option<&IndexMap<String, FieldError>> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Returns `true` if `field` failed.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed field names in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Errors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Joins `"field: message"` pairs with `", "` in first-seen order.
    ///
    /// `field` is the name the error was recorded under, which can differ
    /// from [`FieldError::field`] when a custom check names another field.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(field);
            out.push_str(": ");
            out.push_str(error.message());
        }
        out
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = indexmap::map::Values<'a, String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

// ============================================================================
// TESTS
// ============================================================================
