//! Error types for validation failures
//!
//! A validation pass never stops at the first failed rule. Each failure
//! becomes a [`ValidationError`] and is appended, in the order it was
//! produced, to a [`ValidationErrors`] collection.
//!
//! Messages and metadata keys use `Cow<'static, str>` so the built-in rules
//! never allocate for their static text.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR KIND
// ============================================================================

/// Category of a validation failure.
///
/// The set is closed. Each kind has a stable lowercase identifier
/// ([`as_str`](Self::as_str)) suitable for clients and translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorKind {
    /// Value is absent or empty.
    Required,
    /// Value is below a lower bound.
    Min,
    /// Value is above an upper bound.
    Max,
    /// Text is shorter than allowed.
    LengthMin,
    /// Text is longer than allowed.
    LengthMax,
    /// Value lies outside an inclusive range.
    Between,
    /// Value is malformed: bad email, unparsable text, rejected form input.
    Format,
    /// Value is not in the allow-list.
    InSet,
    /// A user-supplied predicate rejected the value.
    Custom,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Required,
        Self::Min,
        Self::Max,
        Self::LengthMin,
        Self::LengthMax,
        Self::Between,
        Self::Format,
        Self::InSet,
        Self::Custom,
    ];

    /// Stable identifier of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::LengthMin => "length_min",
            Self::LengthMax => "length_max",
            Self::Between => "between",
            Self::Format => "format",
            Self::InSet => "in_set",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an identifier that names no [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation error kind `{0}`")]
pub struct UnknownErrorKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownErrorKind(s.to_owned()))
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed check on one field.
///
/// # Examples
///
/// ```rust
/// use strata_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("age", ErrorKind::Min, "value is below minimum")
///     .with_meta("min", "18")
///     .with_meta("got", "17");
///
/// assert_eq!(error.meta("got"), Some("17"));
/// assert_eq!(error.to_string(), "[age] min: value is below minimum");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("[{field}] {code}: {message}")]
pub struct ValidationError {
    /// Name of the field the error belongs to.
    pub field: String,

    /// Failure category.
    pub code: ErrorKind,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Machine-readable details, e.g. `min`/`got` for range failures.
    ///
    /// Ordered by key so rendering is deterministic.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub meta: BTreeMap<Cow<'static, str>, String>,
}

impl ValidationError {
    /// Creates an error without metadata.
    pub fn new(
        field: impl Into<String>,
        code: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
            meta: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) one metadata entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_meta(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Looks up a metadata value by key.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a `required` error.
    pub fn required(field: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(field, ErrorKind::Required, message)
    }

    /// Creates a `format` error.
    pub fn format(field: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(field, ErrorKind::Format, message)
    }

    /// Creates a `custom` error.
    pub fn custom(field: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(field, ErrorKind::Custom, message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered, append-only collection of validation errors.
///
/// Insertion order is preserved and duplicates are kept: two failed rules
/// on the same field give two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[error("Validation failed with {} error(s):{}", .errors.len(), Numbered(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Builds and appends an error without metadata.
    pub fn push(
        &mut self,
        field: impl Into<String>,
        code: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.add(ValidationError::new(field, code, message));
    }

    /// Appends all errors of `other`, keeping their order.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no error was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Alias for [`is_empty`](Self::is_empty) that reads better at call sites.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.is_empty()
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns all errors.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors recorded for one field, in insertion order.
    pub fn for_field(&self, field: &str) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Distinct field names, in order of first appearance.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !seen.contains(&error.field.as_str()) {
                seen.push(&error.field);
            }
        }
        seen
    }

    /// Consumes the collection, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Renders the collection as an API error body:
    ///
    /// ```json
    /// {"error": {"code": "validation_failed", "message": "Validation failed", "fields": [...]}}
    /// ```
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.errors,
            }
        })
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// One indented, numbered line per error.
struct Numbered<'a>(&'a [ValidationError]);

impl fmt::Display for Numbered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            write!(f, "\n  {}. {error}", i + 1)?;
        }
        Ok(())
    }
}
