//! The result of one validation pass

use super::error::{ValidationError, ValidationErrors};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors produced by validating one value or one record.
///
/// An outcome is a success exactly when it holds no errors. Outcomes from
/// several fields combine with [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[must_use = "a validation outcome must be inspected"]
pub struct ValidationOutcome {
    errors: ValidationErrors,
}

impl ValidationOutcome {
    /// An outcome without errors.
    pub fn success() -> Self {
        Self::default()
    }

    /// An outcome carrying `errors`.
    pub fn failure(errors: ValidationErrors) -> Self {
        Self { errors }
    }

    /// Returns true if no error was produced.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends the errors of `other` after this outcome's own.
    pub fn merge(&mut self, other: Self) {
        self.errors.merge(other.errors);
    }

    /// Appends the errors of `other`, returning the combined outcome.
    pub fn and(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }

    /// Borrowed view of the errors.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the outcome, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// `Ok(())` on success, otherwise the errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.errors.into_result(())
    }
}

impl From<ValidationErrors> for ValidationOutcome {
    fn from(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

impl From<ValidationError> for ValidationOutcome {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: error.into(),
        }
    }
}

impl FromIterator<ValidationOutcome> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = ValidationOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::success(), Self::and)
    }
}
