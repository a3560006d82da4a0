//! Presence: the `required` rule

use std::borrow::Cow;

use super::messages;
use crate::foundation::{Rule, ValidationError, ValidationErrors};

// ============================================================================
// PRESENCE
// ============================================================================

/// Types with a notion of "absent or empty".
///
/// Text is present when non-empty. Whitespace counts as content.
/// An `Option` is present when it is `Some`, whatever it holds.
pub trait Presence {
    /// Returns true when the value counts as provided.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Cow<'_, str> {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T> Presence for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Flags absent or empty values with [`ErrorKind::Required`](crate::foundation::ErrorKind::Required).
pub fn required<T>() -> Rule<T>
where
    T: Presence + ?Sized + 'static,
{
    Rule::new(
        "required",
        |field: &str, value: &T, out: &mut ValidationErrors| {
            if !value.is_present() {
                out.add(ValidationError::required(field, messages::REQUIRED));
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, apply_rules};

    #[test]
    fn test_empty_text_is_absent() {
        let outcome = apply_rules("name", "", &[required()]);
        let errors = outcome.errors().as_slice();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].code, ErrorKind::Required);
        assert_eq!(errors[0].message, "field is required");
        assert!(errors[0].meta.is_empty());
    }

    #[test]
    fn test_whitespace_is_present() {
        assert!(apply_rules("name", " ", &[required::<str>()]).ok());
        assert!(apply_rules("name", &String::from("x"), &[required()]).ok());
    }

    #[test]
    fn test_option_presence() {
        let none: Option<u8> = None;
        assert!(!apply_rules("age", &none, &[required()]).ok());
        assert!(apply_rules("age", &Some(0_u8), &[required()]).ok());
    }
}
