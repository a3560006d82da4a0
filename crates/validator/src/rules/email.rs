//! Email shape heuristic
//!
//! This is deliberately not RFC 5322. A value looks like an email when it
//! has exactly one `@` with a non-empty local part, and the domain has a
//! `.` that is neither its first nor its last character.

use super::messages;
use crate::foundation::{Rule, ValidationError, ValidationErrors};

/// Returns true if `text` has the shape `local@domain.tld`.
///
/// ```rust
/// use strata_validator::rules::looks_like_email;
///
/// assert!(looks_like_email("a@b.c"));
/// assert!(!looks_like_email("a@.com"));
/// assert!(!looks_like_email("not-an-email"));
/// ```
#[must_use]
pub fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// Flags non-empty text that fails [`looks_like_email`] with
/// [`ErrorKind::Format`](crate::foundation::ErrorKind::Format) and `expected = "email"`.
pub fn email<T>() -> Rule<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    Rule::new(
        "email",
        |field: &str, value: &T, out: &mut ValidationErrors| {
            let text = value.as_ref();
            if !text.is_empty() && !looks_like_email(text) {
                out.add(
                    ValidationError::format(field, messages::EMAIL).with_meta("expected", "email"),
                );
            }
        },
    )
}
