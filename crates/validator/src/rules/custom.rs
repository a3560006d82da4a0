//! Predicate-backed rules

use std::borrow::Cow;

use crate::foundation::{Rule, ValidationError, ValidationErrors};

/// Flags values for which `predicate` returns false with
/// [`ErrorKind::Custom`](crate::foundation::ErrorKind::Custom) and `message`.
///
/// ```rust
/// use strata_validator::foundation::apply_rules;
/// use strata_validator::rules::custom;
///
/// let even = custom(|n: &u32| n % 2 == 0, "must be even");
/// assert!(!apply_rules("count", &3, &[even]).ok());
/// ```
pub fn custom<T, P>(predicate: P, message: impl Into<Cow<'static, str>>) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Rule::new(
        "custom",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            if !predicate(value) {
                out.add(ValidationError::custom(field, message.clone()));
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, apply_rules};

    #[test]
    fn test_custom_message_and_code() {
        let no_spaces = custom(|s: &str| !s.contains(' '), "must not contain spaces");
        let outcome = apply_rules("username", "john doe", &[no_spaces]);
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.code, ErrorKind::Custom);
        assert_eq!(error.message, "must not contain spaces");
        assert!(error.meta.is_empty());
    }

    #[test]
    fn test_custom_passes() {
        let positive = custom(|n: &i64| *n > 0, "must be positive");
        assert!(apply_rules("n", &1, &[positive]).ok());
    }
}
