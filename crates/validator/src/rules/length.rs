//! Text length rules
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use super::messages;
use crate::foundation::{ErrorKind, Rule, ValidationError, ValidationErrors};

#[inline]
fn measure(text: &str) -> usize {
    text.chars().count()
}

/// Flags non-empty text shorter than `min` chars.
///
/// Empty text passes; pair with [`required`](super::required) to reject it.
pub fn length_min<T>(min: usize) -> Rule<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    Rule::new(
        "length_min",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            let text = value.as_ref();
            if text.is_empty() {
                return;
            }
            let got = measure(text);
            if got < min {
                out.add(
                    ValidationError::new(field, ErrorKind::LengthMin, messages::LENGTH_MIN)
                        .with_meta("min", min.to_string())
                        .with_meta("got", got.to_string()),
                );
            }
        },
    )
}

/// Flags text longer than `max` chars.
pub fn length_max<T>(max: usize) -> Rule<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    Rule::new(
        "length_max",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            let got = measure(value.as_ref());
            if got > max {
                out.add(
                    ValidationError::new(field, ErrorKind::LengthMax, messages::LENGTH_MAX)
                        .with_meta("max", max.to_string())
                        .with_meta("got", got.to_string()),
                );
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::apply_rules;

    #[test]
    fn test_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        let word = "añoé";
        assert!(apply_rules("w", word, &[length_max::<str>(4)]).ok());
        assert!(!apply_rules("w", word, &[length_min::<str>(5)]).ok());
    }

    #[test]
    fn test_length_min_meta() {
        let outcome = apply_rules("password", &String::from("abc"), &[length_min(8)]);
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.code, ErrorKind::LengthMin);
        assert_eq!(error.message, "length is below minimum");
        assert_eq!(error.meta("min"), Some("8"));
        assert_eq!(error.meta("got"), Some("3"));
    }

    #[test]
    fn test_length_min_skips_empty() {
        assert!(apply_rules("nick", "", &[length_min::<str>(3)]).ok());
    }

    #[test]
    fn test_length_max_meta() {
        let outcome = apply_rules("code", "abcdef", &[length_max::<str>(4)]);
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.code, ErrorKind::LengthMax);
        assert_eq!(error.meta("max"), Some("4"));
        assert_eq!(error.meta("got"), Some("6"));
    }
}
