//! Allow-list membership

use super::messages;
use crate::foundation::{ErrorKind, Rule, ValidationError, ValidationErrors};

/// Flags non-empty text that is not exactly one of `allowed`.
///
/// Comparison is case-sensitive. Empty text passes.
pub fn in_set<T, I, S>(allowed: I) -> Rule<T>
where
    T: AsRef<str> + ?Sized + 'static,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    Rule::new(
        "in_set",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            let text = value.as_ref();
            if text.is_empty() || allowed.iter().any(|candidate| candidate == text) {
                return;
            }
            out.add(
                ValidationError::new(field, ErrorKind::InSet, messages::IN_SET)
                    .with_meta("got", text),
            );
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::apply_rules;

    #[test]
    fn test_membership() {
        let roles = || in_set::<str, _, _>(["admin", "user"]);
        assert!(apply_rules("role", "admin", &[roles()]).ok());
        assert!(apply_rules("role", "", &[roles()]).ok());

        let outcome = apply_rules("role", "Admin", &[roles()]);
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.code, ErrorKind::InSet);
        assert_eq!(error.message, "value is not allowed");
        assert_eq!(error.meta("got"), Some("Admin"));
    }

    #[test]
    fn test_owned_allow_list() {
        let allowed = vec![String::from("eu"), String::from("us")];
        let rule = in_set::<String, _, _>(allowed);
        assert!(!apply_rules("region", &String::from("apac"), &[rule]).ok());
    }
}
