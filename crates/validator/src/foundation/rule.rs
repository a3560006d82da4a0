//! Rules: named, shareable checks on a single value
//!
//! A [`Rule<T>`] wraps a check `Fn(field, &value, &mut errors)`. Rules never
//! short-circuit each other; [`apply_rules`] runs every rule of a list in
//! order and collects whatever they append.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::error::ValidationErrors;
use super::outcome::ValidationOutcome;

type CheckFn<T> = dyn Fn(&str, &T, &mut ValidationErrors) + Send + Sync;

// ============================================================================
// RULE
// ============================================================================

/// A reusable check on values of type `T`.
///
/// Cloning a rule is cheap: the check is reference counted. A default
/// (`unset`) rule does nothing when applied.
///
/// # Examples
///
/// ```rust
/// use strata_validator::foundation::{ErrorKind, Rule, ValidationErrors};
///
/// let even = Rule::new("even", |field: &str, value: &u32, out: &mut ValidationErrors| {
///     if value % 2 != 0 {
///         out.push(field, ErrorKind::Custom, "must be even");
///     }
/// });
///
/// let mut errors = ValidationErrors::new();
/// even.apply("count", &3, &mut errors);
/// assert_eq!(errors.len(), 1);
/// ```
pub struct Rule<T: ?Sized> {
    name: Cow<'static, str>,
    check: Option<Arc<CheckFn<T>>>,
}

impl<T: ?Sized> Rule<T> {
    /// Creates a rule from a check.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&str, &T, &mut ValidationErrors) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Some(Arc::new(check)),
        }
    }

    /// A rule that never reports anything.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            name: Cow::Borrowed("unset"),
            check: None,
        }
    }

    /// Rule name, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns false for [`unset`](Self::unset) rules.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.check.is_some()
    }

    /// Runs the check, appending any failure to `out`.
    #[inline]
    pub fn apply(&self, field: &str, value: &T, out: &mut ValidationErrors) {
        if let Some(check) = &self.check {
            check(field, value, out);
        }
    }

    /// Returns a rule that reports the same failures with `message` as text.
    ///
    /// Codes and metadata are kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self
    where
        T: 'static,
    {
        match self.check {
            None => Self {
                name: self.name,
                check: None,
            },
            Some(inner) => {
                let message = message.into();
                Self {
                    name: self.name,
                    check: Some(Arc::new(
                        move |field: &str, value: &T, out: &mut ValidationErrors| {
                            let mut local = ValidationErrors::new();
                            inner(field, value, &mut local);
                            out.extend(local.into_iter().map(|mut error| {
                                error.message = message.clone();
                                error
                            }));
                        },
                    )),
                }
            }
        }
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: self.check.clone(),
        }
    }
}

impl<T: ?Sized> Default for Rule<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("set", &self.is_set())
            .finish()
    }
}

// ============================================================================
// RULE EXECUTION
// ============================================================================

/// Applies every rule to `value`, in order.
///
/// All rules run even after a failure; the outcome holds their errors in
/// rule order.
pub fn apply_rules<T: ?Sized>(field: &str, value: &T, rules: &[Rule<T>]) -> ValidationOutcome {
    let mut errors = ValidationErrors::new();
    apply_rules_into(field, value, rules, &mut errors);
    ValidationOutcome::from(errors)
}

/// Like [`apply_rules`], appending to an existing collection.
///
/// Returns true if no rule added an error.
pub fn apply_rules_into<T: ?Sized>(
    field: &str,
    value: &T,
    rules: &[Rule<T>],
    out: &mut ValidationErrors,
) -> bool {
    let before = out.len();
    for rule in rules {
        rule.apply(field, value, out);
    }
    out.len() == before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    fn below(limit: i32) -> Rule<i32> {
        Rule::new("below", move |field: &str, value: &i32, out: &mut ValidationErrors| {
            if *value >= limit {
                out.push(field, ErrorKind::Max, "too big");
            }
        })
    }

    #[test]
    fn test_unset_rule_is_noop() {
        let rule: Rule<i32> = Rule::default();
        assert!(!rule.is_set());
        assert!(apply_rules("n", &5, &[rule]).ok());
    }

    #[test]
    fn test_all_rules_run_in_order() {
        let rules = [below(3), Rule::unset(), below(1)];
        let outcome = apply_rules("n", &10, &rules);
        assert_eq!(outcome.errors().len(), 2);
    }

    #[test]
    fn test_apply_rules_into_reports_new_errors_only() {
        let mut errors = ValidationErrors::new();
        errors.push("other", ErrorKind::Custom, "earlier");

        assert!(apply_rules_into("n", &0, &[below(3)], &mut errors));
        assert!(!apply_rules_into("n", &7, &[below(3)], &mut errors));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_with_message_keeps_code_and_meta() {
        let rule = Rule::new("tagged", |field: &str, _: &str, out: &mut ValidationErrors| {
            out.add(
                crate::foundation::ValidationError::new(field, ErrorKind::Format, "original")
                    .with_meta("expected", "thing"),
            );
        })
        .with_message("friendly");

        let outcome = apply_rules("x", "value", &[rule]);
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.message, "friendly");
        assert_eq!(error.code, ErrorKind::Format);
        assert_eq!(error.meta("expected"), Some("thing"));
    }

    #[test]
    fn test_with_message_on_passing_value_adds_nothing() {
        let rule = below(100).with_message("custom");
        assert!(apply_rules("n", &1, &[rule]).ok());
    }

    #[test]
    fn test_clone_shares_check() {
        let rule = below(0);
        let copy = rule.clone();
        assert_eq!(copy.name(), rule.name());
        assert!(!apply_rules("n", &1, &[rule, copy]).ok());
    }
}
