//! Fluent validation of one already-typed value

use std::fmt;

use smallvec::SmallVec;

use super::chain::RuleChain;
use crate::foundation::{Rule, ValidationErrors, ValidationOutcome, apply_rules, apply_rules_into};

/// Rules accumulated for a single field.
///
/// Nothing runs until [`result`](Self::result) is called, and each call
/// re-runs every rule against the borrowed value.
///
/// # Examples
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// let age = 17;
/// let outcome = validate("age", &age).min(18).result();
///
/// let error = &outcome.errors().as_slice()[0];
/// assert_eq!(error.code, ErrorKind::Min);
/// assert_eq!(error.meta("min"), Some("18"));
/// assert_eq!(error.meta("got"), Some("17"));
/// ```
pub struct Validator<'a, T: ?Sized> {
    field: &'a str,
    value: &'a T,
    rules: SmallVec<[Rule<T>; 4]>,
}

impl<'a, T: ?Sized> Validator<'a, T> {
    /// Starts a validator for `value`, reported under `field`.
    pub fn new(field: &'a str, value: &'a T) -> Self {
        Self {
            field,
            value,
            rules: SmallVec::new(),
        }
    }

    /// Field name errors are reported under.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The value being validated.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Number of rules added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule and returns their errors.
    pub fn result(&self) -> ValidationOutcome {
        apply_rules(self.field, self.value, &self.rules)
    }

    /// Runs every rule, appending to `out`. Returns true if nothing was added.
    pub fn result_into(&self, out: &mut ValidationErrors) -> bool {
        apply_rules_into(self.field, self.value, &self.rules, out)
    }
}

impl<T: ?Sized> RuleChain<T> for Validator<'_, T> {
    fn push_rule(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    fn last_rule_mut(&mut self) -> Option<&mut Rule<T>> {
        self.rules.last_mut()
    }
}

impl<T: ?Sized> fmt::Debug for Validator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("field", &self.field)
            .field("rules", &self.rules)
            .finish()
    }
}

/// Starts a fluent validator for `value`.
pub fn validate<'a, T: ?Sized>(field: &'a str, value: &'a T) -> Validator<'a, T> {
    Validator::new(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::fluent::RuleChainExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_email_reports_required_only() {
        let outcome = validate("email", "").required().email().result();
        let errors = outcome.errors().as_slice();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].code, ErrorKind::Required);
        assert_eq!(errors[0].message, "field is required");
    }

    #[test]
    fn test_every_rule_runs() {
        let name = String::from("x");
        let outcome = validate("name", &name)
            .length_min(3)
            .in_set(["alice", "bob"])
            .custom(|s: &String| s.chars().all(char::is_uppercase), "must be upper case")
            .result();
        let codes: Vec<ErrorKind> = outcome.errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, [ErrorKind::LengthMin, ErrorKind::InSet, ErrorKind::Custom]);
    }

    #[test]
    fn test_result_is_repeatable() {
        let validator = validate("n", &5_i64).max(3);
        assert_eq!(validator.result(), validator.result());
        assert_eq!(validator.len(), 1);
    }

    #[test]
    fn test_result_into_appends() {
        let mut errors = ValidationErrors::new();
        assert!(validate("a", &1).min(0).result_into(&mut errors));
        assert!(!validate("b", &1).min(2).result_into(&mut errors));
        assert_eq!(errors.fields(), ["b"]);
    }

    #[test]
    fn test_no_rules_is_ok() {
        let validator = validate("anything", &());
        assert!(validator.is_empty());
        assert!(validator.result().ok());
    }

    #[test]
    fn test_accessors() {
        let validator = validate("email", "a@b.c").email();
        assert_eq!(validator.field(), "email");
        assert_eq!(validator.value(), "a@b.c");
    }
}
