//! Reusable, immutable rule lists

use std::borrow::Cow;
use std::fmt;

use super::messages;
use crate::foundation::{Rule, ValidationErrors, ValidationOutcome, apply_rules, apply_rules_into};

/// An ordered list of rules that can be shared between validators and
/// schema fields.
///
/// A pack is built once with the same fluent vocabulary as a validator and
/// then only read. Cloning shares the underlying checks.
///
/// When a pack is used on textual input that must first be converted, the
/// conversion failure uses [`parse_message`](Self::parse_message).
///
/// # Examples
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// let email_rules = RulePack::<str>::new().required().email();
///
/// assert!(email_rules.apply("email", "a@b.c").ok());
/// assert_eq!(email_rules.apply("email", "").errors().len(), 1);
/// ```
pub struct RulePack<T: ?Sized> {
    rules: Vec<Rule<T>>,
    parse_message: Option<Cow<'static, str>>,
}

impl<T: ?Sized> RulePack<T> {
    /// Creates an empty pack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            parse_message: None,
        }
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the pack holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sets the message used when textual input cannot be converted.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_parse_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.parse_message = Some(message.into());
        self
    }

    /// Message used when textual input cannot be converted.
    #[must_use]
    pub fn parse_message(&self) -> Cow<'static, str> {
        self.parse_message
            .clone()
            .unwrap_or(Cow::Borrowed(messages::PARSE))
    }

    /// Applies every rule to `value`.
    pub fn apply(&self, field: &str, value: &T) -> ValidationOutcome {
        apply_rules(field, value, &self.rules)
    }

    /// Applies every rule, appending to `out`. Returns true if nothing was added.
    pub fn apply_into(&self, field: &str, value: &T, out: &mut ValidationErrors) -> bool {
        apply_rules_into(field, value, &self.rules, out)
    }

    pub(crate) fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Rule<T>> {
        self.rules.last_mut()
    }
}

impl<T: ?Sized> Default for RulePack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for RulePack<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            parse_message: self.parse_message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for RulePack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulePack")
            .field("rules", &self.rules)
            .field("parse_message", &self.parse_message)
            .finish()
    }
}

impl<T: ?Sized> FromIterator<Rule<T>> for RulePack<T> {
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
            parse_message: None,
        }
    }
}
