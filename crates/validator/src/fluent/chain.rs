//! The fluent rule vocabulary shared by validators and rule packs
//!
//! [`RuleChain`] is the small core a builder implements: push a rule, reach
//! the last one. [`RuleChainExt`] layers the named rules on top and is
//! implemented for every chain, so [`Validator`](super::Validator),
//! [`ParsedValidator`](super::ParsedValidator) and
//! [`RulePack`] all speak the same vocabulary.

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::Rule;
use crate::rules::{self, Presence, RulePack};

// ============================================================================
// CORE
// ============================================================================

/// A builder that accumulates rules for values of type `T`.
pub trait RuleChain<T: ?Sized>: Sized {
    /// Appends a rule.
    fn push_rule(&mut self, rule: Rule<T>);

    /// The most recently appended rule, if any.
    fn last_rule_mut(&mut self) -> Option<&mut Rule<T>>;
}

impl<T: ?Sized> RuleChain<T> for RulePack<T> {
    fn push_rule(&mut self, rule: Rule<T>) {
        self.push(rule);
    }

    fn last_rule_mut(&mut self) -> Option<&mut Rule<T>> {
        self.last_mut()
    }
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Named rules for any [`RuleChain`].
///
/// Each method appends one rule; rules run in the order they were added.
///
/// # Examples
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// let outcome = validate("username", "ab")
///     .required()
///     .length_min(3)
///     .message("username is too short")
///     .result();
///
/// assert_eq!(outcome.errors().as_slice()[0].message, "username is too short");
/// ```
pub trait RuleChainExt<T: ?Sized>: RuleChain<T> {
    /// Appends an arbitrary rule.
    #[must_use = "builder methods must be chained or built"]
    fn rule(mut self, rule: Rule<T>) -> Self {
        self.push_rule(rule);
        self
    }

    /// Appends every rule of `pack`, in order.
    #[must_use = "builder methods must be chained or built"]
    fn with_rules(mut self, pack: &RulePack<T>) -> Self {
        for rule in pack.rules() {
            self.push_rule(rule.clone());
        }
        self
    }

    /// Replaces the message of the most recently added rule.
    ///
    /// Without any rule this does nothing.
    #[must_use = "builder methods must be chained or built"]
    fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self
    where
        T: 'static,
    {
        if let Some(last) = self.last_rule_mut() {
            let rule = std::mem::take(last);
            *last = rule.with_message(message);
        }
        self
    }

    /// See [`rules::required`].
    #[must_use = "builder methods must be chained or built"]
    fn required(self) -> Self
    where
        T: Presence + 'static,
    {
        self.rule(rules::required())
    }

    /// See [`rules::min`].
    #[must_use = "builder methods must be chained or built"]
    fn min(self, bound: T) -> Self
    where
        T: Sized + PartialOrd + Display + Send + Sync + 'static,
    {
        self.rule(rules::min(bound))
    }

    /// See [`rules::max`].
    #[must_use = "builder methods must be chained or built"]
    fn max(self, bound: T) -> Self
    where
        T: Sized + PartialOrd + Display + Send + Sync + 'static,
    {
        self.rule(rules::max(bound))
    }

    /// See [`rules::between`].
    #[must_use = "builder methods must be chained or built"]
    fn between(self, low: T, high: T) -> Self
    where
        T: Sized + PartialOrd + Display + Send + Sync + 'static,
    {
        self.rule(rules::between(low, high))
    }

    /// See [`rules::length_min`].
    #[must_use = "builder methods must be chained or built"]
    fn length_min(self, min: usize) -> Self
    where
        T: AsRef<str> + 'static,
    {
        self.rule(rules::length_min(min))
    }

    /// See [`rules::length_max`].
    #[must_use = "builder methods must be chained or built"]
    fn length_max(self, max: usize) -> Self
    where
        T: AsRef<str> + 'static,
    {
        self.rule(rules::length_max(max))
    }

    /// See [`rules::in_set`].
    #[must_use = "builder methods must be chained or built"]
    fn in_set<I, S>(self, allowed: I) -> Self
    where
        T: AsRef<str> + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(rules::in_set(allowed))
    }

    /// See [`rules::email`].
    #[must_use = "builder methods must be chained or built"]
    fn email(self) -> Self
    where
        T: AsRef<str> + 'static,
    {
        self.rule(rules::email())
    }

    /// See [`rules::custom`].
    #[must_use = "builder methods must be chained or built"]
    fn custom<P>(self, predicate: P, message: impl Into<Cow<'static, str>>) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule(rules::custom(predicate, message))
    }
}

impl<T: ?Sized, C: RuleChain<T>> RuleChainExt<T> for C {}
