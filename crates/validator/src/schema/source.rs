//! The shapes a schema check may take
//!
//! A schema field can be declared with any of three value sources, a parsed
//! field with any of three text sources, and a record check with one of two
//! closure shapes. Each shape is selected by a marker type from [`shape`],
//! inferred by the compiler; callers never name it.
//!
//! | Trait | Shape | Accepted |
//! |-------|-------|----------|
//! | [`FieldSource<V, _>`] | [`shape::Outcome`] | `Fn(&str, &V) -> ValidationOutcome` |
//! | | [`shape::Builder`] | [`builder`]`(|field, value| validate(field, value)...)` |
//! | | [`shape::Pack`] | [`RulePack<V>`] |
//! | [`ParsedSource<_>`] | [`shape::Outcome`] | `Fn(&str, &str) -> ValidationOutcome` |
//! | | [`shape::Builder`] | [`parsed_builder`]`(|field, text| validate_parsed::<P>(field, text)...)` |
//! | | [`shape::Pack`] | [`RulePack<P>`] with `P: Parse` |
//! | [`WholeCheck<R, _>`] | [`shape::Accumulate`] | `Fn(&R, &mut ValidationErrors)` |
//! | | [`shape::Outcome`] | `Fn(&R) -> ValidationOutcome` |
//!
//! The traits are sealed. Anything else is rejected at compile time:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! struct Account {
//!     balance: i64,
//! }
//!
//! // A bare predicate is not a record check.
//! let schema = Schema::<Account>::new().check(|a: &Account| a.balance >= 0);
//! ```
//!
//! The same holds for field sources:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! struct Stock {
//!     count: i32,
//! }
//!
//! // A field predicate must report through a `ValidationOutcome`.
//! let schema = Schema::<Stock>::new().field("count", |s: &Stock| &s.count, |_f: &str, v: &i32| *v > 0);
//! ```
//!
//! and for parsed sources:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! struct Order {
//!     quantity: String,
//! }
//!
//! let schema = Schema::<Order>::new().parsed(
//!     "quantity",
//!     |o: &Order| o.quantity.as_str(),
//!     |_f: &str, text: &str| !text.is_empty(),
//! );
//! ```

use std::marker::PhantomData;

use strata_conversion::Parse;

use crate::fluent::{ParsedValidator, Validator, run_parsed};
use crate::foundation::{ValidationErrors, ValidationOutcome, apply_rules_into};
use crate::rules::RulePack;

/// Marker types naming the accepted shapes.
pub mod shape {
    /// A closure returning a [`ValidationOutcome`](crate::foundation::ValidationOutcome).
    #[derive(Debug)]
    pub enum Outcome {}

    /// A closure returning a fluent validator, wrapped by
    /// [`builder`](super::builder) or [`parsed_builder`](super::parsed_builder).
    #[derive(Debug)]
    pub enum Builder {}

    /// A [`RulePack`](crate::rules::RulePack).
    #[derive(Debug)]
    pub enum Pack {}

    /// A record closure appending to a shared error collection.
    #[derive(Debug)]
    pub enum Accumulate {}
}

mod sealed {
    pub trait FieldSource<V: ?Sized, M> {}
    pub trait ParsedSource<M> {}
    pub trait WholeCheck<R, M> {}
}

// ============================================================================
// FIELD SOURCES
// ============================================================================

/// Something that validates a field value of type `V`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot validate a field of type `{V}`",
    label = "not a field validation source",
    note = "use `|field: &str, value: &{V}| -> ValidationOutcome`, `builder(|field, value| validate(field, value)...)` or a `RulePack<{V}>`"
)]
pub trait FieldSource<V: ?Sized, M>: sealed::FieldSource<V, M> + Send + Sync + 'static {
    /// Validates `value`, appending failures to `out`.
    fn check_field(&self, field: &str, value: &V, out: &mut ValidationErrors);
}

impl<V, F> sealed::FieldSource<V, shape::Outcome> for F
where
    V: ?Sized,
    F: Fn(&str, &V) -> ValidationOutcome,
{
}

impl<V, F> FieldSource<V, shape::Outcome> for F
where
    V: ?Sized,
    F: Fn(&str, &V) -> ValidationOutcome + Send + Sync + 'static,
{
    fn check_field(&self, field: &str, value: &V, out: &mut ValidationErrors) {
        out.merge(self(field, value).into_errors());
    }
}

/// A closure producing a [`Validator`], ready to be used as a schema field.
///
/// Created by [`builder`].
pub struct Build<F, V: ?Sized> {
    build: F,
    _value: PhantomData<fn(&V)>,
}

/// Wraps a closure that builds a fluent validator for a schema field.
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// struct User {
///     email: String,
/// }
///
/// let schema = Schema::new().field(
///     "email",
///     |u: &User| &u.email,
///     builder(|field, value| validate(field, value).required().email()),
/// );
///
/// let outcome = schema.validate(&User { email: "nope".into() });
/// assert_eq!(outcome.errors().as_slice()[0].code, ErrorKind::Format);
/// ```
pub fn builder<V, F>(build: F) -> Build<F, V>
where
    V: ?Sized,
    F: for<'a> Fn(&'a str, &'a V) -> Validator<'a, V> + Send + Sync + 'static,
{
    Build {
        build,
        _value: PhantomData,
    }
}

impl<V, F> sealed::FieldSource<V, shape::Builder> for Build<F, V>
where
    V: ?Sized,
    F: for<'a> Fn(&'a str, &'a V) -> Validator<'a, V>,
{
}

impl<V, F> FieldSource<V, shape::Builder> for Build<F, V>
where
    V: ?Sized + 'static,
    F: for<'a> Fn(&'a str, &'a V) -> Validator<'a, V> + Send + Sync + 'static,
{
    fn check_field(&self, field: &str, value: &V, out: &mut ValidationErrors) {
        (self.build)(field, value).result_into(out);
    }
}

impl<V: ?Sized> sealed::FieldSource<V, shape::Pack> for RulePack<V> {}

impl<V: ?Sized + 'static> FieldSource<V, shape::Pack> for RulePack<V> {
    fn check_field(&self, field: &str, value: &V, out: &mut ValidationErrors) {
        apply_rules_into(field, value, self.rules(), out);
    }
}

// ============================================================================
// PARSED SOURCES
// ============================================================================

/// Something that converts and validates raw text.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot validate a textual field",
    label = "not a parsed validation source",
    note = "use `|field: &str, text: &str| -> ValidationOutcome`, `parsed_builder(|field, text| validate_parsed::<T>(field, text)...)` or a `RulePack<T>` where `T: Parse`"
)]
pub trait ParsedSource<M>: sealed::ParsedSource<M> + Send + Sync + 'static {
    /// Converts and validates `input`, appending failures to `out`.
    fn check_text(&self, field: &str, input: &str, out: &mut ValidationErrors);
}

impl<F> sealed::ParsedSource<shape::Outcome> for F where F: Fn(&str, &str) -> ValidationOutcome {}

impl<F> ParsedSource<shape::Outcome> for F
where
    F: Fn(&str, &str) -> ValidationOutcome + Send + Sync + 'static,
{
    fn check_text(&self, field: &str, input: &str, out: &mut ValidationErrors) {
        out.merge(self(field, input).into_errors());
    }
}

/// A closure producing a [`ParsedValidator`], ready to be used as a parsed
/// schema field.
///
/// Created by [`parsed_builder`].
pub struct BuildParsed<F, P> {
    build: F,
    _target: PhantomData<fn() -> P>,
}

/// Wraps a closure that builds a parsed validator for a textual field.
pub fn parsed_builder<P, F>(build: F) -> BuildParsed<F, P>
where
    P: Parse,
    F: for<'a> Fn(&'a str, &'a str) -> ParsedValidator<'a, P> + Send + Sync + 'static,
{
    BuildParsed {
        build,
        _target: PhantomData,
    }
}

impl<P, F> sealed::ParsedSource<shape::Builder> for BuildParsed<F, P>
where
    P: Parse,
    F: for<'a> Fn(&'a str, &'a str) -> ParsedValidator<'a, P>,
{
}

impl<P, F> ParsedSource<shape::Builder> for BuildParsed<F, P>
where
    P: Parse + 'static,
    F: for<'a> Fn(&'a str, &'a str) -> ParsedValidator<'a, P> + Send + Sync + 'static,
{
    fn check_text(&self, field: &str, input: &str, out: &mut ValidationErrors) {
        let validator = (self.build)(field, input);
        validator.result_into(out, validator.parse_message());
    }
}

impl<P: Parse> sealed::ParsedSource<shape::Pack> for RulePack<P> {}

impl<P: Parse + 'static> ParsedSource<shape::Pack> for RulePack<P> {
    fn check_text(&self, field: &str, input: &str, out: &mut ValidationErrors) {
        run_parsed(field, input, self.rules(), self.parse_message(), out);
    }
}

// ============================================================================
// RECORD CHECKS
// ============================================================================

/// A check on a whole record of type `R`, typically a cross-field rule.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a record check for `{R}`",
    label = "not a record check",
    note = "use `|record: &{R}, errors: &mut ValidationErrors| {{ ... }}` or `|record: &{R}| -> ValidationOutcome`"
)]
pub trait WholeCheck<R, M>: sealed::WholeCheck<R, M> + Send + Sync + 'static {
    /// Checks `record`, appending failures to `out`.
    fn check_record(&self, record: &R, out: &mut ValidationErrors);
}

impl<R, F> sealed::WholeCheck<R, shape::Accumulate> for F where F: Fn(&R, &mut ValidationErrors) {}

impl<R, F> WholeCheck<R, shape::Accumulate> for F
where
    F: Fn(&R, &mut ValidationErrors) + Send + Sync + 'static,
{
    fn check_record(&self, record: &R, out: &mut ValidationErrors) {
        self(record, out);
    }
}

impl<R, F> sealed::WholeCheck<R, shape::Outcome> for F where F: Fn(&R) -> ValidationOutcome {}

impl<R, F> WholeCheck<R, shape::Outcome> for F
where
    F: Fn(&R) -> ValidationOutcome + Send + Sync + 'static,
{
    fn check_record(&self, record: &R, out: &mut ValidationErrors) {
        out.merge(self(record).into_errors());
    }
}
