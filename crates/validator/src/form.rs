//! Form binding: raw input → record → validated output
//!
//! A form submission runs three stages:
//!
//! 1. **Bind**: a default record is filled from the raw input. How depends
//!    on which binding trait the record implements for that input type.
//! 2. **Validate**: the record's cached [`Schema`](crate::schema::Schema)
//!    runs; its errors are appended after any bind-stage errors.
//! 3. **Clean**: a record with no errors is converted into the form's
//!    output type through [`Clean`].
//!
//! Binding strategies, in order of diagnostic richness:
//!
//! | Trait | Input | On failure |
//! |-------|-------|------------|
//! | [`Bind<I>`] | any `I` | binder's own errors, or a generic `__form__` error if it gave none |
//! | [`TryBind<I>`] | any `I` | one generic `__form__` error |
//! | [`SetField`] | `[(K, V)]` pairs | `unknown or invalid field: <key>` on the first rejected pair |
//!
//! Exactly one strategy must apply to a given record and input type. A
//! record with none, or with more than one, fails to compile at the submit
//! call site.
//!
//! # Examples
//!
//! ```rust
//! use strata_validator::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Login {
//!     user: String,
//!     password: String,
//! }
//!
//! impl Model for Login {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!             .field("user", |l: &Login| &l.user, builder(|f, v| validate(f, v).required()))
//!             .field("password", |l: &Login| &l.password, builder(|f, v| validate(f, v).length_min(8)))
//!     }
//! }
//!
//! impl SetField for Login {
//!     fn set_field(&mut self, key: &str, value: &str) -> bool {
//!         match key {
//!             "user" => self.user = value.to_owned(),
//!             "password" => self.password = value.to_owned(),
//!             _ => return false,
//!         }
//!         true
//!     }
//! }
//!
//! impl Form for Login {}
//!
//! let login = Login::submit_pairs(&[("user", "ada"), ("password", "correct horse")]).unwrap();
//! assert_eq!(login.user, "ada");
//!
//! let errors = Login::submit_pairs(&[("user", "ada"), ("role", "admin")]).unwrap_err();
//! assert_eq!(errors.as_slice()[0].field, FORM_FIELD);
//! assert_eq!(errors.as_slice()[0].message, "unknown or invalid field: role");
//! ```
//!
//! Declaring an output type requires a matching [`Clean`] conversion:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! #[derive(Default)]
//! struct Draft {
//!     title: String,
//! }
//!
//! struct Article {
//!     title: String,
//! }
//!
//! impl Model for Draft {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!     }
//! }
//!
//! // No `impl Clean<Article> for Draft`.
//! impl Form<Article> for Draft {}
//! ```
//!
//! A record with two binding strategies for the same input is ambiguous:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Ticket {
//!     code: String,
//! }
//!
//! impl Model for Ticket {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!     }
//! }
//!
//! impl Bind<str> for Ticket {
//!     fn bind(&mut self, input: &str, _errors: &mut ValidationErrors) -> bool {
//!         self.code = input.to_owned();
//!         true
//!     }
//! }
//!
//! impl TryBind<str> for Ticket {
//!     fn try_bind(&mut self, input: &str) -> bool {
//!         self.code = input.to_owned();
//!         true
//!     }
//! }
//!
//! impl Form for Ticket {}
//!
//! let _ = Ticket::submit("A-1");
//! ```
//!
//! And a record with none cannot be submitted at all:
//!
//! ```rust,compile_fail
//! use strata_validator::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Ticket {
//!     code: String,
//! }
//!
//! impl Model for Ticket {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!     }
//! }
//!
//! impl Form for Ticket {}
//!
//! let _ = Ticket::submit("A-1");
//! ```

use std::any::type_name;

use crate::foundation::{ErrorKind, ValidationError, ValidationErrors};
use crate::schema::Model;

/// Pseudo-field under which binding failures are reported.
pub const FORM_FIELD: &str = "__form__";

/// Message of a generic binding failure.
pub const INVALID_INPUT: &str = "invalid input";

/// Result of a form submission.
pub type FormResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// CLEAN
// ============================================================================

/// Conversion of a validated record into a form's output type.
///
/// Every type cleans into itself. Implement `Clean<Output>` to produce a
/// different, trusted type from a validated record.
pub trait Clean<Output> {
    /// Converts the validated record.
    fn clean(self) -> Output;
}

impl<T> Clean<T> for T {
    fn clean(self) -> T {
        self
    }
}

// ============================================================================
// BINDING TRAITS
// ============================================================================

/// Binds input into a record, reporting detailed errors.
///
/// Return false when the input could not be bound. Errors pushed onto
/// `errors` are reported as-is; when none were pushed a generic
/// `__form__` / "invalid input" error is added.
pub trait Bind<I: ?Sized> {
    /// Fills `self` from `input`.
    fn bind(&mut self, input: &I, errors: &mut ValidationErrors) -> bool;
}

/// Binds input into a record with a plain success flag.
pub trait TryBind<I: ?Sized> {
    /// Fills `self` from `input`. Returns false on failure.
    fn try_bind(&mut self, input: &I) -> bool;
}

/// Sets one field from a textual key/value pair.
pub trait SetField {
    /// Sets the field named `key`. Returns false for an unknown key or a
    /// value that cannot be stored.
    fn set_field(&mut self, key: &str, value: &str) -> bool;
}

/// Marker types naming the binding strategies.
pub mod strategy {
    /// Through [`Bind`](super::Bind).
    #[derive(Debug)]
    pub enum Detailed {}

    /// Through [`TryBind`](super::TryBind).
    #[derive(Debug)]
    pub enum Flagged {}

    /// Through [`SetField`](super::SetField), one pair at a time.
    #[derive(Debug)]
    pub enum PerPair {}
}

mod sealed {
    pub trait Binder<I: ?Sized, S> {}
}

/// Selects the binding strategy of a record for an input type.
///
/// Implemented automatically; do not implement it directly.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound from `{I}`",
    label = "no binding strategy",
    note = "implement exactly one of `Bind<{I}>`, `TryBind<{I}>`, or `SetField` for key/value pairs"
)]
pub trait Binder<I: ?Sized, S>: sealed::Binder<I, S> {
    /// Fills `self` from `input`, adding errors on failure.
    fn bind_input(&mut self, input: &I, errors: &mut ValidationErrors) -> bool;
}

fn invalid_input() -> ValidationError {
    ValidationError::format(FORM_FIELD, INVALID_INPUT)
}

impl<R: Bind<I>, I: ?Sized> sealed::Binder<I, strategy::Detailed> for R {}

impl<R: Bind<I>, I: ?Sized> Binder<I, strategy::Detailed> for R {
    fn bind_input(&mut self, input: &I, errors: &mut ValidationErrors) -> bool {
        let before = errors.len();
        if self.bind(input, errors) {
            return true;
        }
        if errors.len() == before {
            errors.add(invalid_input());
        }
        false
    }
}

impl<R: TryBind<I>, I: ?Sized> sealed::Binder<I, strategy::Flagged> for R {}

impl<R: TryBind<I>, I: ?Sized> Binder<I, strategy::Flagged> for R {
    fn bind_input(&mut self, input: &I, errors: &mut ValidationErrors) -> bool {
        if self.try_bind(input) {
            return true;
        }
        errors.add(invalid_input());
        false
    }
}

impl<R, K, V> sealed::Binder<[(K, V)], strategy::PerPair> for R
where
    R: SetField,
    K: AsRef<str>,
    V: AsRef<str>,
{
}

impl<R, K, V> Binder<[(K, V)], strategy::PerPair> for R
where
    R: SetField,
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn bind_input(&mut self, input: &[(K, V)], errors: &mut ValidationErrors) -> bool {
        for (key, value) in input {
            let key = key.as_ref();
            if !self.set_field(key, value.as_ref()) {
                errors.add(
                    ValidationError::new(
                        FORM_FIELD,
                        ErrorKind::Format,
                        format!("unknown or invalid field: {key}"),
                    )
                    .with_meta("key", key),
                );
                return false;
            }
        }
        true
    }
}

// ============================================================================
// FORM
// ============================================================================

/// A record type that can be bound from raw input, validated and cleaned
/// into `Output`.
///
/// All methods are provided; `impl Form for MyRecord {}` is enough once
/// [`Model`], [`Default`], a binding trait and (for a distinct output)
/// [`Clean`] are in place.
pub trait Form<Output = Self>: Model + Default + Clean<Output> {
    /// Binds `input`, validates and cleans.
    ///
    /// On failure returns every error gathered: bind-stage errors when
    /// binding fails, otherwise the schema's errors.
    fn submit<I, S>(input: &I) -> FormResult<Output>
    where
        I: ?Sized,
        Self: Binder<I, S>,
    {
        run::<Self, Output, I, S>(input)
    }

    /// Binds a slice of key/value pairs, validates and cleans.
    fn submit_pairs<K, V, S>(pairs: &[(K, V)]) -> FormResult<Output>
    where
        Self: Binder<[(K, V)], S>,
    {
        run::<Self, Output, [(K, V)], S>(pairs)
    }
}

fn run<R, O, I, S>(input: &I) -> FormResult<O>
where
    R: Form<O> + Binder<I, S>,
    I: ?Sized,
{
    let mut errors = ValidationErrors::new();
    let mut record = R::default();

    if !<R as Binder<I, S>>::bind_input(&mut record, input, &mut errors) {
        tracing::debug!(
            form = type_name::<R>(),
            stage = "bind",
            errors = errors.len(),
            "form input rejected"
        );
        return Err(errors);
    }

    R::cached_schema().validate_into(&record, &mut errors);
    if !errors.is_empty() {
        tracing::debug!(
            form = type_name::<R>(),
            stage = "validate",
            errors = errors.len(),
            "form validation failed"
        );
        return Err(errors);
    }

    Ok(<R as Clean<O>>::clean(record))
}
