//! Record schemas
//!
//! A [`Schema<R>`] is an ordered list of checks over a record type `R`.
//! Validation runs every check in declaration order against one shared
//! [`ValidationErrors`], so the resulting errors follow the order in which
//! fields and record checks were declared.
//!
//! Schemas are usually built once per record type through
//! [`Model::schema`] and reused via [`SchemaCache`].
//!
//! # Examples
//!
//! ```rust
//! use strata_validator::prelude::*;
//!
//! struct Signup {
//!     email: String,
//!     password: String,
//!     confirm: String,
//!     age: String,
//! }
//!
//! let schema = Schema::new()
//!     .field("email", |s: &Signup| &s.email, builder(|f, v| validate(f, v).required().email()))
//!     .field("password", |s: &Signup| &s.password, RulePack::new().required().length_min(8))
//!     .parsed(
//!         "age",
//!         |s: &Signup| s.age.as_str(),
//!         parsed_builder(|f, text| validate_parsed::<u32>(f, text).between(18, 120)),
//!     )
//!     .check(|s: &Signup, out: &mut ValidationErrors| {
//!         if s.password != s.confirm {
//!             out.push("confirm", ErrorKind::Custom, "passwords do not match");
//!         }
//!     });
//!
//! let signup = Signup {
//!     email: "a@b.c".into(),
//!     password: "long enough".into(),
//!     confirm: "different".into(),
//!     age: "30".into(),
//! };
//! let outcome = schema.validate(&signup);
//! assert_eq!(outcome.errors().fields(), ["confirm"]);
//! ```

pub mod cache;
pub mod source;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub use cache::{Model, SchemaCache};
pub use source::{
    Build, BuildParsed, FieldSource, ParsedSource, WholeCheck, builder, parsed_builder, shape,
};

use crate::foundation::{ValidationErrors, ValidationOutcome};

type CheckFn<R> = dyn Fn(&R, &mut ValidationErrors) + Send + Sync;

/// What a schema entry validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckKind {
    Field,
    Parsed,
    Record,
}

struct Check<R> {
    name: Cow<'static, str>,
    kind: CheckKind,
    run: Arc<CheckFn<R>>,
}

impl<R> Clone for Check<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            run: Arc::clone(&self.run),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered validation checks for records of type `R`.
///
/// Schemas are immutable once built and can be shared freely between
/// threads.
pub struct Schema<R> {
    checks: Vec<Check<R>>,
}

impl<R: 'static> Schema<R> {
    /// Creates an empty schema. An empty schema accepts every record.
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Declares a field check.
    ///
    /// `accessor` projects the field out of the record; `source` validates
    /// it. See [`FieldSource`] for the accepted sources.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V, S, M>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&R) -> &V + Send + Sync + 'static,
        source: S,
    ) -> Self
    where
        V: ?Sized + 'static,
        S: FieldSource<V, M>,
    {
        let name = name.into();
        let label = name.clone();
        self.push(
            name,
            CheckKind::Field,
            move |record: &R, out: &mut ValidationErrors| {
                source.check_field(&label, accessor(record), out);
            },
        )
    }

    /// Declares a check on a textual field that is converted before its
    /// rules run.
    ///
    /// See [`ParsedSource`] for the accepted sources.
    #[must_use = "builder methods must be chained or built"]
    pub fn parsed<S, M>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&R) -> &str + Send + Sync + 'static,
        source: S,
    ) -> Self
    where
        S: ParsedSource<M>,
    {
        let name = name.into();
        let label = name.clone();
        self.push(
            name,
            CheckKind::Parsed,
            move |record: &R, out: &mut ValidationErrors| {
                source.check_text(&label, accessor(record), out);
            },
        )
    }

    /// Declares a record-level check, typically a cross-field rule.
    ///
    /// See [`WholeCheck`] for the accepted shapes.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<C, M>(self, check: C) -> Self
    where
        C: WholeCheck<R, M>,
    {
        self.named_check("check", check)
    }

    /// Like [`check`](Self::check) with a name used in diagnostics.
    #[must_use = "builder methods must be chained or built"]
    pub fn named_check<C, M>(self, name: impl Into<Cow<'static, str>>, check: C) -> Self
    where
        C: WholeCheck<R, M>,
    {
        self.push(
            name.into(),
            CheckKind::Record,
            move |record: &R, out: &mut ValidationErrors| {
                check.check_record(record, out);
            },
        )
    }

    /// Appends every check of `other` after this schema's own.
    #[must_use = "builder methods must be chained or built"]
    pub fn extend(mut self, other: &Self) -> Self {
        self.checks.extend(other.checks.iter().cloned());
        self
    }

    fn push(
        mut self,
        name: Cow<'static, str>,
        kind: CheckKind,
        run: impl Fn(&R, &mut ValidationErrors) + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Check {
            name,
            kind,
            run: Arc::new(run),
        });
        self
    }
}

impl<R> Schema<R> {
    /// Number of checks, record checks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the schema has no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Names of the field and parsed-field checks, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|check| check.kind != CheckKind::Record)
            .map(|check| &*check.name)
            .collect()
    }

    /// Runs every check against `record`.
    pub fn validate(&self, record: &R) -> ValidationOutcome {
        let mut errors = ValidationErrors::new();
        self.validate_into(record, &mut errors);
        errors.into()
    }

    /// Runs every check, appending to `out`. Returns true if nothing was added.
    pub fn validate_into(&self, record: &R, out: &mut ValidationErrors) -> bool {
        let before = out.len();
        for check in &self.checks {
            let start = out.len();
            (check.run)(record, out);
            tracing::trace!(
                record = std::any::type_name::<R>(),
                check = %check.name,
                errors = out.len() - start,
                "schema check executed"
            );
        }
        out.len() == before
    }
}

impl<R: 'static> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Schema<R> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
        }
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("record", &std::any::type_name::<R>())
            .field(
                "checks",
                &self
                    .checks
                    .iter()
                    .map(|check| (check.kind, &*check.name))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::{RuleChainExt, validate, validate_parsed};
    use crate::foundation::{ErrorKind, ValidationError};
    use crate::rules::RulePack;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Account {
        owner: String,
        email: String,
        balance: String,
        limit: i64,
        spent: i64,
    }

    fn account() -> Account {
        Account {
            owner: "ada".into(),
            email: "ada@example.com".into(),
            balance: "100".into(),
            limit: 500,
            spent: 200,
        }
    }

    #[test]
    fn test_empty_schema_accepts_everything() {
        let schema = Schema::<Account>::new();
        assert!(schema.is_empty());
        assert!(schema.validate(&Account::default()).ok());
    }

    #[test]
    fn test_all_field_shapes() {
        let schema = Schema::new()
            .field(
                "owner",
                |a: &Account| &a.owner,
                |f: &str, v: &String| validate(f, v).required().result(),
            )
            .field(
                "email",
                |a: &Account| &a.email,
                builder(|f, v| validate(f, v).required().email()),
            )
            .field(
                "limit",
                |a: &Account| &a.limit,
                RulePack::new().min(0).max(1000),
            );

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.field_names(), ["owner", "email", "limit"]);
        assert!(schema.validate(&account()).ok());

        let broken = Account {
            owner: String::new(),
            email: "nope".into(),
            limit: 5000,
            ..account()
        };
        let outcome = schema.validate(&broken);
        let codes: Vec<(&str, ErrorKind)> = outcome
            .errors()
            .iter()
            .map(|e| (e.field.as_str(), e.code))
            .collect();
        assert_eq!(
            codes,
            [
                ("owner", ErrorKind::Required),
                ("email", ErrorKind::Format),
                ("limit", ErrorKind::Max),
            ]
        );
    }

    #[test]
    fn test_all_parsed_shapes() {
        let schema = Schema::new()
            .parsed(
                "balance",
                |a: &Account| a.balance.as_str(),
                |f: &str, text: &str| validate_parsed::<i64>(f, text).min(0).result(),
            )
            .parsed(
                "balance_builder",
                |a: &Account| a.balance.as_str(),
                parsed_builder(|f, text| {
                    validate_parsed::<u16>(f, text)
                        .with_parse_message("balance must be a small number")
                }),
            )
            .parsed(
                "balance_pack",
                |a: &Account| a.balance.as_str(),
                RulePack::<u8>::new()
                    .max(50)
                    .with_parse_message("balance must be a byte"),
            );

        assert!(!schema.validate(&account()).ok());

        let bad = Account {
            balance: "-5x".into(),
            ..account()
        };
        let outcome = schema.validate(&bad);
        let errors = outcome.errors().as_slice();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.code == ErrorKind::Format));
        assert_eq!(errors[1].message, "balance must be a small number");
        assert_eq!(errors[2].message, "balance must be a byte");
        assert_eq!(errors[0].meta("conversion_code"), Some("invalid_character"));
        assert_eq!(errors[0].meta("position"), Some("2"));
    }

    #[test]
    fn test_record_checks_in_declaration_order() {
        let schema = Schema::new()
            .check(|a: &Account| {
                if a.spent > a.limit {
                    ValidationError::custom("spent", "over limit").into()
                } else {
                    ValidationOutcome::success()
                }
            })
            .field(
                "owner",
                |a: &Account| &a.owner,
                builder(|f, v| validate(f, v).required()),
            )
            .named_check("owner_email", |a: &Account, out: &mut ValidationErrors| {
                if !a.email.starts_with(a.owner.as_str()) {
                    out.push("email", ErrorKind::Custom, "email must start with owner");
                }
            });

        assert_eq!(schema.field_names(), ["owner"]);
        let bad = Account {
            owner: String::new(),
            email: "x@y.z".into(),
            spent: 900,
            ..account()
        };
        // An empty owner is a prefix of every email.
        let fields: Vec<String> = schema
            .validate(&bad)
            .into_errors()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, ["spent", "owner"]);
    }

    #[test]
    fn test_validate_into_appends() {
        let schema = Schema::new().field(
            "owner",
            |a: &Account| &a.owner,
            builder(|f, v| validate(f, v).required()),
        );
        let mut errors = ValidationErrors::new();
        errors.push("earlier", ErrorKind::Custom, "kept");
        assert!(!schema.validate_into(&Account::default(), &mut errors));
        assert_eq!(errors.fields(), ["earlier", "owner"]);
    }

    #[test]
    fn test_extend_concatenates() {
        let base = Schema::new().field(
            "owner",
            |a: &Account| &a.owner,
            builder(|f, v| validate(f, v).required()),
        );
        let full = Schema::new()
            .field(
                "email",
                |a: &Account| &a.email,
                builder(|f, v| validate(f, v).email()),
            )
            .extend(&base);
        assert_eq!(full.field_names(), ["email", "owner"]);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_schema_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema<Account>>();
        assert_send_sync::<Schema<std::rc::Rc<u8>>>();
    }
}
