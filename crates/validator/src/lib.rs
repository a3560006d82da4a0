//! # strata-validator
//!
//! Declarative data validation with accumulated, structured field errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_validator::prelude::*;
//!
//! let age = 17;
//! let outcome = validate("age", &age).min(18).result();
//! assert!(!outcome.ok());
//!
//! let outcome = validate_parsed::<i32>("age", "abc").min(18).result();
//! assert_eq!(outcome.errors().as_slice()[0].meta("conversion_code"), Some("invalid_character"));
//! ```
//!
//! ## Layers
//!
//! - [`foundation`] holds [`ErrorKind`](foundation::ErrorKind),
//!   [`ValidationError`](foundation::ValidationError),
//!   [`ValidationErrors`](foundation::ValidationErrors),
//!   [`ValidationOutcome`](foundation::ValidationOutcome) and
//!   [`Rule`](foundation::Rule).
//! - [`rules`] has the built-in rule factories and [`RulePack`](rules::RulePack).
//! - [`fluent`] has the [`validate`](fluent::validate) and
//!   [`validate_parsed`](fluent::validate_parsed) builders.
//! - [`schema`] has the per-record [`Schema`](schema::Schema), the
//!   [`Model`](schema::Model) trait and the process-wide
//!   [`SchemaCache`](schema::SchemaCache).
//! - [`form`] binds raw input into a record, validates and cleans it.
//!
//! Validation never aborts early: every rule runs and every failure is
//! reported, in declaration order.
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` on the error model and
//!   [`ValidationErrors::to_json_value`](foundation::ValidationErrors::to_json_value).

// Field and record closures are stored behind `Arc<dyn Fn(..)>`.
#![allow(clippy::type_complexity)]

pub mod fluent;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod schema;

pub use strata_conversion as conversion;
