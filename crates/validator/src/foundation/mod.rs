//! Core validation types
//!
//! - **Errors**: [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]
//! - **Outcome**: [`ValidationOutcome`]
//! - **Rules**: [`Rule`], [`apply_rules`], [`apply_rules_into`]
//!
//! Everything else in the crate is built from these pieces: fluent
//! validators hold lists of rules, schemas hold per-field checks that
//! append to one shared [`ValidationErrors`].

pub mod error;
pub mod outcome;
pub mod rule;

pub use error::{ErrorKind, UnknownErrorKind, ValidationError, ValidationErrors};
pub use outcome::ValidationOutcome;
pub use rule::{Rule, apply_rules, apply_rules_into};
