//! Fluent builders
//!
//! - [`validate`] starts a [`Validator`] over a typed value.
//! - [`validate_parsed`] starts a [`ParsedValidator`] over raw text.
//!
//! Both, together with [`RulePack`](crate::rules::RulePack), implement
//! [`RuleChain`] and therefore accept the [`RuleChainExt`] vocabulary.

pub mod chain;
pub mod parsed;
pub mod validator;

pub use chain::{RuleChain, RuleChainExt};
pub use parsed::{ParsedValidator, conversion_error_to_validation, validate_parsed};
pub use validator::{Validator, validate};

pub(crate) use parsed::run_parsed;
