//! Prelude module for convenient imports.
//!
//! Provides a single `use strata_validator::prelude::*;` import that brings
//! in the error model, the fluent builders and their vocabulary, schemas,
//! models and the form workflow.
//!
//! # Examples
//!
//! ```rust
//! use strata_validator::prelude::*;
//!
//! let outcome = validate("email", "").required().email().result();
//! assert_eq!(outcome.errors().len(), 1);
//! ```

// ============================================================================
// FOUNDATION: Errors, outcomes, rules
// ============================================================================

pub use crate::foundation::{
    ErrorKind, Rule, ValidationError, ValidationErrors, ValidationOutcome, apply_rules,
};

// ============================================================================
// RULES AND FLUENT BUILDERS
// ============================================================================

pub use crate::fluent::{
    ParsedValidator, RuleChain, RuleChainExt, Validator, validate, validate_parsed,
};
pub use crate::rules::{Presence, RulePack};

// ============================================================================
// SCHEMAS, MODELS, FORMS
// ============================================================================

pub use crate::form::{Bind, Clean, FORM_FIELD, Form, FormResult, SetField, TryBind};
pub use crate::schema::{Model, Schema, SchemaCache, builder, parsed_builder};

// ============================================================================
// CONVERSION
// ============================================================================

pub use strata_conversion::Parse;
