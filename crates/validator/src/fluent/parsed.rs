//! Validation of raw text that must first be converted

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;
use strata_conversion::{ConversionError, Parse};

use super::chain::RuleChain;
use crate::foundation::{
    ErrorKind, Rule, ValidationError, ValidationErrors, ValidationOutcome, apply_rules_into,
};
use crate::rules::messages;

/// Turns a conversion failure into a [`ErrorKind::Format`] error.
///
/// Metadata: `conversion_code`, `position`, and `input` when the input was
/// not empty.
pub fn conversion_error_to_validation(
    field: &str,
    error: &ConversionError,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let converted = ValidationError::new(field, ErrorKind::Format, message)
        .with_meta("conversion_code", error.code.as_str())
        .with_meta("position", error.position.to_string());
    if error.input.is_empty() {
        converted
    } else {
        converted.with_meta("input", error.input.clone())
    }
}

/// Converts `input` and applies `rules` to the result.
///
/// A failed conversion yields exactly one error and no rule runs.
pub(crate) fn run_parsed<T: Parse>(
    field: &str,
    input: &str,
    rules: &[Rule<T>],
    parse_message: impl Into<Cow<'static, str>>,
    out: &mut ValidationErrors,
) -> bool {
    match T::parse(input) {
        Ok(value) => apply_rules_into(field, &value, rules, out),
        Err(error) => {
            out.add(conversion_error_to_validation(field, &error, parse_message));
            false
        }
    }
}

/// Rules for a value that arrives as text.
///
/// # Examples
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// let outcome = validate_parsed::<i32>("age", "abc").min(18).result();
///
/// let errors = outcome.errors().as_slice();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].code, ErrorKind::Format);
/// assert_eq!(errors[0].meta("conversion_code"), Some("invalid_character"));
/// assert_eq!(errors[0].meta("position"), Some("0"));
/// ```
pub struct ParsedValidator<'a, T> {
    field: &'a str,
    input: &'a str,
    rules: SmallVec<[Rule<T>; 4]>,
    parse_message: Option<Cow<'static, str>>,
}

impl<'a, T: Parse> ParsedValidator<'a, T> {
    /// Starts a validator for textual `input`, reported under `field`.
    pub fn new(field: &'a str, input: &'a str) -> Self {
        Self {
            field,
            input,
            rules: SmallVec::new(),
            parse_message: None,
        }
    }

    /// Sets the message reported when the input cannot be converted.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_parse_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.parse_message = Some(message.into());
        self
    }

    /// Message reported when the input cannot be converted.
    #[must_use]
    pub fn parse_message(&self) -> Cow<'static, str> {
        self.parse_message
            .clone()
            .unwrap_or(Cow::Borrowed(messages::PARSE))
    }

    /// Field name errors are reported under.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The raw text.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Converts the input without applying any rule.
    pub fn parse(&self) -> Result<T, ConversionError> {
        T::parse(self.input)
    }

    /// Converts and validates.
    ///
    /// A conversion failure uses [`parse_message`](Self::parse_message),
    /// "invalid value" unless overridden.
    pub fn result(&self) -> ValidationOutcome {
        self.result_with(self.parse_message())
    }

    /// Converts and validates, using `parse_message` for a conversion failure.
    pub fn result_with(&self, parse_message: impl Into<Cow<'static, str>>) -> ValidationOutcome {
        let mut errors = ValidationErrors::new();
        self.result_into(&mut errors, parse_message);
        errors.into()
    }

    /// Converts and validates, appending to `out`. Returns true if nothing was added.
    pub fn result_into(
        &self,
        out: &mut ValidationErrors,
        parse_message: impl Into<Cow<'static, str>>,
    ) -> bool {
        run_parsed(self.field, self.input, &self.rules, parse_message, out)
    }
}

impl<T> RuleChain<T> for ParsedValidator<'_, T> {
    fn push_rule(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    fn last_rule_mut(&mut self) -> Option<&mut Rule<T>> {
        self.rules.last_mut()
    }
}

impl<T> fmt::Debug for ParsedValidator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedValidator")
            .field("field", &self.field)
            .field("input", &self.input)
            .field("target", &std::any::type_name::<T>())
            .field("rules", &self.rules)
            .field("parse_message", &self.parse_message)
            .finish()
    }
}

/// Starts a validator that converts `input` to `T` before applying rules.
pub fn validate_parsed<'a, T: Parse>(field: &'a str, input: &'a str) -> ParsedValidator<'a, T> {
    ParsedValidator::new(field, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::RuleChainExt;
    use pretty_assertions::assert_eq;
    use strata_conversion::ConversionErrorCode;

    #[test]
    fn test_parse_failure_is_single_error() {
        let outcome = validate_parsed::<i32>("age", "abc")
            .min(18)
            .max(120)
            .result();
        let errors = outcome.errors().as_slice();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
        assert_eq!(errors[0].code, ErrorKind::Format);
        assert_eq!(errors[0].message, "invalid value");
        assert_eq!(errors[0].meta("conversion_code"), Some("invalid_character"));
        assert_eq!(errors[0].meta("position"), Some("0"));
        assert_eq!(errors[0].meta("input"), Some("abc"));
    }

    #[test]
    fn test_rules_run_on_converted_value() {
        let outcome = validate_parsed::<u32>("age", " 15 ").between(18, 120).result();
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.code, ErrorKind::Between);
        assert_eq!(error.meta("got"), Some("15"));
    }

    #[test]
    fn test_custom_parse_message() {
        let outcome = validate_parsed::<u8>("level", "300").result_with("level must be 0-255");
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.message, "level must be 0-255");
        assert_eq!(error.meta("conversion_code"), Some("overflow"));
        assert_eq!(error.meta("position"), Some("2"));
    }

    #[test]
    fn test_stored_parse_message() {
        let validator = validate_parsed::<i64>("count", "ten").with_parse_message("count must be a number");
        assert_eq!(validator.parse_message(), "count must be a number");
        let outcome = validator.result();
        assert_eq!(outcome.errors().as_slice()[0].message, "count must be a number");
    }

    #[test]
    fn test_empty_input_has_no_input_meta() {
        let outcome = validate_parsed::<f64>("ratio", "").result();
        let error = &outcome.errors().as_slice()[0];
        assert_eq!(error.meta("conversion_code"), Some("empty_input"));
        assert_eq!(error.meta("input"), None);
    }

    #[test]
    fn test_valid_input_passes() {
        let validator = validate_parsed::<bool>("accept", "yes").custom(|b: &bool| *b, "must accept");
        assert!(validator.result().ok());
        assert_eq!(validator.parse(), Ok(true));
    }

    #[test]
    fn test_conversion_mapping() {
        let error = ConversionError::new(ConversionErrorCode::InvalidFloat, 3, "1.2.3");
        let converted = conversion_error_to_validation("price", &error, "bad price");
        assert_eq!(converted.field, "price");
        assert_eq!(converted.message, "bad price");
        assert_eq!(converted.meta("conversion_code"), Some("invalid_float"));
        assert_eq!(converted.meta("position"), Some("3"));
        assert_eq!(converted.meta("input"), Some("1.2.3"));
    }
}
