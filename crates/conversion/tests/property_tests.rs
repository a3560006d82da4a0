//! Property-based tests for text conversion.

use proptest::prelude::*;
use strata_conversion::{ConversionErrorCode, parse};

// ============================================================================
// INTEGERS
// ============================================================================

proptest! {
    #[test]
    fn any_i64_parses_back_with_padding(n in any::<i64>(), left in 0usize..4, right in 0usize..4) {
        let text = format!("{}{n}{}", " ".repeat(left), "\t".repeat(right));
        prop_assert_eq!(parse::<i64>(&text).unwrap(), n);
    }

    #[test]
    fn out_of_range_reports_overflow_or_underflow(n in any::<i64>()) {
        let text = n.to_string();
        match parse::<i8>(&text) {
            Ok(v) => prop_assert_eq!(i64::from(v), n),
            Err(err) => {
                let expected = if n < 0 { ConversionErrorCode::Underflow } else { ConversionErrorCode::Overflow };
                prop_assert_eq!(err.code, expected);
                prop_assert!(err.position < text.len());
                prop_assert_eq!(err.input, text);
            }
        }
    }

    #[test]
    fn position_points_at_first_non_digit(digits in "[0-9]{1,6}", junk in "[a-z]") {
        let text = format!("{digits}{junk}");
        let err = parse::<u64>(&text).unwrap_err();
        prop_assert_eq!(err.code, ConversionErrorCode::InvalidCharacter);
        prop_assert_eq!(err.position, digits.len());
    }

    #[test]
    fn whitespace_only_is_empty_input(ws in "[ \t\n\r]{0,8}") {
        let err = parse::<u32>(&ws).unwrap_err();
        prop_assert_eq!(err.code, ConversionErrorCode::EmptyInput);
        prop_assert_eq!(err.position, 0);
    }
}

// ============================================================================
// OTHER TYPES
// ============================================================================

proptest! {
    #[test]
    fn strings_never_fail(s in ".*") {
        prop_assert_eq!(parse::<String>(&s).unwrap(), s);
    }

    #[test]
    fn finite_floats_parse(x in proptest::num::f64::NORMAL) {
        prop_assert_eq!(parse::<f64>(&x.to_string()).unwrap(), x);
    }
}
