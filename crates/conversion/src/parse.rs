//! The [`Parse`] trait and its implementations for primitive types
//!
//! Grammar summary:
//!
//! | Target | Accepted input |
//! |--------|----------------|
//! | integers | ASCII whitespace, optional `+`/`-`, ASCII digits, ASCII whitespace |
//! | floats | Rust float grammar after trimming; must be finite |
//! | `bool` | `true/false/1/0/yes/no/on/off`, case-insensitive, trimmed |
//! | `char` | exactly one Unicode scalar after trimming |
//! | `String` | anything, verbatim |
//!
//! Positions are byte offsets into the *original* input, so leading
//! whitespace is counted.

use crate::error::{ConversionError, ConversionErrorCode};

/// A type that can be produced from text.
pub trait Parse: Sized {
    /// Converts `input` into `Self`.
    fn parse(input: &str) -> Result<Self, ConversionError>;
}

/// Parses `input` into `T`.
///
/// ```rust
/// use strata_conversion::{parse, ConversionErrorCode};
///
/// assert_eq!(parse::<u8>(" 42 ").unwrap(), 42);
/// assert_eq!(parse::<u8>("256").unwrap_err().code, ConversionErrorCode::Overflow);
/// ```
pub fn parse<T: Parse>(input: &str) -> Result<T, ConversionError> {
    T::parse(input)
}

/// Splits off surrounding ASCII whitespace, returning the trimmed text and
/// the byte offset at which it starts.
fn trimmed(input: &str) -> (&str, usize) {
    let start = input.len() - input.trim_ascii_start().len();
    (input.trim_ascii(), start)
}

// ============================================================================
// INTEGERS
// ============================================================================

/// Checked decimal accumulation, implemented for every primitive integer.
trait Decimal: Copy {
    const ZERO: Self;
    const SIGNED: bool;

    fn push_digit(self, digit: u8) -> Option<Self>;
    fn push_negative_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! decimal {
    ($signed:literal => $($ty:ty),+ $(,)?) => {
        $(
            #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
            impl Decimal for $ty {
                const ZERO: Self = 0;
                const SIGNED: bool = $signed;

                #[inline]
                fn push_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_add(digit as $ty)
                }

                #[inline]
                fn push_negative_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_sub(digit as $ty)
                }
            }

            impl Parse for $ty {
                fn parse(input: &str) -> Result<Self, ConversionError> {
                    parse_integer(input)
                }
            }
        )+
    };
}

decimal!(true => i8, i16, i32, i64, i128, isize);
decimal!(false => u8, u16, u32, u64, u128, usize);

fn parse_integer<T: Decimal>(input: &str) -> Result<T, ConversionError> {
    let (text, start) = trimmed(input);
    if text.is_empty() {
        return Err(ConversionError::empty(input));
    }

    let bytes = text.as_bytes();
    let (negative, digits_from) = match bytes[0] {
        b'+' => (false, 1),
        b'-' if T::SIGNED => (true, 1),
        b'-' => {
            return Err(ConversionError::new(
                ConversionErrorCode::InvalidCharacter,
                start,
                input,
            ));
        }
        _ => (false, 0),
    };

    if digits_from == bytes.len() {
        return Err(ConversionError::new(
            ConversionErrorCode::InvalidCharacter,
            start + digits_from,
            input,
        ));
    }

    let mut acc = T::ZERO;
    for (offset, &byte) in bytes.iter().enumerate().skip(digits_from) {
        let position = start + offset;
        if !byte.is_ascii_digit() {
            return Err(ConversionError::new(
                ConversionErrorCode::InvalidCharacter,
                position,
                input,
            ));
        }
        let digit = byte - b'0';
        let next = if negative {
            acc.push_negative_digit(digit)
        } else {
            acc.push_digit(digit)
        };
        acc = match next {
            Some(value) => value,
            None => {
                let code = if negative {
                    ConversionErrorCode::Underflow
                } else {
                    ConversionErrorCode::Overflow
                };
                return Err(ConversionError::new(code, position, input));
            }
        };
    }

    Ok(acc)
}

// ============================================================================
// FLOATS
// ============================================================================

macro_rules! float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Parse for $ty {
                fn parse(input: &str) -> Result<Self, ConversionError> {
                    let (text, start) = trimmed(input);
                    if text.is_empty() {
                        return Err(ConversionError::empty(input));
                    }
                    match text.parse::<$ty>() {
                        Ok(value) if value.is_finite() => Ok(value),
                        _ => Err(ConversionError::new(
                            ConversionErrorCode::InvalidFloat,
                            start,
                            input,
                        )),
                    }
                }
            }
        )+
    };
}

float!(f32, f64);

// ============================================================================
// BOOL / CHAR / STRING
// ============================================================================

impl Parse for bool {
    fn parse(input: &str) -> Result<Self, ConversionError> {
        let (text, start) = trimmed(input);
        if text.is_empty() {
            return Err(ConversionError::empty(input));
        }
        const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];
        const FALSY: [&str; 4] = ["false", "0", "no", "off"];

        if TRUTHY.iter().any(|word| text.eq_ignore_ascii_case(word)) {
            Ok(true)
        } else if FALSY.iter().any(|word| text.eq_ignore_ascii_case(word)) {
            Ok(false)
        } else {
            Err(ConversionError::new(
                ConversionErrorCode::InvalidBool,
                start,
                input,
            ))
        }
    }
}

impl Parse for char {
    fn parse(input: &str) -> Result<Self, ConversionError> {
        let (text, start) = trimmed(input);
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ConversionError::empty(input)),
            (Some(c), None) => Ok(c),
            (Some(c), Some(_)) => Err(ConversionError::new(
                ConversionErrorCode::InvalidChar,
                start + c.len_utf8(),
                input,
            )),
        }
    }
}

impl Parse for String {
    fn parse(input: &str) -> Result<Self, ConversionError> {
        Ok(input.to_owned())
    }
}
