//! Conversion error types
//!
//! A failed conversion reports *what* went wrong ([`ConversionErrorCode`]),
//! *where* in the input it went wrong (a byte offset) and the input itself,
//! so callers can render precise diagnostics without re-parsing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR CODE
// ============================================================================

/// Category of a conversion failure.
///
/// Every code has a stable snake_case identifier returned by
/// [`as_str`](Self::as_str). Those identifiers travel into validation error
/// metadata and must not change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConversionErrorCode {
    /// Input was empty or contained only whitespace.
    EmptyInput,
    /// A character that cannot appear at this position of an integer.
    InvalidCharacter,
    /// Value is larger than the target type can represent.
    Overflow,
    /// Value is smaller than the target type can represent.
    Underflow,
    /// Input is not a finite floating-point number.
    InvalidFloat,
    /// Input is not one of the accepted boolean spellings.
    InvalidBool,
    /// Input is not exactly one character.
    InvalidChar,
}

impl ConversionErrorCode {
    /// Stable identifier of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidCharacter => "invalid_character",
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
            Self::InvalidFloat => "invalid_float",
            Self::InvalidBool => "invalid_bool",
            Self::InvalidChar => "invalid_char",
        }
    }
}

impl fmt::Display for ConversionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONVERSION ERROR
// ============================================================================

/// A failed string-to-value conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert {input:?}: {code} at byte {position}")]
pub struct ConversionError {
    /// What went wrong.
    pub code: ConversionErrorCode,
    /// Byte offset into `input` where the failure was detected.
    pub position: usize,
    /// The complete, untrimmed input.
    pub input: String,
}

impl ConversionError {
    /// Creates a new conversion error.
    pub fn new(code: ConversionErrorCode, position: usize, input: impl Into<String>) -> Self {
        Self {
            code,
            position,
            input: input.into(),
        }
    }

    /// Error for empty (or whitespace-only) input. Always at position 0.
    pub fn empty(input: impl Into<String>) -> Self {
        Self::new(ConversionErrorCode::EmptyInput, 0, input)
    }
}
