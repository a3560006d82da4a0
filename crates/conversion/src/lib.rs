//! # strata-conversion
//!
//! Text-to-value conversion for primitive types with structured errors.
//!
//! Unlike [`str::parse`], every failure carries a stable
//! [`ConversionErrorCode`], the byte position of the offending character and
//! the original input. The validation layer turns these into field-level
//! diagnostics.
//!
//! ```rust
//! use strata_conversion::{parse, ConversionErrorCode};
//!
//! let err = parse::<i32>("12a").unwrap_err();
//! assert_eq!(err.code, ConversionErrorCode::InvalidCharacter);
//! assert_eq!(err.position, 2);
//!
//! assert!(parse::<bool>("Yes").unwrap());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod parse;

pub use error::{ConversionError, ConversionErrorCode};
pub use parse::{Parse, parse};
