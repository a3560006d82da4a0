//! Built-in rule factories
//!
//! Each factory returns a [`Rule`](crate::foundation::Rule) that appends at
//! most one error per application:
//!
//! | Factory | Code | Metadata |
//! |---------|------|----------|
//! | [`required`] | `required` | |
//! | [`min`] | `min` | `min`, `got` |
//! | [`max`] | `max` | `max`, `got` |
//! | [`between`] | `between` | `min`, `max`, `got` |
//! | [`length_min`] | `length_min` | `min`, `got` |
//! | [`length_max`] | `length_max` | `max`, `got` |
//! | [`in_set`] | `in_set` | `got` |
//! | [`email`] | `format` | `expected` |
//! | [`custom`] | `custom` | |
//!
//! Emptiness belongs to [`required`]: [`email`], [`in_set`] and
//! [`length_min`] accept empty text so an optional field that was left blank
//! yields no error, and a required one yields exactly one.

pub mod custom;
pub mod email;
pub mod length;
pub mod membership;
pub mod messages;
pub mod pack;
pub mod presence;
pub mod range;

pub use custom::custom;
pub use email::{email, looks_like_email};
pub use length::{length_max, length_min};
pub use membership::in_set;
pub use pack::RulePack;
pub use presence::{Presence, required};
pub use range::{between, max, min};
