//! Default messages of the built-in rules.

/// [`required`](super::required) failure.
pub const REQUIRED: &str = "field is required";
/// [`min`](super::min) failure.
pub const MIN: &str = "value is below minimum";
/// [`max`](super::max) failure.
pub const MAX: &str = "value is above maximum";
/// [`between`](super::between) failure.
pub const BETWEEN: &str = "value is out of range";
/// [`length_min`](super::length_min) failure.
pub const LENGTH_MIN: &str = "length is below minimum";
/// [`length_max`](super::length_max) failure.
pub const LENGTH_MAX: &str = "length is above maximum";
/// [`in_set`](super::in_set) failure.
pub const IN_SET: &str = "value is not allowed";
/// [`email`](super::email) failure.
pub const EMAIL: &str = "invalid email format";
/// Text that could not be converted to the target type.
pub const PARSE: &str = "invalid value";
