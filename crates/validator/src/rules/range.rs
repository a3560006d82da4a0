//! Ordered comparisons: `min`, `max`, `between`

use std::fmt::Display;

use super::messages;
use crate::foundation::{ErrorKind, Rule, ValidationError, ValidationErrors};

/// Flags values strictly below `bound`.
pub fn min<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::new(
        "min",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            if value < &bound {
                out.add(
                    ValidationError::new(field, ErrorKind::Min, messages::MIN)
                        .with_meta("min", bound.to_string())
                        .with_meta("got", value.to_string()),
                );
            }
        },
    )
}

/// Flags values strictly above `bound`.
pub fn max<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::new(
        "max",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            if value > &bound {
                out.add(
                    ValidationError::new(field, ErrorKind::Max, messages::MAX)
                        .with_meta("max", bound.to_string())
                        .with_meta("got", value.to_string()),
                );
            }
        },
    )
}

/// Flags values outside the inclusive range `[low, high]`.
pub fn between<T>(low: T, high: T) -> Rule<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Rule::new(
        "between",
        move |field: &str, value: &T, out: &mut ValidationErrors| {
            if value < &low || value > &high {
                out.add(
                    ValidationError::new(field, ErrorKind::Between, messages::BETWEEN)
                        .with_meta("min", low.to_string())
                        .with_meta("max", high.to_string())
                        .with_meta("got", value.to_string()),
                );
            }
        },
    )
}
