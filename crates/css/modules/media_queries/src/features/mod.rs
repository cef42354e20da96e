//! Clause generators for the supported media feature families.
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#mq-features>

pub mod aspect_ratio;
pub mod resolution;
pub mod width;

use crate::range::{RangeShape, RangeSpec, Sentinel};
use core::fmt::{self, Display};

/// The `min-` / `max-` prefix of a range feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    /// Prefix text without the trailing hyphen.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl Display for Bound {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// `(<bound>-<feature>: <value>)`
pub(crate) fn feature_expr(bound: Bound, feature: &str, value: &impl Display) -> String {
    format!("({bound}-{feature}: {value})")
}

/// Clause for a plain range feature with no vendor alternatives.
pub(crate) fn range_clause<T>(feature: &str, range: &RangeSpec<T>) -> Option<String>
where
    T: Display + Sentinel,
{
    let clause = match range.shape()? {
        RangeShape::AtLeast(lower) => feature_expr(Bound::Min, feature, lower),
        RangeShape::AtMost(upper) => feature_expr(Bound::Max, feature, upper),
        RangeShape::Between(lower, upper) => format!(
            "{} and {}",
            feature_expr(Bound::Min, feature, lower),
            feature_expr(Bound::Max, feature, upper)
        ),
    };
    Some(clause)
}
