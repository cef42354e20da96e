//! `width` media feature.
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#width>

use crate::range::{RangeSpec, Sentinel};
use core::fmt::Display;

use super::range_clause;

pub const WIDTH: &str = "width";

/// Build the width clause. There is no device-relative variant.
pub fn clause<T>(range: &RangeSpec<T>) -> Option<String>
where
    T: Display + Sentinel,
{
    range_clause(WIDTH, range)
}
