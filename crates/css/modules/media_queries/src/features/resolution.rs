//! Pixel density: the standard `resolution` feature plus the legacy
//! `device-pixel-ratio` spellings older engines still match on.
//!
//! Densities are dimensionless multipliers; only the `resolution` alternative
//! carries the `dppx` unit.
//!
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#resolution>

use crate::range::{RangeShape, RangeSpec, Sentinel};
use core::fmt::Display;

use super::{Bound, feature_expr};

pub const RESOLUTION: &str = "resolution";
pub const DEVICE_PIXEL_RATIO: &str = "device-pixel-ratio";
pub const RESOLUTION_UNIT: &str = "dppx";

/// Legacy spellings as `(before bound, after bound, value suffix)`.
///
/// Gecko wants the bound ahead of its prefix (`min--moz-...`), Presto wants a ratio.
const LEGACY_SPELLINGS: [(&str, &str, &str); 4] = [
    ("-webkit-", "-device-pixel-ratio", ""),
    ("", "--moz-device-pixel-ratio", ""),
    ("-o-", "-device-pixel-ratio", "/1"),
    ("", "-device-pixel-ratio", ""),
];

/// The five comma-separated alternatives for one side of a density range.
pub fn alternatives(bound: Bound, density: &impl Display) -> String {
    let mut parts: Vec<String> = LEGACY_SPELLINGS
        .iter()
        .map(|&(head, tail, suffix)| format!("({head}{bound}{tail}: {density}{suffix})"))
        .collect();
    parts.push(feature_expr(
        bound,
        RESOLUTION,
        &format_args!("{density}{RESOLUTION_UNIT}"),
    ));
    parts.join(", ")
}

/// Build the pixel-density clause.
///
/// A max-only density emits just the unprefixed ratio and `resolution`, both
/// carrying the maximum.
pub fn clause<T>(range: &RangeSpec<T>) -> Option<String>
where
    T: Display + Sentinel,
{
    let clause = match range.shape()? {
        RangeShape::AtLeast(lower) => alternatives(Bound::Min, lower),
        RangeShape::AtMost(upper) => format!(
            "{}, {}",
            feature_expr(Bound::Max, DEVICE_PIXEL_RATIO, upper),
            feature_expr(
                Bound::Max,
                RESOLUTION,
                &format_args!("{upper}{RESOLUTION_UNIT}")
            )
        ),
        RangeShape::Between(lower, upper) => format!(
            "{} and {}",
            alternatives(Bound::Min, lower),
            alternatives(Bound::Max, upper)
        ),
    };
    Some(clause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{FeatureArg, resolve};

    fn density(arg: impl Into<FeatureArg<f64>>) -> Option<String> {
        clause(&resolve(arg.into()))
    }

    #[test]
    fn min_only_has_five_alternatives() {
        assert_eq!(
            density(1.5).as_deref(),
            Some(
                "(-webkit-min-device-pixel-ratio: 1.5), (min--moz-device-pixel-ratio: 1.5), \
                 (-o-min-device-pixel-ratio: 1.5/1), (min-device-pixel-ratio: 1.5), \
                 (min-resolution: 1.5dppx)"
            )
        );
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        let text = density(2.0).unwrap_or_default();
        assert!(text.contains("(min-resolution: 2dppx)"));
        assert!(!text.contains("2.0"));
    }

    #[test]
    fn max_only_uses_the_maximum() {
        assert_eq!(
            density((0.0, 2.0)).as_deref(),
            Some("(max-device-pixel-ratio: 2), (max-resolution: 2dppx)")
        );
    }

    #[test]
    fn range_joins_both_sides() {
        let text = density([1.5, 3.0]).unwrap_or_default();
        let (min_side, max_side) = text.split_once(" and ").unwrap_or_default();
        assert_eq!(min_side, alternatives(Bound::Min, &1.5));
        assert_eq!(max_side, alternatives(Bound::Max, &3.0));
        assert_eq!(min_side.split(", ").count(), 5);
        assert_eq!(max_side.split(", ").count(), 5);
        assert!(max_side.contains("(max--moz-device-pixel-ratio: 3)"));
    }

    #[test]
    fn unset() {
        assert_eq!(density(0.0), None);
        assert_eq!(density([0.0, 0.0]), None);
    }
}
