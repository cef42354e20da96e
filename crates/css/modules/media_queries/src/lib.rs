//! Media Queries Level 4 — compiling breakpoint parameters into media conditions.
//! Spec: <https://www.w3.org/TR/mediaqueries-4/>
//!
//! A [`Breakpoint`] names up to three feature constraints (aspect ratio or orientation,
//! viewport width, pixel density). [`compile`] turns it into a [`Condition`] such as
//! `(min-aspect-ratio: 2/1) and (min-width: 800px)`. Literals are passed through
//! verbatim: nothing is validated, so malformed input yields a condition that simply
//! never matches.

#![forbid(unsafe_code)]

pub mod condition;
pub mod features;
pub mod range;

pub use condition::Condition;
pub use features::aspect_ratio::{Orientation, RatioArg, UnknownOrientation};
pub use range::{FeatureArg, RangeShape, RangeSpec, Sentinel, Token, resolve};

use log::trace;
use serde::Deserialize;

/// Breakpoint parameters. Every field defaults independently to "unconstrained".
///
/// Deserializes from the short keys `r`, `w`, `pd` and `d` (long names are accepted
/// as aliases), e.g. `{"r": "16/9", "w": ["40em", "60em"], "pd": 2}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breakpoint {
    /// Aspect ratio range or orientation keyword.
    #[serde(rename = "r", alias = "ratio")]
    pub ratio: RatioArg,
    /// Viewport width range.
    #[serde(rename = "w", alias = "width")]
    pub width: FeatureArg<Token>,
    /// Pixel density range, as a plain multiplier.
    #[serde(rename = "pd", alias = "density")]
    pub density: FeatureArg<f64>,
    /// Use `device-aspect-ratio` instead of `aspect-ratio`.
    #[serde(rename = "d", alias = "device")]
    pub device: bool,
}

impl Breakpoint {
    #[must_use]
    pub fn ratio(mut self, ratio: impl Into<RatioArg>) -> Self {
        self.ratio = ratio.into();
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<FeatureArg<Token>>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn density(mut self, density: impl Into<FeatureArg<f64>>) -> Self {
        self.density = density.into();
        self
    }

    #[must_use]
    pub fn device(mut self, device: bool) -> Self {
        self.device = device;
        self
    }

    /// Compile these parameters. See [`compile`].
    #[inline]
    pub fn condition(&self) -> Condition {
        compile(self)
    }
}

/// Compile breakpoint parameters into a media condition.
///
/// Clauses are generated in ratio, width, density order and joined with `and`.
/// The result is empty when no feature is constrained.
pub fn compile(breakpoint: &Breakpoint) -> Condition {
    let condition = Condition::combine([
        features::aspect_ratio::clause(&breakpoint.ratio, breakpoint.device),
        features::width::clause(&resolve(breakpoint.width.as_ref())),
        features::resolution::clause(&resolve(breakpoint.density.as_ref())),
    ]);
    trace!(target: "css_media_queries", "compiled {breakpoint:?} -> {condition:?}");
    condition
}
