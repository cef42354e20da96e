//! `aspect-ratio`, `device-aspect-ratio` and `orientation`.
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#aspect-ratio>

use crate::range::{FeatureArg, Token, resolve};
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::Deserialize;

use super::range_clause;

/// Viewport-relative ratio feature.
pub const ASPECT_RATIO: &str = "aspect-ratio";
/// Device-relative ratio feature (deprecated in Level 4, still matched by legacy engines).
pub const DEVICE_ASPECT_RATIO: &str = "device-aspect-ratio";

/// Value of the `orientation` feature.
///
/// Spec: <https://www.w3.org/TR/mediaqueries-4/#orientation>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Keyword text as written in a media query.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Matches orientation keywords ASCII case-insensitively, ignoring surrounding whitespace.
impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let keyword = text.trim();
        if keyword.eq_ignore_ascii_case("landscape") {
            Ok(Self::Landscape)
        } else if keyword.eq_ignore_ascii_case("portrait") {
            Ok(Self::Portrait)
        } else {
            Err(UnknownOrientation)
        }
    }
}

/// The text was not `landscape` or `portrait`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOrientation;

impl Display for UnknownOrientation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("expected `landscape` or `portrait`")
    }
}

/// Ratio input: an orientation keyword or a ratio range such as `16/9` or `["4/3", "16/9"]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "FeatureArg<Token>")]
pub enum RatioArg {
    Orientation(Orientation),
    Range(FeatureArg<Token>),
}

impl Default for RatioArg {
    fn default() -> Self {
        Self::Range(FeatureArg::default())
    }
}

impl From<Orientation> for RatioArg {
    fn from(orientation: Orientation) -> Self {
        Self::Orientation(orientation)
    }
}

/// A bare keyword selects orientation; anything else (including pairs) is a ratio range.
impl From<FeatureArg<Token>> for RatioArg {
    fn from(arg: FeatureArg<Token>) -> Self {
        if let FeatureArg::Scalar(token) = &arg
            && let Ok(orientation) = token.as_str().parse::<Orientation>()
        {
            return Self::Orientation(orientation);
        }
        Self::Range(arg)
    }
}

impl From<&str> for RatioArg {
    fn from(text: &str) -> Self {
        FeatureArg::from(text).into()
    }
}

impl From<String> for RatioArg {
    fn from(text: String) -> Self {
        FeatureArg::from(text).into()
    }
}

impl From<(&str, &str)> for RatioArg {
    fn from(pair: (&str, &str)) -> Self {
        Self::Range(pair.into())
    }
}

impl From<[&str; 2]> for RatioArg {
    fn from(pair: [&str; 2]) -> Self {
        Self::Range(pair.into())
    }
}

/// Feature name selected by the device flag.
pub const fn feature_name(device: bool) -> &'static str {
    if device { DEVICE_ASPECT_RATIO } else { ASPECT_RATIO }
}

/// Build the ratio clause. The device flag is ignored for orientation keywords.
pub fn clause(arg: &RatioArg, device: bool) -> Option<String> {
    match arg {
        RatioArg::Orientation(orientation) => Some(format!("(orientation: {orientation})")),
        RatioArg::Range(range) => range_clause(feature_name(device), &resolve(range.as_ref())),
    }
}
