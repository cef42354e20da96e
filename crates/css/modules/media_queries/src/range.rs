//! Range arguments shared by every range-capable media feature.
//!
//! A feature is constrained either by a bare minimum (`"800px"`) or by an ordered
//! `[minimum, maximum]` pair. A zero or empty value in either position leaves that
//! bound unconstrained.
//!
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#mq-min-max>

use core::fmt::{self, Display};
use serde::Deserialize;

/// Detects the zero/empty value that means "this bound is unconstrained".
pub trait Sentinel {
    /// Whether this value leaves its bound unconstrained.
    fn is_unset(&self) -> bool;
}

impl Sentinel for f64 {
    #[inline]
    fn is_unset(&self) -> bool {
        *self == 0.0
    }
}

impl Sentinel for str {
    #[inline]
    fn is_unset(&self) -> bool {
        let trimmed = self.trim();
        trimmed.is_empty() || trimmed == "0"
    }
}

impl<T: Sentinel + ?Sized> Sentinel for &T {
    #[inline]
    fn is_unset(&self) -> bool {
        (**self).is_unset()
    }
}

/// An opaque CSS literal such as `800px` or `16/9`.
///
/// Tokens are never parsed or validated; they are written into the condition verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawToken")]
pub struct Token(String);

impl Token {
    /// Wrap a literal without inspecting it.
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The literal text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Sentinel for Token {
    #[inline]
    fn is_unset(&self) -> bool {
        self.0.is_unset()
    }
}

impl Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for Token {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    #[inline]
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Configuration files may spell the sentinel as a bare `0`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Number(f64),
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Text(text) => Self(text),
            RawToken::Number(number) => Self(number.to_string()),
        }
    }
}

/// The positional argument accepted for a range-capable feature.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawArg<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum FeatureArg<T> {
    /// A bare value, read as the minimum.
    Scalar(T),
    /// An ordered `(minimum, maximum)` pair.
    Pair(T, T),
}

impl<T> FeatureArg<T> {
    /// Borrow the argument without cloning its literals.
    #[inline]
    pub const fn as_ref(&self) -> FeatureArg<&T> {
        match self {
            Self::Scalar(value) => FeatureArg::Scalar(value),
            Self::Pair(lower, upper) => FeatureArg::Pair(lower, upper),
        }
    }
}

impl<T: Sentinel> FeatureArg<T> {
    /// Normalize into an explicit minimum and optional maximum.
    #[inline]
    pub fn resolve(self) -> RangeSpec<T> {
        resolve(self)
    }
}

impl<T: Default> Default for FeatureArg<T> {
    fn default() -> Self {
        Self::Scalar(T::default())
    }
}

impl From<&str> for FeatureArg<Token> {
    fn from(text: &str) -> Self {
        Self::Scalar(text.into())
    }
}

impl From<String> for FeatureArg<Token> {
    fn from(text: String) -> Self {
        Self::Scalar(text.into())
    }
}

impl From<Token> for FeatureArg<Token> {
    fn from(token: Token) -> Self {
        Self::Scalar(token)
    }
}

impl From<(&str, &str)> for FeatureArg<Token> {
    fn from((lower, upper): (&str, &str)) -> Self {
        Self::Pair(lower.into(), upper.into())
    }
}

impl From<[&str; 2]> for FeatureArg<Token> {
    fn from([lower, upper]: [&str; 2]) -> Self {
        Self::Pair(lower.into(), upper.into())
    }
}

impl From<f64> for FeatureArg<f64> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<(f64, f64)> for FeatureArg<f64> {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::Pair(lower, upper)
    }
}

impl From<[f64; 2]> for FeatureArg<f64> {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self::Pair(lower, upper)
    }
}

/// Wire shape: a scalar or a list of one or two values.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArg<T> {
    Scalar(T),
    List(Vec<T>),
}

impl<T> TryFrom<RawArg<T>> for FeatureArg<T> {
    type Error = String;

    fn try_from(raw: RawArg<T>) -> Result<Self, Self::Error> {
        match raw {
            RawArg::Scalar(value) => Ok(Self::Scalar(value)),
            RawArg::List(values) => {
                let count = values.len();
                let mut items = values.into_iter();
                match (items.next(), items.next(), items.next()) {
                    (Some(value), None, None) => Ok(Self::Scalar(value)),
                    (Some(lower), Some(upper), None) => Ok(Self::Pair(lower, upper)),
                    _ => Err(format!(
                        "expected a value or a [min, max] pair, found a list of {count}"
                    )),
                }
            }
        }
    }
}

/// A resolved range: `min` may still hold the sentinel, `max` is `None` when unconstrained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSpec<T> {
    /// Lower bound, or the sentinel when only an upper bound applies.
    pub min: T,
    /// Upper bound, if one was supplied.
    pub max: Option<T>,
}

/// Which bounds of a range actually constrain the feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeShape<T> {
    /// Only a minimum.
    AtLeast(T),
    /// Only a maximum.
    AtMost(T),
    /// Minimum and maximum, in that order.
    Between(T, T),
}

impl<T: Sentinel> RangeSpec<T> {
    /// Classify the range. `None` means the feature contributes no clause.
    pub fn shape(&self) -> Option<RangeShape<&T>> {
        let lower = (!self.min.is_unset()).then_some(&self.min);
        let upper = self.max.as_ref().filter(|bound| !bound.is_unset());
        match (lower, upper) {
            (None, None) => None,
            (Some(lower_bound), None) => Some(RangeShape::AtLeast(lower_bound)),
            (None, Some(upper_bound)) => Some(RangeShape::AtMost(upper_bound)),
            (Some(lower_bound), Some(upper_bound)) => {
                Some(RangeShape::Between(lower_bound, upper_bound))
            }
        }
    }
}

impl<T: Sentinel> From<FeatureArg<T>> for RangeSpec<T> {
    fn from(arg: FeatureArg<T>) -> Self {
        resolve(arg)
    }
}

/// Normalize a positional argument: the first element is always the minimum,
/// the second (when present and not the sentinel) is the maximum.
///
/// Bounds are not ordered or checked; `min > max` passes through as written.
pub fn resolve<T: Sentinel>(arg: FeatureArg<T>) -> RangeSpec<T> {
    match arg {
        FeatureArg::Scalar(min) => RangeSpec { min, max: None },
        FeatureArg::Pair(min, upper) => RangeSpec {
            min,
            max: (!upper.is_unset()).then_some(upper),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_min_only() {
        let range = resolve(FeatureArg::from("800px"));
        assert_eq!(range.min, Token::new("800px"));
        assert_eq!(range.max, None);
        assert_eq!(range.shape(), Some(RangeShape::AtLeast(&Token::new("800px"))));
    }

    #[test]
    fn zero_min_with_max_is_max_only() {
        let range = resolve(FeatureArg::from(("0", "1/1")));
        assert_eq!(range.shape(), Some(RangeShape::AtMost(&Token::new("1/1"))));
    }

    #[test]
    fn zero_max_is_dropped() {
        let range = resolve(FeatureArg::from([1.5, 0.0]));
        assert_eq!(range.max, None);
        assert_eq!(range.shape(), Some(RangeShape::AtLeast(&1.5)));
    }

    #[test]
    fn unset_everywhere_has_no_shape() {
        assert_eq!(resolve(FeatureArg::<Token>::default()).shape(), None);
        assert_eq!(resolve(FeatureArg::from(("", "0"))).shape(), None);
        assert_eq!(resolve(FeatureArg::from(0.0)).shape(), None);
    }

    #[test]
    fn inverted_bounds_pass_through() {
        let range = resolve(FeatureArg::from((2.0, 1.0)));
        assert_eq!(range.shape(), Some(RangeShape::Between(&2.0, &1.0)));
    }

    #[test]
    fn borrowed_resolution_matches_owned() {
        let arg = FeatureArg::from(["4/3", "16/9"]);
        let borrowed = resolve(arg.as_ref());
        assert_eq!(borrowed.min, &Token::new("4/3"));
        assert_eq!(borrowed.max, Some(&Token::new("16/9")));
        assert_eq!(arg.resolve().max, Some(Token::new("16/9")));
    }
}
