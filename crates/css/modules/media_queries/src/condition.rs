//! Joining feature clauses into one media condition.
//! Spec: <https://www.w3.org/TR/mediaqueries-4/#media-conditions>

use core::fmt::{self, Display};

/// Separator between clauses.
pub const AND: &str = " and ";

/// A compiled media condition, or "no condition" when every feature was unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Condition(Option<String>);

impl Condition {
    /// Fold clauses left to right with [`AND`], skipping absent ones.
    pub fn combine<I>(clauses: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut joined: Option<String> = None;
        for clause in clauses.into_iter().flatten() {
            if let Some(text) = joined.as_mut() {
                text.push_str(AND);
                text.push_str(&clause);
            } else {
                joined = Some(clause);
            }
        }
        Self(joined)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl FromIterator<Option<String>> for Condition {
    fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

/// Writes nothing for an empty condition.
impl Display for Condition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str().unwrap_or_default())
    }
}
