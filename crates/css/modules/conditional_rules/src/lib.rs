//! CSS Conditional Rules Module Level 3 — emitting `@media` conditional group rules.
//! Spec: <https://www.w3.org/TR/css-conditional-3/#at-media>

#![forbid(unsafe_code)]

use core::fmt::{self, Display};
use css_media_queries::{Breakpoint, Condition, compile};
use log::debug;

/// Media type every generated rule is guarded by.
pub const MEDIA_TYPE: &str = "screen";

/// An `@media` rule wrapping an opaque block of style rules.
///
/// The block is written verbatim between the braces; it is never parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRule<B> {
    condition: Condition,
    block: B,
}

impl<B: Display> MediaRule<B> {
    /// Pair a compiled condition with the block it guards.
    pub const fn new(condition: Condition, block: B) -> Self {
        Self { condition, block }
    }

    /// The compiled condition; empty means a bare `screen` guard.
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The wrapped block, exactly as supplied.
    pub const fn block(&self) -> &B {
        &self.block
    }

    /// Media query list of the rule: `screen`, or `screen and <condition>`.
    pub fn prelude(&self) -> String {
        self.condition.as_str().map_or_else(
            || MEDIA_TYPE.to_owned(),
            |condition| format!("{MEDIA_TYPE} and {condition}"),
        )
    }
}

impl<B: Display> Display for MediaRule<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "@media {} {{\n{}\n}}", self.prelude(), self.block)
    }
}

/// Compile `breakpoint` and wrap `block` in the resulting `@media` rule.
pub fn media_rule<B: Display>(breakpoint: &Breakpoint, block: B) -> MediaRule<B> {
    let rule = MediaRule::new(compile(breakpoint), block);
    debug!(target: "css_conditional_rules", "@media {}", rule.prelude());
    rule
}
