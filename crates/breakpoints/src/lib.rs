//! Named breakpoint presets.
//!
//! A preset table maps names to [`Breakpoint`] parameters and is loaded from JSON:
//!
//! ```json
//! {
//!     "phone": { "w": [0, "599px"] },
//!     "tablet": { "w": ["600px", "1023px"], "r": "portrait" },
//!     "retina": { "pd": 2 }
//! }
//! ```
//!
//! Compilation itself never fails; only loading a table or looking up a name can.

use anyhow::{Context as _, Result, anyhow};
use css_conditional_rules::media_rule;
use css_media_queries::{Breakpoint, Condition};
use log::debug;
use serde::Deserialize;
use serde_json::from_str;
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

/// Breakpoint presets keyed by name, iterated in name order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    presets: BTreeMap<String, Breakpoint>,
}

impl BreakpointTable {
    /// Parse a table from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not a JSON object of breakpoint parameters.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let table: Self = from_str(text).context("invalid breakpoint preset table")?;
        debug!(target: "breakpoints", "loaded {} breakpoint presets", table.presets.len());
        Ok(table)
    }

    /// Read and parse a table from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("failed to read presets from {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, breakpoint: Breakpoint) {
        self.presets.insert(name.into(), breakpoint);
    }

    /// Look up a preset by name.
    ///
    /// # Errors
    /// Returns an error naming the preset when it is not in the table.
    pub fn get(&self, name: &str) -> Result<&Breakpoint> {
        self.presets
            .get(name)
            .ok_or_else(|| anyhow!("unknown breakpoint preset '{name}'"))
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of presets in the table.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the table holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Compiled condition of a preset.
    ///
    /// # Errors
    /// Returns an error when the preset is unknown.
    pub fn condition(&self, name: &str) -> Result<Condition> {
        Ok(self.get(name)?.condition())
    }

    /// Wrap `block` in the `@media` rule of a preset.
    ///
    /// # Errors
    /// Returns an error when the preset is unknown.
    pub fn render(&self, name: &str, block: &str) -> Result<String> {
        Ok(media_rule(self.get(name)?, block).to_string())
    }
}

impl FromIterator<(String, Breakpoint)> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = (String, Breakpoint)>>(iter: I) -> Self {
        Self {
            presets: iter.into_iter().collect(),
        }
    }
}
