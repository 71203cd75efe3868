//! `[code]` configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::highlight::DEFAULT_THEME;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    /// Syntect theme name.
    pub theme: String,
    /// Run the highlighting pass.
    pub highlight: bool,
    /// Extra language id → display name entries, e.g. `zig = "Zig"`.
    pub languages: BTreeMap<String, String>,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.into(),
            highlight: true,
            languages: BTreeMap::new(),
        }
    }
}
