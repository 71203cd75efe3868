//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config key, e.g. `site.url`.
///
/// Sections declare their paths as constants so diagnostics and hints
/// always name real keys:
///
/// ```ignore
/// impl SiteInfoConfig {
///     pub const URL: FieldPath = FieldPath::new("site.url");
/// }
///
/// diag.error(SiteInfoConfig::URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The section part, `site` for `site.url`.
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(section, _)| section)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
