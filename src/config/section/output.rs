//! `[feed]`, `[sitemap]` and `[robots]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::Collection;

// ============================================================================
// [feed]
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    /// Output path relative to the output directory.
    pub path: PathBuf,
    /// Collection whose entries become feed items.
    pub collection: Collection,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".into(),
            collection: Collection::Blog,
        }
    }
}

impl FeedConfig {
    pub const ENABLE: FieldPath = FieldPath::new("feed.enable");
    pub const PATH: FieldPath = FieldPath::new("feed.path");
}

// ============================================================================
// [sitemap]
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

impl SitemapConfig {
    pub const PATH: FieldPath = FieldPath::new("sitemap.path");
}

// ============================================================================
// [robots]
// ============================================================================

/// One `User-agent` block of robots.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsRule {
    pub user_agent: String,
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub disallow: Vec<String>,
}

impl RobotsRule {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow: Vec::new(),
            disallow: Vec::new(),
        }
    }

    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub enable: bool,
    pub rules: Vec<RobotsRule>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            rules: vec![
                RobotsRule::new("Googlebot").disallow("/nogooglebot/"),
                RobotsRule::new("*").allow("/"),
            ],
        }
    }
}

impl RobotsConfig {
    pub const RULES: FieldPath = FieldPath::new("robots.rules");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.rules.iter().any(|r| r.user_agent.trim().is_empty()) {
            diag.error(Self::RULES, "every rule needs a non-empty `user_agent`");
        }
    }
}

/// Output file paths must stay inside the output directory.
pub(crate) fn validate_output_path(field: FieldPath, path: &std::path::Path, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "path must not be empty");
    } else if path.is_absolute() {
        diag.error_with_hint(
            field,
            format!("`{}` must be relative", path.display()),
            "paths are resolved against the output directory",
        );
    }
}
