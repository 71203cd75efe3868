//! `[build]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::query::PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Content directory holding one folder per collection.
    pub content: PathBuf,
    /// Output directory.
    pub output: PathBuf,
    /// Entries per list page.
    pub page_size: usize,
    /// Include draft entries.
    pub drafts: bool,
    /// Remove the output directory before building.
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            page_size: PAGE_SIZE,
            drafts: false,
            clean: false,
        }
    }
}

impl BuildConfig {
    pub const PAGE_SIZE: FieldPath = FieldPath::new("build.page_size");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_size == 0 {
            diag.error_with_hint(
                Self::PAGE_SIZE,
                "page size must be at least 1",
                format!("the default is {PAGE_SIZE}"),
            );
        }
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.page_size, 8);
        assert!(!config.build.drafts);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = test_parse_config("[build]\npage_size = 0");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, BuildConfig::PAGE_SIZE);
    }
}
