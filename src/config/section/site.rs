//! `[site]` configuration.
//!
//! Basic site information used by the feed, sitemap and robots output.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    pub title: String,
    pub description: String,
    /// Absolute site URL, e.g. `https://example.com`.
    pub url: Option<String>,
    /// Language code (e.g., "en", "en-us").
    pub language: String,
    pub author: String,
    pub email: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            author: String::new(),
            email: String::new(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Parsed site URL, `None` when unset or invalid.
    pub fn base_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(|url| Url::parse(url).ok())
    }

    /// Absolute URL for a site-relative `path`.
    ///
    /// Without a configured URL the path is returned as is.
    pub fn absolute(&self, path: &str) -> String {
        match &self.url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
            None => path.to_string(),
        }
    }

    /// Validate site configuration.
    ///
    /// `url`, when set, must be an absolute http(s) URL with a host.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn site(url: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            url: Some(url.to_string()),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
        assert!(config.site.base_url().is_none());
    }

    #[test]
    fn test_absolute() {
        assert_eq!(site("https://a.dev/").absolute("/rss.xml"), "https://a.dev/rss.xml");
        assert_eq!(site("https://a.dev").absolute("post"), "https://a.dev/post");
        assert_eq!(SiteInfoConfig::default().absolute("/x/"), "/x/");
    }

    #[test]
    fn test_validate_url() {
        let mut diag = ConfigDiagnostics::new();
        site("https://example.com").validate(&mut diag);
        assert!(diag.is_empty());

        for bad in ["example.com", "ftp://example.com", "mailto:me@example.com"] {
            let mut diag = ConfigDiagnostics::new();
            site(bad).validate(&mut diag);
            assert!(diag.has_errors(), "{bad}");
        }
    }
}
