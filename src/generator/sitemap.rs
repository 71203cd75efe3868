//! Sitemap generation.
//!
//! Lists every rendered entry and list page for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/hello/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::{display_name, write_output};
use crate::config::SiteConfig;
use crate::content::Entry;
use crate::log;
use crate::query::Publishable;
use crate::utils::html::escape_attr;
use anyhow::Result;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
///
/// `entries` are the rendered entries; `pages` are extra site-relative URLs
/// such as list and category pages.
pub fn build_sitemap(config: &SiteConfig, entries: &[Entry], pages: &[String]) -> Result<Option<PathBuf>> {
    if !config.sitemap.enable {
        return Ok(None);
    }

    let xml = Sitemap::build(config, entries, pages).into_xml();
    let path = write_output(&config.build.output, &config.sitemap.path, &xml)?;

    log!("sitemap"; "{}", display_name(&path));
    Ok(Some(path))
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, entries: &[Entry], pages: &[String]) -> Self {
        let pages = pages.iter().map(|page| UrlEntry {
            loc: config.site.absolute(page),
            lastmod: None,
        });

        let entries = entries.iter().map(|entry| UrlEntry {
            loc: config.site.absolute(&entry.permalink()),
            lastmod: Some(
                entry
                    .updated_date()
                    .unwrap_or_else(|| entry.pub_date())
                    .to_ymd(),
            ),
        });

        Self {
            urls: pages.chain(entries).collect(),
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_attr(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{Collection, EntryMeta};
    use crate::utils::date::DateTimeUtc;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        test_parse_config("[site]\nurl = \"https://example.com\"")
    }

    fn entry(slug: &str, collection: Collection) -> Entry {
        let mut meta = EntryMeta::new(slug, DateTimeUtc::from_ymd(2025, 1, 1));
        meta.updated_date = Some(DateTimeUtc::from_ymd(2025, 2, 3));
        Entry::new(slug, collection, meta)
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap { urls: vec![] }.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_entries_and_pages() {
        let entries = vec![entry("hello", Collection::Blog), entry("flow", Collection::Generative)];
        let pages = vec!["/".to_string(), "/blog/page/2/".to_string()];
        let xml = Sitemap::build(&config(), &entries, &pages).into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/page/2/</loc>"));
        assert!(xml.contains("<loc>https://example.com/hello/</loc>"));
        assert!(xml.contains("<loc>https://example.com/generative/flow/</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-02-03</lastmod>").count(), 2);
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[test]
    fn test_sitemap_escapes_loc() {
        let pages = vec!["/search?q=a&b".to_string()];
        let xml = Sitemap::build(&config(), &[], &pages).into_xml();
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b</loc>"));
    }

    #[test]
    fn test_build_sitemap_disabled() {
        let config = test_parse_config("[sitemap]\nenable = false");
        assert!(build_sitemap(&config, &[], &[]).unwrap().is_none());
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let tmp = TempDir::new().unwrap();
        let mut config = config();
        config.build.output = tmp.path().to_path_buf();
        let path = build_sitemap(&config, &[entry("a", Collection::Talks)], &[]).unwrap().unwrap();
        assert!(std::fs::read_to_string(path).unwrap().contains("/talks/a/"));
    }
}
