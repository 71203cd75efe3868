//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{Collection, Entry, load_collection};
use crate::debug;
use crate::highlight::{Highlighter, PlainHighlighter, SyntectHighlighter};
use crate::query::{sort_by_recency, sorted_published};

/// The highlighter the config asks for.
///
/// Built once per command and shared by every render.
pub fn highlighter(config: &SiteConfig) -> Result<Box<dyn Highlighter>> {
    if !config.code.highlight {
        return Ok(Box::new(PlainHighlighter));
    }
    let highlighter = SyntectHighlighter::new(&config.code.theme)?;
    debug!("highlight"; "using theme {}", config.code.theme);
    Ok(Box::new(highlighter))
}

/// Load a collection, drop drafts unless configured otherwise, newest first.
pub fn load_entries(config: &SiteConfig, collection: Collection) -> Result<Vec<Entry>> {
    let entries = load_collection(&config.build.content, collection)
        .with_context(|| format!("Failed to load `{collection}` entries"))?;
    let total = entries.len();

    let entries = if config.build.drafts {
        let mut entries = entries;
        sort_by_recency(&mut entries);
        entries
    } else {
        sorted_published(entries)
    };

    debug!("content"; "{}: {} of {} entries", collection, entries.len(), total);
    Ok(entries)
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(drafts: bool) -> (TempDir, SiteConfig) {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/a.md", "---\ntitle: A\ndescription: a\npubDate: 2024-01-01\n---\n");
        write(
            tmp.path(),
            "blog/b.md",
            "---\ntitle: B\ndescription: b\npubDate: 2024-03-01\nstatus: draft\n---\n",
        );
        write(tmp.path(), "blog/c.md", "---\ntitle: C\ndescription: c\npubDate: 2024-02-01\n---\n");

        let mut config = test_parse_config("");
        config.build.content = tmp.path().to_path_buf();
        config.build.drafts = drafts;
        (tmp, config)
    }

    #[test]
    fn test_load_entries_published_sorted() {
        let (_tmp, config) = site(false);
        let entries = load_entries(&config, Collection::Blog).unwrap();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a"]);
    }

    #[test]
    fn test_load_entries_with_drafts() {
        let (_tmp, config) = site(true);
        let entries = load_entries(&config, Collection::Blog).unwrap();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_plain_highlighter_when_disabled() {
        let config = test_parse_config("[code]\nhighlight = false");
        let lines = highlighter(&config).unwrap().highlight("a\nb", None);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let config = test_parse_config("[code]\ntheme = \"no-such-theme\"");
        assert!(highlighter(&config).is_err());
    }
}
