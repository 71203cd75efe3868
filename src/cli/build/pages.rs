//! Per-entry pages, rendered in parallel.

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use super::shell;
use crate::config::SiteConfig;
use crate::content::Entry;
use crate::log;
use crate::logger::ProgressLine;
use crate::pipeline::{Pipeline, render_markdown};

/// Output file for a site-relative URL: `/a/b/` becomes `<output>/a/b/index.html`.
pub(super) fn output_path(output: &Path, url: &str) -> PathBuf {
    let rel = url.trim_matches('/');
    if rel.is_empty() {
        output.join("index.html")
    } else {
        output.join(rel).join("index.html")
    }
}

/// Write `html` to the page for `url`.
pub(super) fn write_page(output: &Path, url: &str, html: &str) -> Result<PathBuf> {
    let path = output_path(output, url);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Render every entry through the shared pipeline.
///
/// The first failure is logged; the rest of the batch is abandoned.
pub(super) fn render_entries(
    config: &SiteConfig,
    entries: &[Entry],
    pipeline: &Pipeline<'_>,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    let has_error = AtomicBool::new(false);

    entries.par_iter().try_for_each(|entry| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = render_entry(config, entry, pipeline) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", entry.source.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        if let Some(p) = progress {
            p.inc(entry.collection.as_str());
        }
        Ok(())
    })
}

fn render_entry(config: &SiteConfig, entry: &Entry, pipeline: &Pipeline<'_>) -> Result<PathBuf> {
    let content = render_markdown(&entry.body, pipeline);
    let body = shell::article(entry, &content);
    let description = entry.meta.description.as_deref().or(entry.meta.excerpt.as_deref());
    let html = shell::page(config, &entry.meta.title, description, &body);
    write_page(&config.build.output, &entry.permalink(), &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{Collection, EntryMeta};
    use crate::highlight::PlainHighlighter;
    use crate::utils::date::DateTimeUtc;
    use tempfile::TempDir;

    #[test]
    fn test_output_path() {
        let out = Path::new("public");
        assert_eq!(output_path(out, "/"), Path::new("public/index.html"));
        assert_eq!(output_path(out, "/hello/"), Path::new("public/hello/index.html"));
        assert_eq!(output_path(out, "/talks/a/b/"), Path::new("public/talks/a/b/index.html"));
    }

    #[test]
    fn test_render_entries_writes_permalinks() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = tmp.path().to_path_buf();

        let date = DateTimeUtc::from_ymd(2024, 1, 1);
        let entries = vec![
            Entry::new("one", Collection::Blog, EntryMeta::new("One", date)).with_body("Hi `x`"),
            Entry::new("two", Collection::Talks, EntryMeta::new("Two", date)).with_body("# Two"),
        ];
        let highlighter = PlainHighlighter;
        let pipeline = Pipeline::site(&config, &highlighter);
        render_entries(&config, &entries, &pipeline, None).unwrap();

        let one = fs::read_to_string(tmp.path().join("one/index.html")).unwrap();
        assert!(one.contains("<inline-code>x</inline-code>"));
        assert!(tmp.path().join("talks/two/index.html").is_file());
    }
}
