//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean or create the output directory
//! - **Load** - Read and filter every collection
//! - **Render** - Entry pages in parallel through one shared pipeline
//! - **Lists** - Paginated collection indexes, blog categories, talks schedule
//! - **Generate** - Feed and sitemap in parallel, then robots.txt

mod lists;
mod pages;
mod shell;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::common::{highlighter, load_entries};
use crate::config::SiteConfig;
use crate::content::{Collection, Entry};
use crate::generator::{build_feed, build_robots, build_sitemap};
use crate::logger::ProgressLine;
use crate::pipeline::Pipeline;
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub entries: usize,
    /// Site-relative URLs of the generated list pages.
    pub pages: Vec<String>,
}

/// Build the entire site into `config.build.output`.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    init_output(&config.build.output, config.build.clean)?;

    let collections = Collection::ALL
        .into_iter()
        .map(|c| load_entries(config, c).map(|entries| (c, entries)))
        .collect::<Result<Vec<_>>>()?;
    let entries: Vec<Entry> = collections.iter().flat_map(|(_, e)| e.iter().cloned()).collect();

    let highlighter = highlighter(config)?;
    let pipeline = Pipeline::site(config, highlighter.as_ref());
    debug!("build"; "passes: {}", pipeline.names().join(" → "));

    let progress = create_progress(&collections, quiet);
    pages::render_entries(config, &entries, &pipeline, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    let mut list_pages = Vec::new();
    for (collection, items) in &collections {
        list_pages.extend(lists::write_collection(config, *collection, items)?);
        if *collection == Collection::Blog {
            list_pages.extend(lists::write_categories(config, items)?);
        }
    }
    debug!("build"; "{}", plural_count(list_pages.len(), "list page"));

    let (feed, sitemap) = rayon::join(
        || build_feed(config, &entries),
        || build_sitemap(config, &entries, &list_pages),
    );
    feed?;
    sitemap?;
    build_robots(config)?;

    if !quiet {
        log_build_result(entries.len());
    }

    Ok(BuildReport {
        entries: entries.len(),
        pages: list_pages,
    })
}

/// Create progress display if not quiet
fn create_progress(collections: &[(Collection, Vec<Entry>)], quiet: bool) -> Option<ProgressLine> {
    if quiet {
        return None;
    }
    let counters: Vec<_> = collections.iter().map(|(c, e)| (c.as_str(), e.len())).collect();
    Some(ProgressLine::new(&counters))
}

/// Ensure the output directory exists, emptied first with `clean`.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn log_build_result(count: usize) {
    if count == 0 {
        log!("warn"; "output is empty, check the content directory for markdown files");
    } else {
        log!("build"; "done, {}", plural_count(count, "entry"));
    }
}
