//! `vellum query`: one page of a collection as JSON.
//!
//! ```json
//! { "collection": "blog", "totalPages": 2, "currentPage": 1,
//!   "items": [{ "slug": "hello", "url": "/hello/", "data": { ... } }] }
//! ```

use anyhow::{Result, bail};
use serde::Serialize;

use super::args::QueryArgs;
use super::common::load_entries;
use crate::config::SiteConfig;
use crate::content::{Collection, Entry, EntryMeta};
use crate::query::{PageRequest, by_category, paginate};

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let entries = load_entries(config, args.collection)?;
    let output = query(args, config, &entries)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{formatted}");
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryOutput<'a> {
    collection: Collection,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    total_pages: usize,
    current_page: usize,
    items: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    slug: &'a str,
    url: String,
    data: &'a EntryMeta,
}

impl<'a> From<&'a Entry> for EntryView<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            slug: &entry.slug,
            url: entry.permalink(),
            data: &entry.meta,
        }
    }
}

/// Select the requested page. The out-of-range sentinel becomes an error.
fn query<'a>(args: &'a QueryArgs, config: &SiteConfig, entries: &'a [Entry]) -> Result<QueryOutput<'a>> {
    let selected: Vec<&Entry> = match &args.category {
        Some(category) => by_category(entries, category),
        None => entries.iter().collect(),
    };

    // No --page means the first page.
    let request = args.page.as_deref().map_or(PageRequest::from(1usize), PageRequest::from);
    let window = paginate(&selected, config.build.page_size, request, args.index);

    if !window.is_valid() {
        bail!(
            "page `{}` is out of range: {} has {} page(s)",
            args.page.as_deref().unwrap_or("1"),
            args.collection,
            window.total_pages
        );
    }

    Ok(QueryOutput {
        collection: args.collection,
        category: args.category.as_deref(),
        total_pages: window.total_pages,
        current_page: window.current_page,
        items: window.items.iter().map(|e| EntryView::from(*e)).collect(),
    })
}
