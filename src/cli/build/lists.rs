//! Collection index pages: paginated lists, blog categories, the talks schedule.

use anyhow::Result;
use std::fmt::Write;

use super::pages::write_page;
use super::shell;
use crate::config::SiteConfig;
use crate::content::{Collection, Entry};
use crate::query::{PageWindow, by_category, categories, page_numbers, paginate, split_talks};
use crate::utils::html::{escape, escape_attr};
use crate::utils::slug::slugify;

/// URL of list page `n` below `base` (`/blog/`, `/blog/page/2/`, ...).
pub(super) fn page_url(base: &str, n: usize) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}page/{n}/")
    }
}

/// Index pages for one collection. Returns the URLs written.
pub(super) fn write_collection(config: &SiteConfig, collection: Collection, entries: &[Entry]) -> Result<Vec<String>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }
    let base = format!("/{collection}/");
    match collection {
        Collection::Talks => write_talks(config, &base, entries.to_vec()).map(|url| vec![url]),
        _ => {
            let items: Vec<&Entry> = entries.iter().collect();
            let title = title_case(collection.as_str());
            write_paginated(config, &base, &title, &items)
        }
    }
}

/// One paginated list per blog category under `/blog/category/<slug>/`.
pub(super) fn write_categories(config: &SiteConfig, entries: &[Entry]) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for category in categories(entries) {
        let slug = slugify(&category);
        if slug.is_empty() {
            continue;
        }
        let base = format!("/{}/category/{slug}/", Collection::Blog);
        let items = by_category(entries, &category);
        urls.extend(write_paginated(config, &base, &category, &items)?);
    }
    Ok(urls)
}

/// Every page of `items`, page 1 at `base` itself.
fn write_paginated(config: &SiteConfig, base: &str, title: &str, items: &[&Entry]) -> Result<Vec<String>> {
    let size = config.build.page_size;
    let output = &config.build.output;

    page_numbers(items.len(), size)
        .into_iter()
        .map(|n| {
            let window = paginate(items, size, n, false);
            let url = page_url(base, n);
            let body = list_body(title, base, &window);
            write_page(output, &url, &shell::page(config, title, None, &body))?;
            Ok(url)
        })
        .collect()
}

fn list_body(title: &str, base: &str, window: &PageWindow<'_, &Entry>) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>{}</h1>", escape(title));
    html.push_str("<ul class=\"entries\">\n");
    for entry in window.items {
        html.push_str(&shell::entry_link(entry));
    }
    html.push_str("</ul>\n");

    if window.total_pages > 1 {
        html.push_str("<nav class=\"pagination\">\n");
        if window.has_prev() {
            let prev = page_url(base, window.current_page - 1);
            let _ = writeln!(html, r#"<a rel="prev" href="{}">Newer</a>"#, escape_attr(&prev));
        }
        let _ = writeln!(html, "<span>{} / {}</span>", window.current_page, window.total_pages);
        if window.has_next() {
            let next = page_url(base, window.current_page + 1);
            let _ = writeln!(html, r#"<a rel="next" href="{}">Older</a>"#, escape_attr(&next));
        }
        html.push_str("</nav>\n");
    }
    html
}

/// Upcoming talks first, then past talks by year.
fn write_talks(config: &SiteConfig, base: &str, talks: Vec<Entry>) -> Result<String> {
    let schedule = split_talks(talks);
    let mut html = String::from("<h1>Talks</h1>\n");

    if !schedule.upcoming.is_empty() {
        html.push_str("<section class=\"upcoming\">\n<h2>Upcoming</h2>\n<ul>\n");
        for talk in &schedule.upcoming {
            html.push_str(&shell::entry_link(talk));
        }
        html.push_str("</ul>\n</section>\n");
    }
    for group in &schedule.past {
        let _ = writeln!(html, "<section class=\"year\">\n<h2>{}</h2>\n<ul>", group.year);
        for talk in &group.items {
            html.push_str(&shell::entry_link(talk));
        }
        html.push_str("</ul>\n</section>\n");
    }

    write_page(&config.build.output, base, &shell::page(config, "Talks", None, &html))?;
    Ok(base.to_string())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::EntryMeta;
    use crate::utils::date::DateTimeUtc;
    use std::fs;
    use tempfile::TempDir;

    fn setup(page_size: usize) -> (TempDir, SiteConfig) {
        let tmp = TempDir::new().unwrap();
        let mut config = test_parse_config(&format!("[build]\npage_size = {page_size}"));
        config.build.output = tmp.path().to_path_buf();
        (tmp, config)
    }

    fn post(slug: &str, year: u16, categories: &[&str]) -> Entry {
        let mut meta = EntryMeta::new(slug, DateTimeUtc::from_ymd(year, 1, 1));
        meta.categories = categories.iter().map(|c| c.to_string()).collect();
        Entry::new(slug, Collection::Blog, meta)
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("/blog/", 1), "/blog/");
        assert_eq!(page_url("/blog/", 3), "/blog/page/3/");
    }

    #[test]
    fn test_collection_pagination() {
        let (tmp, config) = setup(2);
        let posts: Vec<_> = (0..5).map(|i| post(&format!("p{i}"), 2024, &[])).collect();
        let urls = write_collection(&config, Collection::Blog, &posts).unwrap();
        assert_eq!(urls, vec!["/blog/", "/blog/page/2/", "/blog/page/3/"]);

        let last = fs::read_to_string(tmp.path().join("blog/page/3/index.html")).unwrap();
        assert!(last.contains(r#"href="/p4/""#));
        assert!(last.contains(r#"rel="prev" href="/blog/page/2/""#));
        assert!(!last.contains(r#"rel="next""#));
    }

    #[test]
    fn test_empty_collection_writes_nothing() {
        let (tmp, config) = setup(2);
        let urls = write_collection(&config, Collection::Generative, &[]).unwrap();
        assert!(urls.is_empty());
        assert!(!tmp.path().join("generative").exists());
    }

    #[test]
    fn test_categories() {
        let (tmp, config) = setup(8);
        let posts = vec![post("a", 2024, &["Rust Tips"]), post("b", 2024, &["Rust Tips", "Web"])];
        let urls = write_categories(&config, &posts).unwrap();
        assert_eq!(urls, vec!["/blog/category/rust-tips/", "/blog/category/web/"]);

        let web = fs::read_to_string(tmp.path().join("blog/category/web/index.html")).unwrap();
        assert!(web.contains(r#"href="/b/""#));
        assert!(!web.contains(r#"href="/a/""#));
    }

    #[test]
    fn test_talks_schedule() {
        let (tmp, config) = setup(8);
        let talk = |slug: &str, year: u16, upcoming: bool| {
            let mut meta = EntryMeta::new(slug, DateTimeUtc::from_ymd(year, 6, 1));
            meta.upcoming = upcoming;
            Entry::new(slug, Collection::Talks, meta)
        };
        let talks = vec![talk("old", 2022, false), talk("soon", 2026, true), talk("mid", 2023, false)];
        let urls = write_collection(&config, Collection::Talks, &talks).unwrap();
        assert_eq!(urls, vec!["/talks/"]);

        let html = fs::read_to_string(tmp.path().join("talks/index.html")).unwrap();
        let upcoming = html.find("Upcoming").unwrap();
        let y2023 = html.find("<h2>2023</h2>").unwrap();
        let y2022 = html.find("<h2>2022</h2>").unwrap();
        assert!(upcoming < y2023 && y2023 < y2022);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("blog"), "Blog");
        assert_eq!(title_case(""), "");
    }
}
