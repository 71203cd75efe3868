//! Minimal HTML document around rendered fragments.

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::Entry;
use crate::utils::html::{escape, escape_attr};

/// Wrap `body` in a full HTML document.
pub(super) fn page(config: &SiteConfig, title: &str, description: Option<&str>, body: &str) -> String {
    let site = &config.site;
    let full_title = if title.is_empty() || title == site.title {
        site.title.clone()
    } else {
        format!("{title} | {}", site.title)
    };
    let description = description.unwrap_or(&site.description);

    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!doctype html>\n");
    let _ = writeln!(html, r#"<html lang="{}">"#, escape_attr(&site.language));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    html.push('\n');
    let _ = writeln!(html, "<title>{}</title>", escape(&full_title));
    if !description.is_empty() {
        let _ = writeln!(html, r#"<meta name="description" content="{}">"#, escape_attr(description));
    }
    if config.feed_enabled() {
        let _ = writeln!(
            html,
            r#"<link rel="alternate" type="application/rss+xml" title="{}" href="{}">"#,
            escape_attr(&site.title),
            escape_attr(&site.absolute(&format!("/{}", config.feed.path.display())))
        );
    }
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Article header and body for one entry.
pub(super) fn article(entry: &Entry, content: &str) -> String {
    let meta = &entry.meta;
    let mut html = String::with_capacity(content.len() + 256);
    html.push_str("<article>\n<header>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&meta.title));
    let _ = writeln!(
        html,
        r#"<time datetime="{}">{}</time>"#,
        meta.pub_date.to_ymd(),
        meta.pub_date.to_long_date()
    );
    if let Some(updated) = meta.updated_date {
        let _ = writeln!(
            html,
            r#"<p class="updated">Updated <time datetime="{}">{}</time></p>"#,
            updated.to_ymd(),
            updated.to_long_date()
        );
    }
    if let Some(url) = &meta.url {
        let _ = writeln!(html, r#"<p class="source"><a href="{}">{}</a></p>"#, escape_attr(url), escape(url));
    }
    html.push_str("</header>\n");
    html.push_str(content);
    html.push_str("</article>\n");
    html
}

/// One list item linking to an entry.
pub(super) fn entry_link(entry: &Entry) -> String {
    format!(
        "<li><a href=\"{}\">{}</a> <time datetime=\"{}\">{}</time></li>\n",
        escape_attr(&entry.permalink()),
        escape(&entry.meta.title),
        entry.meta.pub_date.to_ymd(),
        entry.meta.pub_date.to_short_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{Collection, EntryMeta};
    use crate::utils::date::DateTimeUtc;

    #[test]
    fn test_page_title_and_feed_link() {
        let config = test_parse_config(
            "[site]\ntitle = \"Notes\"\nurl = \"https://example.com\"\n[feed]\nenable = true",
        );
        let html = page(&config, "A & B", Some("desc"), "<p>x</p>\n");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>A &amp; B | Notes</title>"));
        assert!(html.contains(r#"href="https://example.com/rss.xml""#));
        assert!(html.contains("<main>\n<p>x</p>\n</main>"));
    }

    #[test]
    fn test_page_without_url_has_no_feed_link() {
        let config = test_parse_config("[site]\ntitle = \"Notes\"");
        let html = page(&config, "Notes", None, "");
        assert!(html.contains("<title>Notes</title>"));
        assert!(!html.contains("application/rss+xml"));
    }

    #[test]
    fn test_article_escapes_title() {
        let entry = Entry::new(
            "x",
            Collection::Blog,
            EntryMeta::new("<Hi>", DateTimeUtc::from_ymd(2024, 2, 3)),
        );
        let html = article(&entry, "<p>body</p>\n");
        assert!(html.contains("<h1>&lt;Hi&gt;</h1>"));
        assert!(html.contains(r#"datetime="2024-02-03""#));
        assert!(entry_link(&entry).contains(r#"href="/x/""#));
    }
}
