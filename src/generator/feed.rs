//! RSS 2.0 feed generation.
//!
//! Items are the published entries of `[feed].collection`, newest first.

use super::{display_name, write_output};
use crate::config::{SiteConfig, SiteInfoConfig};
use crate::content::Entry;
use crate::log;
use crate::query::{Publishable, sorted_published};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{path::PathBuf, sync::LazyLock};

/// Build the RSS feed if enabled. Returns the written path.
pub fn build_feed(config: &SiteConfig, entries: &[Entry]) -> Result<Option<PathBuf>> {
    if !config.feed_enabled() {
        return Ok(None);
    }

    let xml = RssFeed::build(config, entries).into_xml()?;
    let path = write_output(&config.build.output, &config.feed.path, &xml)?;

    log!("feed"; "{}", display_name(&path));
    Ok(Some(path))
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    entries: Vec<&'a Entry>,
}

impl<'a> RssFeed<'a> {
    fn build(config: &'a SiteConfig, entries: &'a [Entry]) -> Self {
        let collection = config.feed.collection;
        Self {
            config,
            entries: sorted_published(entries.iter().filter(|e| e.collection == collection)),
        }
    }

    fn into_xml(self) -> Result<String> {
        let site = &self.config.site;
        let author = rss_author(site);

        let items: Vec<_> = self
            .entries
            .iter()
            .map(|entry| entry_to_rss_item(entry, site, author.clone()))
            .collect();

        let last_build = self.entries.first().map(|e| {
            e.updated_date()
                .unwrap_or_else(|| e.pub_date())
                .to_rfc2822()
        });

        let channel = ChannelBuilder::default()
            .title(&site.title)
            .link(site.url.as_deref().unwrap_or_default())
            .description(&site.description)
            .language(site.language.clone())
            .generator(concat!("vellum ", env!("CARGO_PKG_VERSION")).to_string())
            .last_build_date(last_build)
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }
}

fn entry_to_rss_item(entry: &Entry, site: &SiteInfoConfig, author: Option<String>) -> rss::Item {
    let link = site.absolute(&entry.permalink());

    let categories = entry
        .meta
        .categories
        .iter()
        .map(|name| CategoryBuilder::default().name(name.as_str()).build())
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(entry.meta.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(entry.meta.description.clone().or_else(|| entry.meta.excerpt.clone()))
        .pub_date(entry.pub_date().to_rfc2822())
        .author(author)
        .categories(categories)
        .build()
}

/// RSS wants `email (Name)`; take it from `[site]` when possible.
fn rss_author(site: &SiteInfoConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    if RE_VALID_AUTHOR.is_match(&site.author) {
        return Some(site.author.clone());
    }
    match (site.email.is_empty(), site.author.is_empty()) {
        (true, _) => None,
        (false, true) => Some(site.email.clone()),
        (false, false) => Some(format!("{} ({})", site.email, site.author)),
    }
}
