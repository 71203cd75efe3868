//! Content entry types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::markdown::JsonMap;
use crate::utils::date::DateTimeUtc;

/// A content collection directory under `content/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Generative,
    Talks,
}

impl Collection {
    pub const ALL: [Self; 3] = [Self::Blog, Self::Generative, Self::Talks];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Generative => "generative",
            Self::Talks => "talks",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown collection `{s}` (expected blog, generative or talks)"))
    }
}

/// Publication status from frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Published,
}

/// A fork/remix link on generative entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkLink {
    pub title: String,
    pub url: String,
}

/// Photo credit for a hero image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCredits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Frontmatter of a content entry.
///
/// Keys are camelCase as written in the files. Anything not listed here
/// lands in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMeta {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Talks use `date`.
    #[serde(alias = "date")]
    pub pub_date: DateTimeUtc,

    #[serde(
        default,
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_date: Option<DateTimeUtc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default, deserialize_with = "string_list")]
    pub categories: Vec<String>,

    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_credits: Option<ImageCredits>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// External location (talk recording, generative piece).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub upcoming: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fork: Vec<ForkLink>,

    #[serde(flatten)]
    pub extra: JsonMap,
}

impl EntryMeta {
    /// Minimal metadata, mostly for tests and generated pages.
    pub fn new(title: impl Into<String>, pub_date: DateTimeUtc) -> Self {
        Self {
            title: title.into(),
            description: None,
            pub_date,
            updated_date: None,
            status: None,
            categories: Vec::new(),
            keywords: Vec::new(),
            hero_image: None,
            img_credits: None,
            excerpt: None,
            url: None,
            path: None,
            upcoming: false,
            fork: Vec::new(),
            extra: JsonMap::new(),
        }
    }
}

/// Empty strings count as absent, as a blank `updatedDate:` line does.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTimeUtc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTimeUtc::parse(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{s}`"))),
    }
}

/// Accept `[a, b]`, a single string or a comma-separated string.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}

/// One loaded content file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Path below the collection directory, without extension or `/index`.
    pub slug: String,
    pub collection: Collection,
    #[serde(rename = "data")]
    pub meta: EntryMeta,
    /// Markdown body with frontmatter removed.
    #[serde(skip)]
    pub body: String,
    #[serde(skip)]
    pub source: PathBuf,
}

impl Entry {
    pub fn new(slug: impl Into<String>, collection: Collection, meta: EntryMeta) -> Self {
        Self {
            slug: slug.into(),
            collection,
            meta,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Site-relative URL of the rendered page.
    ///
    /// Blog posts live at the root (`/<slug>`), matching the feed links;
    /// other collections are namespaced.
    pub fn permalink(&self) -> String {
        match self.collection {
            Collection::Blog => format!("/{}/", self.slug),
            other => format!("/{other}/{}/", self.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta_from(value: serde_json::Value) -> Result<EntryMeta, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_minimal_meta() {
        let meta = meta_from(json!({"title": "Hi", "pubDate": "2024-01-02"})).unwrap();
        assert_eq!(meta.title, "Hi");
        assert_eq!(meta.pub_date, DateTimeUtc::from_ymd(2024, 1, 2));
        assert!(meta.status.is_none());
        assert!(meta.categories.is_empty());
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_talk_date_alias() {
        let meta = meta_from(json!({"title": "Talk", "date": "2023-05-01", "upcoming": true})).unwrap();
        assert_eq!(meta.pub_date.year, 2023);
        assert!(meta.upcoming);
    }

    #[test]
    fn test_full_meta_and_extra() {
        let meta = meta_from(json!({
            "title": "Post",
            "description": "d",
            "pubDate": "2024-01-02T10:00:00.500Z",
            "updatedDate": "2024-02-01",
            "status": "draft",
            "categories": "rust, web",
            "keywords": ["a"],
            "heroImage": "/hero.png",
            "imgCredits": {"username": "me"},
            "fork": [{"title": "f", "url": "https://x.dev"}],
            "series": "intro"
        }))
        .unwrap();

        assert_eq!(meta.status, Some(Status::Draft));
        assert_eq!(meta.updated_date, Some(DateTimeUtc::from_ymd(2024, 2, 1)));
        assert_eq!(meta.categories, vec!["rust", "web"]);
        assert_eq!(meta.hero_image.as_deref(), Some("/hero.png"));
        assert_eq!(meta.fork.len(), 1);
        assert_eq!(meta.extra.get("series"), Some(&json!("intro")));
    }

    #[test]
    fn test_blank_updated_date_is_none() {
        let meta = meta_from(json!({"title": "x", "pubDate": "2024-01-02", "updatedDate": ""})).unwrap();
        assert!(meta.updated_date.is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(meta_from(json!({"title": "x"})).is_err());
        assert!(meta_from(json!({"title": "x", "pubDate": "tomorrow"})).is_err());
        assert!(meta_from(json!({"title": "x", "pubDate": "2024-01-02", "status": "hidden"})).is_err());
    }

    #[test]
    fn test_collection_parse() {
        assert_eq!("Blog".parse::<Collection>(), Ok(Collection::Blog));
        assert!("notes".parse::<Collection>().is_err());
    }

    #[test]
    fn test_permalink() {
        let meta = EntryMeta::new("x", DateTimeUtc::from_ymd(2024, 1, 1));
        assert_eq!(Entry::new("hello", Collection::Blog, meta.clone()).permalink(), "/hello/");
        assert_eq!(Entry::new("a", Collection::Talks, meta).permalink(), "/talks/a/");
    }
}
