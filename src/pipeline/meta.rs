//! Fenced-code metadata parsing.
//!
//! The info string after the language id may carry `title="..."`. The title
//! is pulled out by match position and the rest is handed on untouched.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"title="([^"]*)""#).expect("valid title regex"));

/// Parsed code-block metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaBlock {
    pub title: Option<String>,
    /// Metadata with the first `title="..."` removed.
    pub remainder: String,
}

/// Parse a code-block metadata string. Never fails.
pub fn parse_meta(raw: Option<&str>) -> MetaBlock {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MetaBlock::default(),
    };

    let Some(caps) = TITLE_RE.captures(raw) else {
        return MetaBlock {
            title: None,
            remainder: raw.to_string(),
        };
    };

    // group 0 always exists on a match
    let span = caps.get(0).map_or(0..0, |m| m.range());
    let title = caps.get(1).map(|m| m.as_str().to_string());

    let mut remainder = String::with_capacity(raw.len() - span.len());
    remainder.push_str(&raw[..span.start]);
    remainder.push_str(&raw[span.end..]);

    MetaBlock { title, remainder }
}
