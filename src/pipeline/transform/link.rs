//! Anchor processing.
//!
//! - [`LinkWrapTransform`]: wraps anchor content in `span.link-content`
//! - [`ExternalLinkTransform`]: adds `target` / `rel` to off-site links
//!
//! # Link Classification
//!
//! | LinkKind | Example | External? |
//! |----------|---------|-----------|
//! | `Absolute` | `https://...`, `//cdn.example` | if host differs from the site |
//! | `Other` | `mailto:`, `tel:` | never |
//! | `Fragment` | `#section` | never |
//! | `Relative` | `/about`, `./img.png` | never |

use url::Url;

use super::Transform;
use crate::tree::{Document, Element, Node, walk_elements_mut};

pub const LINK_CONTENT_CLASS: &str = "link-content";

// =============================================================================
// Link kinds
// =============================================================================

/// Syntactic classification of an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// http(s) or protocol-relative URL, parsed.
    Absolute(Url),
    /// Any other scheme (mailto:, tel:, javascript:).
    Other,
    /// `#anchor`
    Fragment,
    /// Site-root or file-relative path.
    Relative,
}

impl LinkKind {
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        if href.starts_with('#') {
            return Self::Fragment;
        }

        let parsed = match href.strip_prefix("//") {
            Some(rest) => Url::parse(&format!("https://{rest}")),
            None => Url::parse(href),
        };

        match parsed {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Absolute(url),
            Ok(_) => Self::Other,
            Err(_) => Self::Relative,
        }
    }
}

// =============================================================================
// Link content wrap
// =============================================================================

/// Moves each anchor's children into a single `span.link-content`.
///
/// The traversal descends into the new span, which is not an anchor, so
/// every anchor is wrapped exactly once per run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkWrapTransform;

impl Transform for LinkWrapTransform {
    fn name(&self) -> &'static str {
        "link-wrap"
    }

    fn apply(&self, doc: &mut Document) {
        walk_elements_mut(&mut doc.children, &mut |elem| {
            if elem.is("a") {
                let children = std::mem::take(&mut elem.children);
                let span = Element::with_class("span", LINK_CONTENT_CLASS).children(children);
                elem.children.push(Node::from(span));
            }
        });
    }
}

// =============================================================================
// External links
// =============================================================================

/// Marks anchors pointing off-site with `target` and `rel`.
#[derive(Debug, Clone)]
pub struct ExternalLinkTransform {
    site_host: Option<String>,
    target: String,
    rel: String,
}

impl Default for ExternalLinkTransform {
    fn default() -> Self {
        Self {
            site_host: None,
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
        }
    }
}

impl ExternalLinkTransform {
    pub fn new(site_url: Option<&Url>, target: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            site_host: site_url
                .and_then(Url::host_str)
                .map(str::to_ascii_lowercase),
            target: target.into(),
            rel: rel.into(),
        }
    }

    /// Whether `href` leaves the site.
    ///
    /// Without a known site host every absolute http(s) link counts.
    pub fn is_external(&self, href: &str) -> bool {
        let LinkKind::Absolute(url) = LinkKind::parse(href) else {
            return false;
        };
        match (&self.site_host, url.host_str()) {
            (Some(site), Some(host)) => !host.eq_ignore_ascii_case(site),
            _ => true,
        }
    }
}

impl Transform for ExternalLinkTransform {
    fn name(&self) -> &'static str {
        "external-link"
    }

    fn apply(&self, doc: &mut Document) {
        walk_elements_mut(&mut doc.children, &mut |elem| {
            if !elem.is("a") {
                return;
            }
            let external = elem.get_attr("href").is_some_and(|href| self.is_external(href));
            if external {
                elem.set_attr("target", self.target.as_str());
                elem.set_attr("rel", self.rel.as_str());
            }
        });
    }
}
