//! Markdown transform pipeline.
//!
//! Passes run in insertion order over one document, each seeing the
//! mutations of the previous one.
//!
//! # Site ordering
//!
//! ```text
//! Code ──► code-block ──► highlight ──► link-wrap ──► inline-code
//!                      ▲             ▲             ▲              ▲
//!                    first     before-wrap    after-wrap        last
//!                         (external-link insertion points)
//! ```
//!
//! `before-wrap` is the default.

pub mod meta;
pub mod transform;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::highlight::Highlighter;
use crate::markdown::{MarkdownOptions, from_markdown};
use crate::tree::{Document, to_html};

pub use meta::{MetaBlock, parse_meta};
pub use transform::{
    CodeBlockTransform, CopyCodeWidget, ExternalLinkTransform, HighlightTransform, InlineCodeTransform,
    LanguageNames, LinkKind, LinkWrapTransform, Transform,
};

// =============================================================================
// Types
// =============================================================================

/// Where the external-link pass sits relative to the other passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPosition {
    First,
    #[default]
    BeforeWrap,
    AfterWrap,
    Last,
}

/// An ordered list of passes.
#[derive(Default)]
pub struct Pipeline<'a> {
    passes: Vec<Box<dyn Transform + 'a>>,
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Append a pass.
    pub fn pipe(mut self, pass: impl Transform + 'a) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Insert a pass at `index` (clamped to the end).
    pub fn insert(mut self, index: usize, pass: impl Transform + 'a) -> Self {
        let index = index.min(self.passes.len());
        self.passes.insert(index, Box::new(pass));
        self
    }

    /// Pass names in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass over `doc`.
    pub fn apply(&self, doc: &mut Document) {
        for pass in &self.passes {
            pass.apply(doc);
        }
    }

    /// Owned variant of [`Pipeline::apply`].
    pub fn run(&self, mut doc: Document) -> Document {
        self.apply(&mut doc);
        doc
    }

    /// The site pipeline described by `config`.
    pub fn site(config: &SiteConfig, highlighter: &'a dyn Highlighter) -> Self {
        let names = LanguageNames::with_extra(config.code.languages.clone());

        let mut pipeline = Self::new().pipe(CodeBlockTransform::new(names));
        if config.code.highlight {
            pipeline = pipeline.pipe(HighlightTransform::new(highlighter));
        }
        let wrap_at = pipeline.len();
        pipeline = pipeline.pipe(LinkWrapTransform).pipe(InlineCodeTransform);

        if !config.links.external {
            return pipeline;
        }

        let external = ExternalLinkTransform::new(
            config.site.base_url().as_ref(),
            &config.links.target,
            &config.links.rel,
        );
        let index = match config.links.position {
            LinkPosition::First => 0,
            LinkPosition::BeforeWrap => wrap_at,
            LinkPosition::AfterWrap => wrap_at + 1,
            LinkPosition::Last => pipeline.len(),
        };
        pipeline.insert(index, external)
    }
}

/// Convert markdown, run `pipeline` and serialize to HTML.
pub fn render_markdown(markdown: &str, pipeline: &Pipeline<'_>) -> String {
    let doc = pipeline.run(from_markdown(markdown, &MarkdownOptions::all()));
    to_html(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::PlainHighlighter;

    fn config(toml: &str) -> SiteConfig {
        SiteConfig::from_str(toml).unwrap()
    }

    #[test]
    fn test_default_site_order() {
        let pipeline = Pipeline::site(&config(""), &PlainHighlighter);
        assert_eq!(
            pipeline.names(),
            vec!["code-block", "highlight", "external-link", "link-wrap", "inline-code"]
        );
    }

    #[test]
    fn test_link_positions() {
        let cases = [
            ("first", 0),
            ("before-wrap", 2),
            ("after-wrap", 3),
            ("last", 4),
        ];
        for (position, index) in cases {
            let cfg = config(&format!("[links]\nposition = \"{position}\""));
            let pipeline = Pipeline::site(&cfg, &PlainHighlighter);
            assert_eq!(pipeline.names()[index], "external-link", "{position}");
            assert_eq!(pipeline.len(), 5);
        }
    }

    #[test]
    fn test_disabled_passes() {
        let cfg = config("[code]\nhighlight = false\n[links]\nexternal = false");
        let pipeline = Pipeline::site(&cfg, &PlainHighlighter);
        assert_eq!(pipeline.names(), vec!["code-block", "link-wrap", "inline-code"]);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let doc = from_markdown("a [b](/c) `d`", &MarkdownOptions::all());
        let out = Pipeline::new().run(doc.clone());
        assert_eq!(out, doc);
    }

    #[test]
    fn test_render_markdown_end_to_end() {
        let cfg = config("[site]\nurl = \"https://example.dev\"");
        let pipeline = Pipeline::site(&cfg, &PlainHighlighter);
        let html = render_markdown(
            "Use `x` and [home](/) or [rust](https://rust-lang.org).\n\n```rust title=\"main.rs\"\nfn main() {}\n```\n",
            &pipeline,
        );

        assert!(html.contains("<inline-code>x</inline-code>"));
        assert!(html.contains(r#"<a href="/"><span class="link-content">home</span></a>"#));
        assert!(html.contains(
            r#"<a href="https://rust-lang.org" target="_blank" rel="noopener noreferrer"><span class="link-content">rust</span></a>"#
        ));
        assert!(html.contains(r#"class="copy-code-wrapper has-title code-language-rust""#));
        assert!(html.contains(r#"<pre class="shiki""#));
        assert!(html.contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_same_host_link_untouched() {
        let cfg = config("[site]\nurl = \"https://example.dev\"");
        let pipeline = Pipeline::site(&cfg, &PlainHighlighter);
        let html = render_markdown("[me](https://example.dev/about)", &pipeline);
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_highlight_pass_keeps_code_out_of_inline_retag() {
        let pipeline = Pipeline::site(&config(""), &PlainHighlighter);
        let html = render_markdown("```\nplain\n```", &pipeline);
        assert!(html.contains(r#"<code class="language-plaintext">"#));
        assert!(!html.contains("<inline-code"));
    }
}
