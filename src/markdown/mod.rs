//! Markdown input.
//!
//! - [`convert`] - Markdown → document tree via `pulldown-cmark`
//! - [`frontmatter`] - YAML-like / TOML frontmatter extraction

pub mod convert;
pub mod frontmatter;

pub use convert::{MarkdownOptions, from_markdown, from_markdown_full};
pub use frontmatter::{JsonMap, extract_frontmatter, strip_frontmatter};
