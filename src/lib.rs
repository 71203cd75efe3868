//! Vellum - content pipeline for a markdown blog.
//!
//! Markdown is converted to a [`tree::Document`], rewritten by the
//! [`pipeline`] transforms and serialized back to HTML. Collections are
//! loaded from `content/<collection>/`, filtered and paginated by [`query`],
//! and turned into pages, an RSS feed and a sitemap by the `build` command.

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod highlight;
pub mod logger;
pub mod markdown;
pub mod pipeline;
pub mod query;
pub mod tree;
pub mod utils;
