//! Configuration section definitions.
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[site]`    | Site metadata (title, url, author)        |
//! | `[build]`   | Content/output paths, page size, drafts   |
//! | `[code]`    | Highlight theme and language names        |
//! | `[links]`   | External link attributes and position     |
//! | `[feed]`    | RSS output                                |
//! | `[sitemap]` | Sitemap output                            |
//! | `[robots]`  | robots.txt rules                          |

mod build;
mod code;
mod links;
mod output;
mod site;

pub use build::BuildConfig;
pub use code::CodeConfig;
pub use links::LinksConfig;
pub use output::{FeedConfig, RobotsConfig, RobotsRule, SitemapConfig};
pub use site::SiteInfoConfig;

pub(crate) use output::validate_output_path;
