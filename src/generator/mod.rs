//! Auxiliary site files generated from loaded entries.
//!
//! - **Feed**: RSS 2.0 for the configured collection (`rss.xml`)
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//! - **Robots**: Crawler rules (`robots.txt`)
//!
//! All three take the already loaded and filtered entries from the build,
//! so nothing here touches the content directory.

pub mod feed;
pub mod robots;
pub mod sitemap;

pub use feed::build_feed;
pub use robots::build_robots;
pub use sitemap::build_sitemap;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to `output_dir/rel`, creating parent directories.
fn write_output(output_dir: &Path, rel: &Path, contents: &str) -> Result<PathBuf> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// File name for log lines.
fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
