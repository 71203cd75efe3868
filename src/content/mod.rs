//! Content entries and the collection loader.
//!
//! ```text
//! content/
//! ├── blog/          # posts, require `description`
//! ├── generative/    # art pieces
//! └── talks/         # talks, dated with `date`, optionally `upcoming`
//! ```

mod entry;
mod loader;

pub use entry::{Collection, Entry, EntryMeta, ForkLink, ImageCredits, Status};
pub use loader::{load_collection, load_entry};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("frontmatter parsing error: {0}")]
    Frontmatter(String),

    #[error("no frontmatter in `{0}`")]
    MissingFrontmatter(PathBuf),

    #[error("invalid frontmatter in `{path}`: {message}")]
    Schema { path: PathBuf, message: String },
}

impl ContentError {
    pub fn schema(path: &Path, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
