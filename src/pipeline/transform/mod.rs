//! Document transforms.
//!
//! Each transform mutates a [`Document`] in place and is composed via
//! [`Pipeline`](super::Pipeline).
//!
//! # Modules
//!
//! - `code_block`: wraps fenced code in the copy-code widget (Code → div)
//! - `highlight`: lowers code nodes to highlighted `pre > code` markup
//! - `inline_code`: retags inline `code` elements
//! - `link`: wraps anchor content and marks external links

mod code_block;
mod highlight;
mod inline_code;
mod link;

use crate::tree::Document;

pub use code_block::{CodeBlockTransform, CopyCodeWidget, LanguageNames};
pub use highlight::HighlightTransform;
pub use inline_code::{INLINE_CODE_TAG, InlineCodeTransform};
pub use link::{ExternalLinkTransform, LINK_CONTENT_CLASS, LinkKind, LinkWrapTransform};

/// One pass over a document.
///
/// One pipeline is shared by all render threads.
pub trait Transform: Send + Sync {
    /// Short identifier, used in debug output.
    fn name(&self) -> &'static str;

    fn apply(&self, doc: &mut Document);
}
