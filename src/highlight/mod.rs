//! Syntax highlighting.
//!
//! The highlighter is built once by the host and passed into the pipeline by
//! reference; nothing here is a global.
//!
//! - [`PlainHighlighter`] - escapes only, one token per line
//! - [`SyntectHighlighter`] - syntect grammars and themes
//! - [`CodeOptions`] - `showLineNumbers` / `{1,3-5}` flags from code metadata
//! - [`extract_notations`] - `// [!code ++]` style line markers

mod notation;
mod options;
mod syntax;

pub use notation::{Notation, extract_notations};
pub use options::CodeOptions;
pub use syntax::{DEFAULT_THEME, SyntectHighlighter};

use thiserror::Error;

/// One colored run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// CSS color (`#rrggbb`), `None` for unstyled text.
    pub color: Option<String>,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

/// A highlighted source line, without its line terminator.
pub type Line = Vec<Token>;

/// Turns source code into colored lines.
///
/// Implementations must be total: an unknown language or an internal failure
/// degrades to uncolored output. The returned vector has exactly one entry
/// per `\n`-separated line of `source`.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, source: &str, lang: Option<&str>) -> Vec<Line>;
}

/// Highlighter that emits every line as a single unstyled token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, source: &str, _lang: Option<&str>) -> Vec<Line> {
        plain_lines(source)
    }
}

pub(crate) fn plain_lines(source: &str) -> Vec<Line> {
    source
        .split('\n')
        .map(|line| vec![Token::plain(line.strip_suffix('\r').unwrap_or(line))])
        .collect()
}

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("unknown highlight theme `{name}` (available: {available})")]
    UnknownTheme { name: String, available: String },
}
