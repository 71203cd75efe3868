//! syntect-backed highlighter.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use super::{HighlightError, Highlighter, Line, Token, plain_lines};

/// Default theme when none is configured.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Highlighter with the bundled syntect grammars and one theme.
///
/// Loading the syntax set is the expensive part, so build this once per
/// process and share it by reference.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    /// Load the bundled grammars and the named theme.
    pub fn new(theme: &str) -> Result<Self, HighlightError> {
        let mut themes = ThemeSet::load_defaults();
        let Some(theme) = themes.themes.remove(theme) else {
            let mut available: Vec<_> = themes.themes.keys().cloned().collect();
            available.sort();
            return Err(HighlightError::UnknownTheme {
                name: theme.to_string(),
                available: available.join(", "),
            });
        };

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    fn try_highlight(&self, source: &str, lang: Option<&str>) -> Option<Vec<Line>> {
        let syntax = lang
            .and_then(|lang| self.syntax_set.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut hl = HighlightLines::new(syntax, &self.theme);

        let mut lines = Vec::new();
        let mut buf = String::new();
        for line in source.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            // newline grammars expect the terminator
            buf.clear();
            buf.push_str(line);
            buf.push('\n');

            let ranges = hl.highlight_line(&buf, &self.syntax_set).ok()?;
            let tokens = ranges
                .into_iter()
                .filter_map(|(style, text)| {
                    let text = text.strip_suffix('\n').unwrap_or(text);
                    if text.is_empty() {
                        return None;
                    }
                    let fg = style.foreground;
                    Some(Token {
                        text: text.to_string(),
                        color: Some(format!("#{:02x}{:02x}{:02x}", fg.r, fg.g, fg.b)),
                    })
                })
                .collect();
            lines.push(tokens);
        }
        Some(lines)
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &str, lang: Option<&str>) -> Vec<Line> {
        self.try_highlight(source, lang)
            .unwrap_or_else(|| plain_lines(source))
    }
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}
