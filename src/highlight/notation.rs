//! Inline `[!code ...]` notation comments.
//!
//! A trailing comment such as `// [!code ++]` marks its line and is removed
//! from the source before highlighting:
//!
//! | Notation | Line class | `pre` class |
//! |----------|-----------|-------------|
//! | `[!code highlight]`, `[!code hl]` | `highlighted` | `has-highlighted` |
//! | `[!code ++]` | `diff add` | `has-diff` |
//! | `[!code --]` | `diff remove` | `has-diff` |
//! | `[!code focus]` | `focused` | `has-focused` |
//! | `[!code error]` | `highlighted error` | `has-error` |
//! | `[!code warning]` | `highlighted warning` | `has-error` |

use std::sync::LazyLock;

use regex::Regex;

static NOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?://|#|--|/\*|<!--)\s*\[!code\s+(\+\+|--|highlight|hl|focus|error|warning)\]\s*(?:\*/|-->)?\s*$")
        .expect("valid notation regex")
});

/// A line marker from a notation comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Highlight,
    Add,
    Remove,
    Focus,
    Error,
    Warning,
}

impl Notation {
    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "highlight" | "hl" => Self::Highlight,
            "++" => Self::Add,
            "--" => Self::Remove,
            "focus" => Self::Focus,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => return None,
        })
    }

    pub fn line_class(self) -> &'static str {
        match self {
            Self::Highlight => "highlighted",
            Self::Add => "diff add",
            Self::Remove => "diff remove",
            Self::Focus => "focused",
            Self::Error => "highlighted error",
            Self::Warning => "highlighted warning",
        }
    }

    pub fn pre_class(self) -> &'static str {
        match self {
            Self::Highlight => "has-highlighted",
            Self::Add | Self::Remove => "has-diff",
            Self::Focus => "has-focused",
            Self::Error | Self::Warning => "has-error",
        }
    }
}

/// Strip notation comments, returning the cleaned source and one optional
/// marker per line.
pub fn extract_notations(source: &str) -> (String, Vec<Option<Notation>>) {
    let mut cleaned = String::with_capacity(source.len());
    let mut marks = Vec::new();

    for (i, line) in source.split('\n').enumerate() {
        if i > 0 {
            cleaned.push('\n');
        }
        match NOTATION_RE.captures(line) {
            Some(caps) => {
                let start = caps.get(0).map_or(line.len(), |m| m.start());
                cleaned.push_str(&line[..start]);
                marks.push(caps.get(1).and_then(|m| Notation::parse(m.as_str())));
            }
            None => {
                cleaned.push_str(line);
                marks.push(None);
            }
        }
    }

    (cleaned, marks)
}
