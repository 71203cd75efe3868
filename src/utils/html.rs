//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `is_void_element()` - Self-closing elements (br, img, etc.)
//! - `is_raw_text_element()` - Raw text elements (script, style)
//! - `is_block_element()` - Block-level elements, followed by a newline when serialized

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require escaping in text content.
const TEXT_ESCAPE_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters that require escaping in attribute values.
const ATTR_ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_ESCAPE_CHARS)
}

/// Escape HTML attribute values (quotes included).
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c).filter(|_| chars.contains(&c)) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if tag is a raw text element (content should not be HTML-escaped).
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

/// Check if tag is a block-level element.
#[inline]
pub fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "article"
            | "aside"
            | "blockquote"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "figure"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "tbody"
            | "thead"
            | "tr"
            | "ul"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("normal"), "normal");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
        assert_eq!(escape_attr("it's <x>"), "it&#39;s &lt;x&gt;");
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("br"));
        assert!(is_void_element("img"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("a"));
    }

    #[test]
    fn test_block_elements() {
        assert!(is_block_element("div"));
        assert!(is_block_element("pre"));
        assert!(!is_block_element("span"));
        assert!(!is_block_element("code"));
    }
}
