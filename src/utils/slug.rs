//! URL slugification.
//!
//! Converts titles and category names to URL-safe segments.

use deunicode::deunicode;

/// Convert text to a URL slug.
///
/// Transliterates to ASCII, lowercases, turns spaces into `-` and drops
/// anything outside `[a-z0-9_-]`.
///
/// # Examples
///
/// - `slugify("Hello World")` -> `"hello-world"`
/// - `slugify("Crème Brûlée!")` -> `"creme-brulee"`
/// - `slugify("C++ & Rust")` -> `"c--rust"`
pub fn slugify(text: &str) -> String {
    deunicode(text)
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            'a'..='z' | '0'..='9' | '_' | '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// Slugify every item.
pub fn slugify_all<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| slugify(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("already-a-slug_1"), "already-a-slug_1");
    }

    #[test]
    fn test_punctuation_dropped_spaces_kept() {
        assert_eq!(slugify("C++ & Rust"), "c--rust");
        assert_eq!(slugify("what's new?"), "whats-new");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Ünïcödé"), "unicode");
    }

    #[test]
    fn test_slugify_all() {
        assert_eq!(slugify_all(&["A B", "c"]), vec!["a-b", "c"]);
    }
}
