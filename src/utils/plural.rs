//! Count phrases for log output.

/// English plural of a lowercase noun: `entry` → `entries`, `page` → `pages`.
pub fn pluralize(noun: &str) -> String {
    let bytes = noun.as_bytes();
    match bytes {
        [.., c, b'y'] if !b"aeiou".contains(c) => format!("{}ies", &noun[..noun.len() - 1]),
        [.., b's' | b'x'] | [.., b's' | b'c', b'h'] => format!("{noun}es"),
        _ => format!("{noun}s"),
    }
}

/// `"1 entry"`, `"0 entries"`, `"3 pages"`.
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {}", pluralize(noun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("entry"), "entries");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("page"), "pages");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("match"), "matches");
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "entry"), "0 entries");
        assert_eq!(plural_count(1, "entry"), "1 entry");
        assert_eq!(plural_count(12, "page"), "12 pages");
    }
}
