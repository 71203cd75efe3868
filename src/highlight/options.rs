//! Rendering flags read from a code block's metadata.

/// Options parsed from the metadata left after the title is removed.
///
/// ```text
/// showLineNumbers {1,3-5}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeOptions {
    pub line_numbers: bool,
    /// Inclusive, 1-based line ranges to mark.
    pub highlighted: Vec<(usize, usize)>,
}

impl CodeOptions {
    pub fn parse(meta: Option<&str>) -> Self {
        let Some(meta) = meta else {
            return Self::default();
        };

        let line_numbers = meta.split_whitespace().any(|w| w == "showLineNumbers");

        let highlighted = meta
            .find('{')
            .and_then(|start| {
                let rest = &meta[start + 1..];
                rest.find('}').map(|end| &rest[..end])
            })
            .map(parse_ranges)
            .unwrap_or_default();

        Self {
            line_numbers,
            highlighted,
        }
    }

    /// Whether 1-based `line` falls in a marked range.
    pub fn is_highlighted(&self, line: usize) -> bool {
        self.highlighted
            .iter()
            .any(|&(start, end)| (start..=end).contains(&line))
    }

    pub fn has_highlight(&self) -> bool {
        !self.highlighted.is_empty()
    }
}

/// Parse `1,3-5` into ranges; malformed parts are skipped.
fn parse_ranges(s: &str) -> Vec<(usize, usize)> {
    s.split(',')
        .filter_map(|part| {
            let part = part.trim();
            match part.split_once('-') {
                Some((a, b)) => {
                    let (a, b) = (a.trim().parse().ok()?, b.trim().parse().ok()?);
                    (a >= 1 && a <= b).then_some((a, b))
                }
                None => {
                    let n: usize = part.parse().ok()?;
                    (n >= 1).then_some((n, n))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(CodeOptions::parse(None), CodeOptions::default());
        assert_eq!(CodeOptions::parse(Some("  ")), CodeOptions::default());
    }

    #[test]
    fn test_line_numbers_and_ranges() {
        let opts = CodeOptions::parse(Some(" showLineNumbers {1,3-5}"));
        assert!(opts.line_numbers);
        assert_eq!(opts.highlighted, vec![(1, 1), (3, 5)]);
        assert!(opts.is_highlighted(4));
        assert!(!opts.is_highlighted(2));
    }

    #[test]
    fn test_malformed_ranges_skipped() {
        let opts = CodeOptions::parse(Some("{0, x, 4-2, 7}"));
        assert_eq!(opts.highlighted, vec![(7, 7)]);
    }

    #[test]
    fn test_line_numbers_needs_whole_word() {
        assert!(!CodeOptions::parse(Some("showLineNumbersX")).line_numbers);
    }
}
