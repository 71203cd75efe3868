//! Code node → highlighted `pre > code`.
//!
//! ```text
//! pre.shiki[.line-numbers][.has-highlight][.has-diff ...]
//! └── code.language-{lang|plaintext}
//!     ├── span.line[.highlighted] > span[style=color] ...
//!     ├── "\n"
//!     └── span.line ...
//! ```

use super::Transform;
use crate::highlight::{CodeOptions, Highlighter, extract_notations};
use crate::tree::{Attrs, Code, Document, Element, Node, Visit, visit_slots_mut};

/// Lowers every remaining `Code` node through the injected highlighter.
pub struct HighlightTransform<'a> {
    highlighter: &'a dyn Highlighter,
}

impl<'a> HighlightTransform<'a> {
    pub fn new(highlighter: &'a dyn Highlighter) -> Self {
        Self { highlighter }
    }

    fn lower(&self, code: &Code) -> Element {
        let source = code.value.strip_suffix('\n').unwrap_or(&code.value);
        let (source, marks) = extract_notations(source);
        let options = CodeOptions::parse(code.meta.as_deref());
        let lang = code.lang.as_deref();

        let mut pre = Element::with_class("pre", "shiki");
        if options.line_numbers {
            pre.add_class("line-numbers");
        }
        if options.has_highlight() {
            pre.add_class("has-highlight");
        }
        for notation in marks.iter().flatten() {
            pre.add_class(notation.pre_class());
        }
        if let Some(lang) = lang {
            pre.set_attr("data-language", lang);
        }

        let lines = self.highlighter.highlight(&source, lang);
        let mut children = Vec::with_capacity(lines.len() * 2);
        for (i, tokens) in lines.into_iter().enumerate() {
            if i > 0 {
                children.push(Node::text("\n"));
            }

            let mut line = Element::with_class("span", "line");
            if options.is_highlighted(i + 1) {
                line.add_class("highlighted");
            }
            if let Some(notation) = marks.get(i).copied().flatten() {
                for class in notation.line_class().split(' ') {
                    line.add_class(class);
                }
            }

            line.children = tokens
                .into_iter()
                .map(|token| match token.color {
                    Some(color) => Element::with_attrs("span", [("style", format!("color:{color}"))])
                        .child(Node::text(token.text))
                        .into(),
                    None => Node::text(token.text),
                })
                .collect();
            children.push(line.into());
        }

        let class = format!("language-{}", lang.unwrap_or("plaintext"));
        let code_elem = Element::with_attrs("code", Attrs::from([("class", class)])).children(children);
        pre.child(code_elem)
    }
}

impl Transform for HighlightTransform<'_> {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn apply(&self, doc: &mut Document) {
        visit_slots_mut(&mut doc.children, &mut |parent, index| {
            let Node::Code(code) = &parent[index] else {
                return Visit::Continue;
            };
            parent[index] = self.lower(code).into();
            Visit::Skip
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::PlainHighlighter;
    use crate::tree::to_html;

    fn lower(code: Code) -> String {
        let mut doc = Document::new(vec![code.into()]);
        HighlightTransform::new(&PlainHighlighter).apply(&mut doc);
        to_html(&doc)
    }

    #[test]
    fn test_plain_lowering() {
        let html = lower(Code::new("a < b\nc\n").with_lang("rust"));
        assert_eq!(
            html,
            "<pre class=\"shiki\" data-language=\"rust\"><code class=\"language-rust\">\
             <span class=\"line\">a &lt; b</span>\n<span class=\"line\">c</span></code></pre>\n"
        );
    }

    #[test]
    fn test_missing_lang_is_plaintext() {
        let html = lower(Code::new("x"));
        assert!(html.contains("<code class=\"language-plaintext\">"));
        assert!(!html.contains("data-language"));
    }

    #[test]
    fn test_only_one_trailing_newline_removed() {
        let html = lower(Code::new("x\n\n"));
        assert_eq!(html.matches("<span class=\"line\">").count(), 2);
    }

    #[test]
    fn test_line_numbers_and_meta_highlight() {
        let html = lower(Code::new("a\nb\nc").with_meta("showLineNumbers {2}"));
        assert!(html.starts_with("<pre class=\"shiki line-numbers has-highlight\">"));
        assert!(html.contains("<span class=\"line highlighted\">b</span>"));
        assert!(html.contains("<span class=\"line\">a</span>"));
    }

    #[test]
    fn test_notation_classes() {
        let html = lower(Code::new("keep\nadd // [!code ++]").with_lang("js"));
        assert!(html.contains("class=\"shiki has-diff\""));
        assert!(html.contains("<span class=\"line diff add\">add</span>"));
        assert!(!html.contains("[!code"));
    }

    #[test]
    fn test_colored_tokens_become_spans() {
        struct Red;
        impl Highlighter for Red {
            fn highlight(&self, source: &str, _: Option<&str>) -> Vec<crate::highlight::Line> {
                source
                    .split('\n')
                    .map(|l| {
                        vec![crate::highlight::Token {
                            text: l.to_string(),
                            color: Some("#ff0000".into()),
                        }]
                    })
                    .collect()
            }
        }

        let mut doc = Document::new(vec![Code::new("x").into()]);
        HighlightTransform::new(&Red).apply(&mut doc);
        assert!(to_html(&doc).contains("<span style=\"color:#ff0000\">x</span>"));
    }
}
