//! Inline code retagging.
//!
//! A `code` element without attributes can only come from a backtick span;
//! fenced blocks always leave with a `language-*` class. Retagging to
//! `inline-code` lets styles target the two separately, and the new tag no
//! longer matches, so running the pass twice changes nothing.

use super::Transform;
use crate::tree::{Document, walk_elements_mut};

pub const INLINE_CODE_TAG: &str = "inline-code";

#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCodeTransform;

impl Transform for InlineCodeTransform {
    fn name(&self) -> &'static str {
        "inline-code"
    }

    fn apply(&self, doc: &mut Document) {
        walk_elements_mut(&mut doc.children, &mut |elem| {
            if elem.is("code") && elem.attrs.is_empty() {
                elem.tag = INLINE_CODE_TAG.to_string();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Element, Node};

    fn sample() -> Document {
        Document::new(vec![
            Element::new("p")
                .child(Node::text("call "))
                .child(Element::new("code").child(Node::text("run()")))
                .into(),
            Element::new("pre")
                .child(Element::with_class("code", "language-rust").child(Node::text("fn x")))
                .into(),
        ])
    }

    #[test]
    fn test_retags_attributeless_code_only() {
        let mut doc = sample();
        InlineCodeTransform.apply(&mut doc);

        let p = doc.children[0].as_element().unwrap();
        let inline = p.children[1].as_element().unwrap();
        assert_eq!(inline.tag, "inline-code");
        assert_eq!(inline.text_content(), "run()");

        let pre = doc.children[1].as_element().unwrap();
        assert_eq!(pre.children[0].as_element().unwrap().tag, "code");
    }

    #[test]
    fn test_idempotent() {
        let mut once = sample();
        InlineCodeTransform.apply(&mut once);
        let mut twice = once.clone();
        InlineCodeTransform.apply(&mut twice);
        assert_eq!(once, twice);
    }
}
