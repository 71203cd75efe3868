//! HTML serialization of a document tree.

use super::{Code, Document, Element, Node};
use crate::utils::html::{
    escape, escape_attr, is_block_element, is_raw_text_element, is_void_element,
};

/// Serialize a document to an HTML fragment.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::with_capacity(1024);
    write_nodes(&doc.children, &mut out, false);
    out
}

/// Serialize a single node.
pub fn node_to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out, false);
    out
}

fn write_nodes(nodes: &[Node], out: &mut String, raw_text: bool) {
    for node in nodes {
        write_node(node, out, raw_text);
    }
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
    match node {
        Node::Element(elem) => write_element(elem, out),
        Node::Text(text) if raw_text => out.push_str(&text.value),
        Node::Text(text) => out.push_str(&escape(&text.value)),
        Node::Code(code) => write_unhighlighted_code(code, out),
        Node::Raw(html) => out.push_str(html),
    }
}

fn write_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    for (key, value) in elem.attrs.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    write_nodes(&elem.children, out, is_raw_text_element(&elem.tag));

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
    if is_block_element(&elem.tag) {
        out.push('\n');
    }
}

/// Fallback for code blocks that never went through a highlighter.
fn write_unhighlighted_code(code: &Code, out: &mut String) {
    out.push_str("<pre><code");
    if let Some(lang) = &code.lang {
        out.push_str(" class=\"language-");
        out.push_str(&escape_attr(lang));
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape(&code.value));
    out.push_str("</code></pre>\n");
}
