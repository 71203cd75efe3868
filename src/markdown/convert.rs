//! Markdown to document tree conversion using pulldown-cmark.

use pulldown_cmark::{
    Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use crate::tree::{Attrs, Code, Document, Element, Node};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Curly quotes, en/em dashes and ellipses
    pub smart_punctuation: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            smart_punctuation: true,
            heading_attributes: true,
        }
    }

    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Stack frame for tracking nested structures
enum Frame {
    Element(Element),
    /// Fenced or indented code block, collecting its source text
    Code(Code),
    /// Container whose children go straight to the parent (html blocks)
    Transparent,
    /// Content that is dropped (metadata blocks)
    Skip,
}

struct MarkdownConverter {
    stack: Vec<Frame>,
    root_children: Vec<Node>,
    in_table_head: bool,
}

impl MarkdownConverter {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root_children: Vec::new(),
            in_table_head: false,
        }
    }

    fn convert(mut self, markdown: &str, options: &MarkdownOptions) -> Document {
        let parser = Parser::new_ext(markdown, options.to_pulldown_options());

        for event in parser {
            self.handle_event(event);
        }

        // Unbalanced input never happens with pulldown-cmark, but close anyway
        while !self.stack.is_empty() {
            self.end_tag();
        }

        Document::new(self.root_children)
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(TagEnd::TableHead) => {
                self.in_table_head = false;
                self.end_tag();
            }
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => self.add_inline_code(code.as_ref()),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.add_node(Node::Raw(html.to_string()));
            }
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.add_node(Element::new("br").into()),
            Event::Rule => self.add_node(Element::new("hr").into()),
            Event::FootnoteReference(name) => self.add_footnote_ref(name.as_ref()),
            Event::TaskListMarker(checked) => self.add_task_marker(checked),
            Event::InlineMath(math) => self.add_math(math.as_ref(), false),
            Event::DisplayMath(math) => self.add_math(math.as_ref(), true),
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        let frame = match tag {
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                let (lang, meta) = Code::split_info(&info);
                Frame::Code(Code {
                    value: String::new(),
                    lang: lang.map(str::to_string),
                    meta: meta.map(str::to_string),
                })
            }
            Tag::CodeBlock(CodeBlockKind::Indented) => Frame::Code(Code::default()),
            Tag::HtmlBlock => Frame::Transparent,
            Tag::MetadataBlock(_) => Frame::Skip,
            Tag::TableHead => {
                self.in_table_head = true;
                Frame::Element(Element::new("thead").child(Element::new("tr")))
            }
            tag => {
                let (name, attrs) = tag_to_element(&tag, self.in_table_head);
                Frame::Element(Element::with_attrs(name, attrs))
            }
        };
        self.stack.push(frame);
    }

    fn end_tag(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Element(mut elem) => {
                if elem.is("img") {
                    // alt text arrives as children
                    let alt = elem.text_content();
                    elem.children.clear();
                    elem.set_attr("alt", alt);
                }
                self.add_node(elem.into());
            }
            Frame::Code(code) => self.add_node(code.into()),
            Frame::Transparent | Frame::Skip => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Frame::Code(code)) = self.stack.last_mut() {
            code.value.push_str(text);
            return;
        }
        self.add_node(Node::text(text));
    }

    /// Inline code spans carry no attributes.
    fn add_inline_code(&mut self, code: &str) {
        self.add_node(Element::new("code").child(Node::text(code)).into());
    }

    fn add_footnote_ref(&mut self, name: &str) {
        let link = Element::with_attrs(
            "a",
            [("href", format!("#fn-{name}")), ("id", format!("fnref-{name}"))],
        )
        .child(Node::text(format!("[{name}]")));
        let sup = Element::with_class("sup", "footnote-ref").child(link);
        self.add_node(sup.into());
    }

    fn add_task_marker(&mut self, checked: bool) {
        let mut attrs = Attrs::from([("type", "checkbox"), ("disabled", "")]);
        if checked {
            attrs.set("checked", "");
        }
        self.add_node(Element::with_attrs("input", attrs).into());
    }

    fn add_math(&mut self, formula: &str, display: bool) {
        let (tag, class) = if display {
            ("div", "math math-display")
        } else {
            ("span", "math math-inline")
        };
        self.add_node(Element::with_class(tag, class).child(Node::text(formula)).into());
    }

    /// Add a node to the innermost open element, or the root.
    fn add_node(&mut self, node: Node) {
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Element(elem) => {
                    // table head rows are pre-opened
                    if elem.is("thead")
                        && let Some(Node::Element(row)) = elem.children.last_mut()
                    {
                        row.children.push(node);
                    } else {
                        elem.children.push(node);
                    }
                    return;
                }
                // code blocks only ever receive text
                Frame::Code(_) | Frame::Skip => return,
                Frame::Transparent => continue,
            }
        }
        self.root_children.push(node);
    }
}

/// Convert a pulldown-cmark Tag to (tag_name, attributes)
fn tag_to_element(tag: &Tag, in_table_head: bool) -> (&'static str, Attrs) {
    match tag {
        Tag::Paragraph => ("p", Attrs::new()),
        Tag::Heading {
            level, id, classes, ..
        } => {
            let mut attrs = Attrs::new();
            if let Some(id) = id {
                attrs.set("id", id.to_string());
            }
            if !classes.is_empty() {
                let joined: Vec<&str> = classes.iter().map(|c| c.as_ref()).collect();
                attrs.set("class", joined.join(" "));
            }
            (heading_level_to_tag(*level), attrs)
        }
        Tag::BlockQuote(_) => ("blockquote", Attrs::new()),
        Tag::List(Some(start)) if *start != 1 => {
            ("ol", Attrs::from([("start", start.to_string())]))
        }
        Tag::List(Some(_)) => ("ol", Attrs::new()),
        Tag::List(None) => ("ul", Attrs::new()),
        Tag::Item => ("li", Attrs::new()),
        Tag::FootnoteDefinition(name) => (
            "div",
            Attrs::from([
                ("class", "footnote".to_string()),
                ("id", format!("fn-{name}")),
            ]),
        ),

        Tag::Table(alignments) => {
            let align: String = alignments
                .iter()
                .map(|a| match a {
                    Alignment::None => 'n',
                    Alignment::Left => 'l',
                    Alignment::Center => 'c',
                    Alignment::Right => 'r',
                })
                .collect();
            ("table", Attrs::from([("data-align", align)]))
        }
        Tag::TableRow => ("tr", Attrs::new()),
        Tag::TableCell if in_table_head => ("th", Attrs::new()),
        Tag::TableCell => ("td", Attrs::new()),

        Tag::Emphasis => ("em", Attrs::new()),
        Tag::Strong => ("strong", Attrs::new()),
        Tag::Strikethrough => ("del", Attrs::new()),
        Tag::Superscript => ("sup", Attrs::new()),
        Tag::Subscript => ("sub", Attrs::new()),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut attrs = Attrs::from([("href", dest_url.to_string())]);
            if !title.is_empty() {
                attrs.set("title", title.to_string());
            }
            ("a", attrs)
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let mut attrs = Attrs::from([("src", dest_url.to_string())]);
            if !title.is_empty() {
                attrs.set("title", title.to_string());
            }
            ("img", attrs)
        }

        Tag::DefinitionList => ("dl", Attrs::new()),
        Tag::DefinitionListTitle => ("dt", Attrs::new()),
        Tag::DefinitionListDefinition => ("dd", Attrs::new()),

        // handled by the caller
        Tag::CodeBlock(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) | Tag::TableHead => {
            ("div", Attrs::new())
        }
    }
}

fn heading_level_to_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Convert markdown string to a document tree
pub fn from_markdown(markdown: &str, options: &MarkdownOptions) -> Document {
    MarkdownConverter::new().convert(markdown, options)
}

/// Convert markdown with all extensions enabled
pub fn from_markdown_full(markdown: &str) -> Document {
    from_markdown(markdown, &MarkdownOptions::all())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(doc: &Document) -> &Element {
        doc.children[0].as_element().expect("expected element")
    }

    #[test]
    fn test_basic_paragraph() {
        let doc = from_markdown_full("Hello world");
        assert_eq!(doc.children.len(), 1);
        assert_eq!(first_element(&doc).tag, "p");
    }

    #[test]
    fn test_heading_with_id() {
        let doc = from_markdown_full("# Title {#intro}");
        let h1 = first_element(&doc);
        assert_eq!(h1.tag, "h1");
        assert_eq!(h1.get_attr("id"), Some("intro"));
    }

    #[test]
    fn test_fenced_code_block_splits_info() {
        let md = "```ts title=\"app.ts\" {2}\nconst a = 1;\n```\n";
        let doc = from_markdown_full(md);
        let code = doc.children[0].as_code().expect("expected code node");
        assert_eq!(code.lang.as_deref(), Some("ts"));
        assert_eq!(code.meta.as_deref(), Some("title=\"app.ts\" {2}"));
        assert_eq!(code.value, "const a = 1;\n");
    }

    #[test]
    fn test_fenced_code_without_info() {
        let doc = from_markdown_full("```\nplain\n```\n");
        let code = doc.children[0].as_code().expect("expected code node");
        assert_eq!(code.lang, None);
        assert_eq!(code.meta, None);
    }

    #[test]
    fn test_inline_code_has_no_attrs() {
        let doc = from_markdown_full("use `cargo` here");
        let p = first_element(&doc);
        let code = p
            .children
            .iter()
            .find_map(|n| n.as_element().filter(|e| e.is("code")))
            .expect("inline code");
        assert!(code.attrs.is_empty());
        assert_eq!(code.text_content(), "cargo");
    }

    #[test]
    fn test_link() {
        let doc = from_markdown_full("[Link](https://example.com \"Ex\")");
        let a = first_element(&doc).children[0]
            .as_element()
            .expect("anchor");
        assert_eq!(a.tag, "a");
        assert_eq!(a.get_attr("href"), Some("https://example.com"));
        assert_eq!(a.get_attr("title"), Some("Ex"));
        assert_eq!(a.text_content(), "Link");
    }

    #[test]
    fn test_image_alt() {
        let doc = from_markdown_full("![a cat](/cat.png)");
        let img = first_element(&doc).children[0].as_element().expect("img");
        assert_eq!(img.get_attr("alt"), Some("a cat"));
        assert!(img.children.is_empty());
    }

    #[test]
    fn test_table_head_cells() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let doc = from_markdown_full(md);
        let html = crate::tree::to_html(&doc);
        assert!(html.contains("<thead><tr><th>a</th><th>b</th></tr>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_raw_html_block_kept() {
        let doc = from_markdown_full("<div class=\"note\">hi</div>\n");
        assert!(matches!(doc.children[0], Node::Raw(_)));
    }
}
