//! Node types for the document tree.

/// Ordered attribute list of an element.
///
/// Insertion order is preserved so serialized output is deterministic.
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attrs {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// An HTML-like element: tag name, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(tag: impl Into<String>, attrs: impl Into<Attrs>) -> Self {
        Self {
            tag: tag.into(),
            attrs: attrs.into(),
            children: Vec::new(),
        }
    }

    /// Shorthand for an element carrying only a `class` attribute.
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self::with_attrs(tag, [("class", class.into())])
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.set(key, value);
    }

    /// Append a class token, keeping existing ones.
    pub fn add_class(&mut self, class: &str) {
        let merged = match self.attrs.get("class") {
            Some(existing) if existing.split_whitespace().any(|c| c == class) => return,
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.attrs.set("class", merged);
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(elem) => collect_text(&elem.children, out),
            Node::Code(code) => out.push_str(&code.value),
            Node::Raw(_) => {}
        }
    }
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A fenced code block as produced by the markdown parser.
///
/// `lang` is the first word of the info string, `meta` the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    pub value: String,
    pub lang: Option<String>,
    pub meta: Option<String>,
}

impl Code {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: None,
            meta: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Split a fenced-code info string into `(lang, meta)`.
    ///
    /// ```ignore
    /// assert_eq!(Code::split_info("ts title=\"a.ts\""), (Some("ts"), Some("title=\"a.ts\"")));
    /// ```
    pub fn split_info(info: &str) -> (Option<&str>, Option<&str>) {
        let info = info.trim();
        if info.is_empty() {
            return (None, None);
        }
        match info.split_once(char::is_whitespace) {
            Some((lang, meta)) => {
                let meta = meta.trim();
                (Some(lang), (!meta.is_empty()).then_some(meta))
            }
            None => (Some(info), None),
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Code(Code),
    /// Raw HTML passed through verbatim.
    Raw(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::new(value))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Self::Code(code) => Some(code),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Code> for Node {
    fn from(code: Code) -> Self {
        Self::Code(code)
    }
}

/// Root of a document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_preserve_order_and_replace() {
        let mut attrs = Attrs::from([("href", "/a"), ("class", "x")]);
        attrs.set("href", "/b");
        attrs.set("id", "top");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["href", "class", "id"]);
        assert_eq!(attrs.get("href"), Some("/b"));
        assert_eq!(attrs.remove("class"), Some("x".to_string()));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_add_class() {
        let mut elem = Element::new("pre");
        elem.add_class("line-numbers");
        elem.add_class("has-highlight");
        elem.add_class("line-numbers");
        assert_eq!(elem.get_attr("class"), Some("line-numbers has-highlight"));
    }

    #[test]
    fn test_text_content() {
        let elem = Element::new("p")
            .child(Node::text("a "))
            .child(Element::new("em").child(Node::text("b")));
        assert_eq!(elem.text_content(), "a b");
    }

    #[test]
    fn test_split_info() {
        assert_eq!(Code::split_info(""), (None, None));
        assert_eq!(Code::split_info("rust"), (Some("rust"), None));
        assert_eq!(
            Code::split_info("ts title=\"a.ts\" {1}"),
            (Some("ts"), Some("title=\"a.ts\" {1}"))
        );
        assert_eq!(Code::split_info("  sh   "), (Some("sh"), None));
    }
}
