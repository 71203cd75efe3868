//! Fenced code block → copy-code widget.
//!
//! Every `Code` node is replaced by a wrapper that carries the decorative
//! header, the copy button, and finally the code node itself:
//!
//! ```text
//! div.copy-code-wrapper[.has-title][.code-language-{lang}]
//! ├── div.copy-code-inner
//! │   ├── span.dot-code-dots > span.dot-code-dot ×3
//! │   ├── span.code-icon.icon-language-{lang}
//! │   ├── span.copy-code-title[.has-title] > "{title}"
//! │   ├── span.copy-code-label.sr-only > "Code in {Language}"   (lang only)
//! │   └── button.copy-code-button[data-code][data-lang] > span.copy-code-button-icon
//! └── <code node, meta stripped of title="...">
//! ```

use rustc_hash::FxHashMap;

use super::Transform;
use crate::pipeline::meta::parse_meta;
use crate::tree::{Attrs, Code, Document, Element, Node, Visit, visit_slots_mut};

const WRAPPER_CLASS: &str = "copy-code-wrapper";

/// Built-in display names for language ids.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("tsx", "React / TypeScript"),
    ("jsx", "React / JavaScript"),
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("ts", "TypeScript"),
    ("typescript", "TypeScript"),
    ("svelte", "Svelte"),
    ("md", "Markdown"),
    ("html", "HTML"),
    ("bash", "Bash"),
    ("json", "JSON"),
    ("css", "CSS"),
    ("sh", "Bash"),
    ("vue", "Vue"),
    ("python", "Python"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("php", "PHP"),
    ("react", "React"),
];

// =============================================================================
// Language names
// =============================================================================

/// Language id → display name lookup. Unknown ids map to themselves.
#[derive(Debug, Clone, Default)]
pub struct LanguageNames {
    extra: FxHashMap<String, String>,
}

impl LanguageNames {
    /// Built-in table extended (and overridden) by `extra`.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            extra: extra
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn display_name<'a>(&'a self, lang: &'a str) -> &'a str {
        if let Some(name) = self.extra.get(lang) {
            return name;
        }
        LANGUAGE_NAMES
            .iter()
            .find(|(id, _)| *id == lang)
            .map_or(lang, |&(_, name)| name)
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Typed description of the widget wrapped around one code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCodeWidget<'a> {
    pub title: Option<String>,
    pub lang: Option<&'a str>,
    /// Display name for the screen-reader label.
    pub language_name: Option<&'a str>,
    /// Raw source attached to the copy button.
    pub source: &'a str,
}

impl<'a> CopyCodeWidget<'a> {
    /// An empty `title=""` counts as no title.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Class list: base, then `has-title`, then `code-language-{lang}`.
    pub fn wrapper_class(&self) -> String {
        let mut class = String::from(WRAPPER_CLASS);
        if self.has_title() {
            class.push_str(" has-title");
        }
        if let Some(lang) = self.lang {
            class.push_str(" code-language-");
            class.push_str(lang);
        }
        class
    }

    /// Build the wrapper with its header. The code node goes in last.
    pub fn into_wrapper(self) -> Element {
        let dots = Element::with_class("span", "dot-code-dots").children(
            (0..3).map(|_| Element::with_class("span", "dot-code-dot").into()),
        );

        let icon_class = match self.lang {
            Some(lang) => format!("code-icon icon-language-{lang}"),
            None => "code-icon ".to_string(),
        };
        let icon = Element::with_class("span", icon_class);

        let title_class = if self.has_title() {
            "copy-code-title has-title"
        } else {
            "copy-code-title"
        };
        let title = Element::with_class("span", title_class)
            .child(Node::text(self.title.as_deref().unwrap_or_default()));

        let label = self.language_name.map(|name| {
            Element::with_class("span", "copy-code-label sr-only")
                .child(Node::text(format!("Code in {name}")))
        });

        let mut button_attrs = Attrs::from([
            ("aria-label", "Copy code to clipboard"),
            ("class", "copy-code-button"),
            ("data-code", self.source),
        ]);
        if let Some(lang) = self.lang {
            button_attrs.set("data-lang", lang);
        }
        let button = Element::with_attrs("button", button_attrs)
            .child(Element::with_class("span", "copy-code-button-icon"));

        let mut inner = Element::with_class("div", "copy-code-inner")
            .child(dots)
            .child(icon)
            .child(title);
        if let Some(label) = label {
            inner = inner.child(label);
        }
        let inner = inner.child(button);

        Element::with_class("div", self.wrapper_class()).child(inner)
    }
}

// =============================================================================
// Transform
// =============================================================================

/// Wraps every fenced code block in a [`CopyCodeWidget`].
#[derive(Debug, Clone, Default)]
pub struct CodeBlockTransform {
    names: LanguageNames,
}

impl CodeBlockTransform {
    pub fn new(names: LanguageNames) -> Self {
        Self { names }
    }

    fn wrap(&self, mut code: Code) -> Element {
        let meta = parse_meta(code.meta.as_deref());
        code.meta = (!meta.remainder.is_empty()).then_some(meta.remainder);

        let widget = CopyCodeWidget {
            title: meta.title,
            lang: code.lang.as_deref(),
            language_name: code
                .lang
                .as_deref()
                .map(|lang| self.names.display_name(lang)),
            source: &code.value,
        };

        widget.into_wrapper().child(code)
    }
}

impl Transform for CodeBlockTransform {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn apply(&self, doc: &mut Document) {
        visit_slots_mut(&mut doc.children, &mut |parent, index| {
            let Node::Code(code) = &mut parent[index] else {
                return Visit::Continue;
            };
            let code = std::mem::take(code);
            parent[index] = self.wrap(code).into();
            Visit::Skip
        });
    }
}
