//! Document tree.
//!
//! A closed set of node kinds shared by the markdown converter, the
//! transform passes and the HTML serializer:
//!
//! | Kind | Holds |
//! |------|-------|
//! | [`Document`] | root child list |
//! | [`Node::Element`] | tag, ordered [`Attrs`], children |
//! | [`Node::Text`] | text value |
//! | [`Node::Code`] | fenced code source, optional language and meta |
//! | [`Node::Raw`] | raw HTML passed through verbatim |

mod node;
mod render;
mod visit;

pub use node::{Attrs, Code, Document, Element, Node, Text};
pub use render::{node_to_html, to_html};
pub use visit::{Visit, visit_slots_mut, walk_elements, walk_elements_mut};
