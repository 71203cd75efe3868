//! Tree traversal helpers.
//!
//! Passes never hold a parent pointer. Instead the visitor hands out the
//! parent's child list together with the slot index, so a pass can replace
//! `children[index]` in place without disturbing siblings.

use super::{Element, Node};

/// What to do after a slot has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the node currently occupying the slot.
    Continue,
    /// Do not descend into the slot (used after a replacement).
    Skip,
}

/// Visit every slot of the tree in document order.
///
/// `f` receives the parent's child list and the index of the current slot.
/// It may replace the node at that index but must not change the length of
/// the list; returning [`Visit::Skip`] prevents the traversal from entering
/// whatever now occupies the slot.
pub fn visit_slots_mut<F>(children: &mut Vec<Node>, f: &mut F)
where
    F: FnMut(&mut Vec<Node>, usize) -> Visit,
{
    for index in 0..children.len() {
        if f(children, index) == Visit::Skip {
            continue;
        }
        if let Node::Element(elem) = &mut children[index] {
            visit_slots_mut(&mut elem.children, f);
        }
    }
}

/// Call `f` on every element, parents before their children.
///
/// Children are read after `f` returns, so a rewrite of `elem.children`
/// is what the traversal descends into.
pub fn walk_elements_mut<F>(children: &mut [Node], f: &mut F)
where
    F: FnMut(&mut Element),
{
    for node in children {
        if let Node::Element(elem) = node {
            f(elem);
            walk_elements_mut(&mut elem.children, f);
        }
    }
}

/// Call `f` on every element, read-only.
pub fn walk_elements<'a, F>(children: &'a [Node], f: &mut F)
where
    F: FnMut(&'a Element),
{
    for node in children {
        if let Node::Element(elem) = node {
            f(elem);
            walk_elements(&elem.children, f);
        }
    }
}
