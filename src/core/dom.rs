//! DOM capability used by the renderer and the controller.
//!
//! The widget only needs a handful of operations: append markup, clear a
//! container, walk to a parent or a direct child, and read/mutate classes.
//! [`MemoryDom`](super::MemoryDom) implements it in memory,
//! [`WebDom`](crate::components::WebDom) on top of web-sys.

use super::error::DomError;
use crate::utils::markup::Element;

pub trait TreeDom {
    /// Handle to one node. Equality is node identity.
    type Node: Clone + PartialEq;

    /// Build `element` and append it as the last child of `parent`.
    fn append(&self, parent: &Self::Node, element: &Element) -> Result<Self::Node, DomError>;

    /// Remove every child of `container`.
    fn clear(&self, container: &Self::Node);

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Lowercase tag name; empty for non-element nodes.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// First direct child element with the given tag.
    fn child_by_tag(&self, node: &Self::Node, tag: &str) -> Option<Self::Node>;

    /// Add a class. Empty names are ignored.
    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Concatenated text of all descendants.
    fn text(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Swap one class for another.
    fn replace_class(&self, node: &Self::Node, from: &str, to: &str) {
        self.remove_class(node, from);
        self.add_class(node, to);
    }
}
