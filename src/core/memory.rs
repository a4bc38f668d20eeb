//! In-memory DOM.
//!
//! An arena of element and text nodes implementing [`TreeDom`]. Used by the
//! tests and to produce static HTML snapshots of a rendered tree.

use std::cell::RefCell;

use super::dom::TreeDom;
use super::error::DomError;
use crate::utils::markup::{Element, Markup};

/// Handle to a node in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeData {
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct MemoryNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed DOM. Cleared nodes stay in the arena, detached.
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<MemoryNode>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element, typically the widget root.
    pub fn create(&self, element: &Element) -> NodeId {
        self.build(element, None)
    }

    fn push(&self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(MemoryNode {
            data,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn build(&self, element: &Element, parent: Option<NodeId>) -> NodeId {
        let mut classes: Vec<String> = Vec::with_capacity(element.classes.len());
        for class in &element.classes {
            if !class.is_empty() && !classes.contains(class) {
                classes.push(class.clone());
            }
        }
        let id = self.push(
            NodeData::Element {
                tag: element.tag.to_lowercase(),
                classes,
                attributes: element.attributes.clone(),
            },
            parent,
        );

        for child in &element.children {
            let child_id = match child {
                Markup::Element(child) => self.build(child, Some(id)),
                Markup::Text(text) => self.push(NodeData::Text(text.clone()), Some(id)),
            };
            self.nodes.borrow_mut()[id.0].children.push(child_id);
        }
        id
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes.borrow()[id.0].data, NodeData::Element { .. })
    }

    /// Direct child elements, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let children = self.nodes.borrow()[id.0].children.clone();
        children
            .into_iter()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    /// All descendant elements in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        for child in self.children(id) {
            found.push(child);
            found.extend(self.descendants(child));
        }
        found
    }

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        match &self.nodes.borrow()[id.0].data {
            NodeData::Element { classes, .. } => classes.clone(),
            NodeData::Text(_) => Vec::new(),
        }
    }

    /// Rebuild the markup of an element subtree. `None` for text nodes.
    pub fn snapshot(&self, id: NodeId) -> Option<Element> {
        let nodes = self.nodes.borrow();
        Self::snapshot_in(&nodes, id)
    }

    fn snapshot_in(nodes: &[MemoryNode], id: NodeId) -> Option<Element> {
        let node = &nodes[id.0];
        let NodeData::Element {
            tag,
            classes,
            attributes,
        } = &node.data
        else {
            return None;
        };

        let children = node
            .children
            .iter()
            .filter_map(|child| match &nodes[child.0].data {
                NodeData::Text(text) => Some(Markup::Text(text.clone())),
                NodeData::Element { .. } => Self::snapshot_in(nodes, *child).map(Markup::Element),
            })
            .collect();

        Some(Element {
            tag: tag.clone(),
            classes: classes.clone(),
            attributes: attributes.clone(),
            children,
        })
    }

    /// Serialize an element subtree to HTML.
    pub fn to_html(&self, id: NodeId) -> String {
        self.snapshot(id).map(|e| e.to_string()).unwrap_or_default()
    }
}

impl TreeDom for MemoryDom {
    type Node = NodeId;

    fn append(&self, parent: &NodeId, element: &Element) -> Result<NodeId, DomError> {
        if !self.is_element(*parent) {
            return Err(DomError::AppendFailed("parent is a text node".to_string()));
        }
        let id = self.build(element, Some(*parent));
        self.nodes.borrow_mut()[parent.0].children.push(id);
        Ok(id)
    }

    fn clear(&self, container: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[container.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    fn tag_name(&self, node: &NodeId) -> String {
        match &self.nodes.borrow()[node.0].data {
            NodeData::Element { tag, .. } => tag.clone(),
            NodeData::Text(_) => String::new(),
        }
    }

    fn child_by_tag(&self, node: &NodeId, tag: &str) -> Option<NodeId> {
        self.children(*node)
            .into_iter()
            .find(|child| self.tag_name(child).eq_ignore_ascii_case(tag))
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if class.is_empty() {
            return;
        }
        if let NodeData::Element { classes, .. } = &mut self.nodes.borrow_mut()[node.0].data
            && !classes.iter().any(|c| c == class)
        {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        if let NodeData::Element { classes, .. } = &mut self.nodes.borrow_mut()[node.0].data {
            classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        match &self.nodes.borrow()[node.0].data {
            NodeData::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeData::Text(_) => false,
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let children = {
            let nodes = self.nodes.borrow();
            match &nodes[node.0].data {
                NodeData::Text(text) => return text.clone(),
                NodeData::Element { .. } => nodes[node.0].children.clone(),
            }
        };
        children.iter().map(|child| self.text(child)).collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        match &self.nodes.borrow()[node.0].data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            NodeData::Text(_) => None,
        }
    }
}
