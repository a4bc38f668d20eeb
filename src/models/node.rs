//! Tree node wire format.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_NODE_TYPE;

fn default_node_type() -> String {
    DEFAULT_NODE_TYPE.to_string()
}

/// One node as returned by the tree endpoints.
///
/// `children` is deliberately tri-state:
/// - `None` (key absent or `null`): a leaf that can never expand
/// - `Some([])`: expandable, nothing loaded yet
/// - `Some([..])`: expandable and pre-populated
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeNode {
    /// Server page id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Page title, also the parent key of child requests
    pub title: String,
    /// Navigable URL of the page
    pub link: String,
    /// Classification key for the per-type CSS class
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

/// How the renderer treats a node, derived from its `children`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// No `children` key: never expandable
    Leaf,
    /// Empty `children`: expandable, loaded on demand
    Collapsed,
    /// Non-empty `children`: rendered expanded
    Expanded(&'a [TreeNode]),
}

impl TreeNode {
    /// Create a leaf node of the default type.
    pub fn leaf(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            link: link.into(),
            node_type: default_node_type(),
            children: None,
        }
    }

    /// Replace the children, making the node expandable.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    pub fn kind(&self) -> NodeKind<'_> {
        match self.children.as_deref() {
            None => NodeKind::Leaf,
            Some([]) => NodeKind::Collapsed,
            Some(children) => NodeKind::Expanded(children),
        }
    }
}
