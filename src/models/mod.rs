//! Data models for the tree widget.
//!
//! - [`TreeNode`], [`NodeKind`] - Wire format and its leaf/collapsed/expanded reading
//! - [`TreeOptions`], [`CssClasses`], [`OptionOverrides`] - Widget configuration
//! - [`HostParams`] - Values read from the host page

mod host;
mod node;
mod options;

pub use host::HostParams;
pub use node::{NodeKind, TreeNode};
pub use options::{
    ChildrenTemplate, CssClasses, CssOverrides, ItemTemplate, LabelSource, OptionOverrides,
    TreeOptions, default_child_li, default_children_ul,
};
