//! UI components built with Leptos.
//!
//! - [`ScrollTree`] - The tree widget mounted on the host element
//! - [`WebDom`] - Browser backend of [`TreeDom`](crate::core::TreeDom)

pub mod scroll_tree;

pub use scroll_tree::{ScrollTree, WebDom};
