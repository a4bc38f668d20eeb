//! Core widget logic, independent of the browser.
//!
//! - [`TreeController`] - Loads, expansion and toggle handling
//! - [`render_subtree`], [`render_html`] - Recursive list rendering
//! - [`Transition`] - Toggle state machine
//! - [`TreeDom`], [`MemoryDom`] - DOM capability and its in-memory backend
//! - [`TreeFetcher`], [`TreeRequest`] - Transport capability and requests

mod controller;
mod dom;
pub mod error;
mod memory;
mod render;
mod request;
mod toggle;

pub use controller::TreeController;
pub use dom::TreeDom;
pub use memory::{MemoryDom, NodeId};
pub use render::{render_html, render_subtree};
pub use request::{Endpoint, TreeFetcher, TreeRequest};
pub use toggle::Transition;
