//! Lazily loading page tree for wiki space navigation.
//!
//! The tree shows the path from a space's root page to the current page.
//! Collapsed branches fetch their direct children the first time they are
//! opened.
//!
//! - [`core`] - Rendering, toggle handling and loads, independent of the browser
//! - [`models`] - Wire format, options and host parameters
//! - [`components`] - Leptos component and the web-sys DOM backend
//! - [`utils`] - Browser helpers, fetch and markup

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
