//! Root application module.
//!
//! The widget's host page supplies everything through attributes on the
//! host element; [`App`] only hands them to the tree.

use leptos::prelude::*;

use crate::components::ScrollTree;
use crate::models::{HostParams, TreeOptions};

#[component]
pub fn App(params: HostParams, options: TreeOptions) -> impl IntoView {
    view! { <ScrollTree params=params options=options /> }
}
