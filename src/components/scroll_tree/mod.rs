//! The tree widget as a Leptos component.
//!
//! Leptos owns only the root `<ul>`. Everything below it is built and
//! mutated by the [`TreeController`](crate::core::TreeController) through
//! [`WebDom`].

mod web_dom;

pub use web_dom::{BrowserTree, WebDom, listen_for_toggles};

use std::rc::Rc;

use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::models::{HostParams, TreeOptions};
use crate::utils::{HttpFetcher, dom};

/// Lazily loading page tree.
///
/// On mount it resolves the `label` parameter, starts listening for toggle
/// clicks and loads the path from `params.root_title` to
/// `params.current_title`.
#[component]
pub fn ScrollTree(params: HostParams, options: TreeOptions) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Ul>::new();
    let list_class = options.css.list.clone();

    // Attach once, when the root list exists
    let mut pending = Some((params, options));
    Effect::new(move || {
        let Some(list) = list_ref.get() else {
            return;
        };
        let Some((params, options)) = pending.take() else {
            return;
        };

        let web_dom = match WebDom::current() {
            Ok(web_dom) => web_dom,
            Err(e) => {
                warn!("Tree not attached: {}", e);
                return;
            }
        };
        let label = options.label.resolve(dom::session_item);
        let fetcher = HttpFetcher::new(options.timeout_ms);
        let root: web_sys::Element = list.unchecked_into();
        let tree = Rc::new(BrowserTree::new(web_dom, fetcher, options, params, label, root));

        listen_for_toggles(&tree);
        spawn_local(async move {
            let _ = tree.load_initial().await;
        });
    });

    view! { <ul node_ref=list_ref class=list_class></ul> }
}
