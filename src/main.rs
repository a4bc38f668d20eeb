use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use scroll_tree::app::App;
use scroll_tree::config::HOST_ELEMENT_ID;
use scroll_tree::models::{HostParams, TreeOptions};

fn main() {
    console_error_panic_hook::set_once();

    let Some(host) = document().get_element_by_id(HOST_ELEMENT_ID) else {
        warn!("No #{} element, tree not mounted", HOST_ELEMENT_ID);
        return;
    };

    let params = HostParams::from_element(&host);
    let options = TreeOptions::for_host(&params);
    let host = host.unchecked_into::<web_sys::HtmlElement>();

    mount_to(host, move || view! { <App params=params.clone() options=options.clone() /> })
        .forget();
}
