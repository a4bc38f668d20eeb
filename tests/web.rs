//! Browser tests for the web-sys DOM backend and click delegation.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use js_sys::Promise;
use scroll_tree::components::WebDom;
use scroll_tree::components::scroll_tree::{BrowserTree, listen_for_toggles};
use scroll_tree::core::{TreeDom, render_subtree};
use scroll_tree::models::{HostParams, TreeNode, TreeOptions};
use scroll_tree::utils::HttpFetcher;
use scroll_tree::utils::markup::Element;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn attached_root() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("ul").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Let spawned click handlers run.
async fn next_tick() {
    let tick = Promise::new(&mut |resolve, _| {
        let window = web_sys::window().unwrap();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(tick).await.unwrap();
}

fn click(element: &web_sys::Element) {
    element.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
}

fn attach_tree(dom: WebDom, root: web_sys::Element) -> Rc<BrowserTree> {
    let tree = Rc::new(BrowserTree::new(
        dom,
        HttpFetcher::default(),
        TreeOptions::default(),
        HostParams::default(),
        "mvc".to_string(),
        root,
    ));
    listen_for_toggles(&tree);
    tree
}

#[wasm_bindgen_test]
fn test_append_builds_markup() {
    let dom = WebDom::current().unwrap();
    let root = attached_root();

    let item = dom
        .append(
            &root,
            &Element::new("li")
                .with_class("leaf")
                .with_child(Element::new("a").with_attribute("href", "/a").with_text("A & B")),
        )
        .unwrap();

    assert_eq!(dom.tag_name(&item), "li");
    assert!(dom.has_class(&item, "leaf"));
    let link = dom.child_by_tag(&item, "a").unwrap();
    assert_eq!(dom.attribute(&link, "href").as_deref(), Some("/a"));
    assert_eq!(dom.text(&link), "A & B");
    assert_eq!(dom.parent(&item), Some(root));
}

#[wasm_bindgen_test]
fn test_class_mutation() {
    let dom = WebDom::current().unwrap();
    let root = attached_root();
    let item = dom.append(&root, &Element::new("li").with_class("sp-collapsed")).unwrap();

    dom.replace_class(&item, "sp-collapsed", "sp-loading");
    assert!(!dom.has_class(&item, "sp-collapsed"));
    assert!(dom.has_class(&item, "sp-loading"));

    dom.add_class(&item, "");
    assert!(!dom.has_class(&item, ""));
}

#[wasm_bindgen_test]
fn test_render_into_document() {
    let dom = WebDom::current().unwrap();
    let root = attached_root();
    let nodes = vec![
        TreeNode::leaf("A", "/a").with_children(vec![TreeNode::leaf("B", "/b")]),
        TreeNode::leaf("C", "/c").with_children(vec![]),
    ];

    let count = render_subtree(&dom, &root, &nodes, &TreeOptions::default()).unwrap();
    assert_eq!(count, 3);
    assert_eq!(root.child_element_count(), 2);

    let first = root.first_element_child().unwrap();
    assert!(dom.has_class(&first, "sp-expanded"));
    let nested = dom.child_by_tag(&first, "ul").unwrap();
    assert!(dom.has_class(&nested, "nav"));

    let second = first.next_element_sibling().unwrap();
    assert!(dom.has_class(&second, "sp-collapsed"));
    assert!(dom.child_by_tag(&second, "ul").is_none());

    dom.clear(&root);
    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn test_toggle_click_collapses_and_reveals() {
    let dom = WebDom::current().unwrap();
    let root = attached_root();
    let nodes = vec![TreeNode::leaf("A", "/a").with_children(vec![TreeNode::leaf("B", "/b")])];
    render_subtree(&dom, &root, &nodes, &TreeOptions::default()).unwrap();
    let _tree = attach_tree(dom.clone(), root.clone());

    let item = root.first_element_child().unwrap();
    let toggle = dom.child_by_tag(&item, "span").unwrap();

    click(&toggle);
    next_tick().await;
    assert!(dom.has_class(&item, "sp-collapsed"));
    assert!(!dom.has_class(&item, "sp-expanded"));
    assert!(dom.child_by_tag(&item, "ul").is_some());

    click(&toggle);
    next_tick().await;
    assert!(dom.has_class(&item, "sp-expanded"));
    assert!(!dom.has_class(&item, "sp-collapsed"));
}

#[wasm_bindgen_test]
async fn test_click_on_link_is_not_a_toggle() {
    let dom = WebDom::current().unwrap();
    let root = attached_root();
    let nodes = vec![TreeNode::leaf("A", "#a").with_children(vec![TreeNode::leaf("B", "#b")])];
    render_subtree(&dom, &root, &nodes, &TreeOptions::default()).unwrap();
    let _tree = attach_tree(dom.clone(), root.clone());

    let item = root.first_element_child().unwrap();
    click(&dom.child_by_tag(&item, "a").unwrap());
    next_tick().await;

    assert!(dom.has_class(&item, "sp-expanded"));
}

#[wasm_bindgen_test]
async fn test_toggle_outside_root_is_ignored() {
    let dom = WebDom::current().unwrap();
    let document = web_sys::window().unwrap().document().unwrap();

    // A toggle control wrapping the whole tree, e.g. a host page's own menu
    let outer_item = document.create_element("li").unwrap();
    outer_item.set_class_name("sp-expanded");
    document.body().unwrap().append_child(&outer_item).unwrap();
    let outer_toggle = document.create_element("span").unwrap();
    outer_toggle.set_class_name("sp-toggle");
    outer_item.append_child(&outer_toggle).unwrap();
    let root = document.create_element("ul").unwrap();
    outer_toggle.append_child(&root).unwrap();

    let nodes = vec![TreeNode::leaf("A", "#a")];
    render_subtree(&dom, &root, &nodes, &TreeOptions::default()).unwrap();
    let _tree = attach_tree(dom.clone(), root.clone());

    // The link's closest toggle is the outer one, above the root
    let item = root.first_element_child().unwrap();
    click(&dom.child_by_tag(&item, "a").unwrap());
    next_tick().await;

    assert_eq!(outer_item.class_name(), "sp-expanded");
    assert!(dom.has_class(&item, "leaf"));
}
