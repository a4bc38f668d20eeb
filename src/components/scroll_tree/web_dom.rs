//! [`TreeDom`] on top of web-sys.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::core::TreeController;
use crate::core::TreeDom;
use crate::core::error::DomError;
use crate::utils::HttpFetcher;
use crate::utils::dom;
use crate::utils::markup::{self, Markup};

/// Controller wired to the live document and the Fetch API.
pub type BrowserTree = TreeController<WebDom, HttpFetcher>;

/// The browser document as a [`TreeDom`].
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Use the page's document.
    pub fn current() -> Result<Self, DomError> {
        dom::document().map(Self::new).ok_or(DomError::NoDocument)
    }

    fn build(&self, element: &markup::Element) -> Result<Element, DomError> {
        let node = self
            .document
            .create_element(&element.tag)
            .map_err(|_| DomError::CreateFailed(element.tag.clone()))?;

        for class in &element.classes {
            self.add_class(&node, class);
        }
        for (name, value) in &element.attributes {
            node.set_attribute(name, value)
                .map_err(|e| DomError::CreateFailed(format!("{}[{name}]: {e:?}", element.tag)))?;
        }
        for child in &element.children {
            let child: web_sys::Node = match child {
                Markup::Element(child) => self.build(child)?.into(),
                Markup::Text(text) => self.document.create_text_node(text).into(),
            };
            node.append_child(&child)
                .map_err(|e| DomError::AppendFailed(format!("{e:?}")))?;
        }
        Ok(node)
    }
}

impl TreeDom for WebDom {
    type Node = Element;

    fn append(&self, parent: &Element, element: &markup::Element) -> Result<Element, DomError> {
        let node = self.build(element)?;
        parent
            .append_child(&node)
            .map_err(|e| DomError::AppendFailed(format!("{e:?}")))?;
        Ok(node)
    }

    fn clear(&self, container: &Element) {
        container.set_inner_html("");
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_lowercase()
    }

    fn child_by_tag(&self, node: &Element, tag: &str) -> Option<Element> {
        let mut child = node.first_element_child();
        while let Some(candidate) = child {
            if candidate.tag_name().eq_ignore_ascii_case(tag) {
                return Some(candidate);
            }
            child = candidate.next_element_sibling();
        }
        None
    }

    fn add_class(&self, node: &Element, class: &str) {
        if !class.is_empty() {
            let _ = node.class_list().add_1(class);
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if !class.is_empty() {
            let _ = node.class_list().remove_1(class);
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        !class.is_empty() && node.class_list().contains(class)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }
}

// =============================================================================
// Click Delegation
// =============================================================================

/// Listen for clicks on toggle controls anywhere under the tree root.
///
/// One listener on the root covers items rendered later. It lives as long
/// as the page.
pub fn listen_for_toggles(tree: &Rc<BrowserTree>) {
    let selector = format!(".{}", tree.options().css.toggle);
    let root = tree.root().clone();
    let handler_tree = Rc::clone(tree);

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(toggle)) = target.closest(&selector) else {
            return;
        };
        let toggle_node: &web_sys::Node = &toggle;
        if !handler_tree.root().contains(Some(toggle_node)) {
            return;
        }

        let tree = Rc::clone(&handler_tree);
        spawn_local(async move {
            // Failures are logged by the controller and shown as the error class
            let _ = tree.toggle(&toggle).await;
        });
    }) as Box<dyn Fn(Event)>);

    let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
