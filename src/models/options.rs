//! Widget options: class names, templates, request settings.
//!
//! [`TreeOptions::default`] holds the stock configuration. Hosts adjust it
//! with an [`OptionOverrides`], merged field by field, which can also be
//! read from JSON.

use std::collections::BTreeMap;

use leptos::logging::warn;
use serde::Deserialize;

use super::{HostParams, TreeNode};
use crate::config::{
    DEFAULT_CONTEXT_PATH, DEFAULT_LABEL, FETCH_TIMEOUT_MS, ITEM_TAG, LABEL_SESSION_KEY, LINK_TAG,
    LIST_TAG, TOGGLE_TAG, css,
};
use crate::utils::markup::Element;

/// Builds the container that holds an item's children.
pub type ChildrenTemplate = fn(&TreeOptions) -> Element;

/// Builds one item for a node.
pub type ItemTemplate = fn(&TreeNode, &TreeOptions) -> Element;

// =============================================================================
// CSS Classes
// =============================================================================

/// CSS class names keyed by semantic state, plus the per-type lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssClasses {
    pub ancestor: String,
    pub current: String,
    pub leaf: String,
    pub loading: String,
    pub collapsed: String,
    pub expanded: String,
    pub error: String,
    /// Class of the click target inside an item
    pub toggle: String,
    /// Class of nested children containers
    pub list: String,
    /// Extra node type → class entries, consulted first
    pub types: BTreeMap<String, String>,
    /// Class for node types nothing else maps; empty adds no class
    pub unknown_type: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            ancestor: css::ANCESTOR.to_string(),
            current: css::CURRENT.to_string(),
            leaf: css::LEAF.to_string(),
            loading: css::LOADING.to_string(),
            collapsed: css::COLLAPSED.to_string(),
            expanded: css::EXPANDED.to_string(),
            error: css::ERROR.to_string(),
            toggle: css::TOGGLE.to_string(),
            list: css::LIST.to_string(),
            types: BTreeMap::new(),
            unknown_type: String::new(),
        }
    }
}

impl CssClasses {
    /// Resolve the class for a node type.
    ///
    /// Order: explicit `types` entry, then the named class whose key equals
    /// the type (`ancestor`, `current`, `leaf` and so on), then `unknown_type`.
    pub fn class_for_type(&self, node_type: &str) -> &str {
        if let Some(class) = self.types.get(node_type) {
            return class;
        }
        match node_type {
            "ancestor" => &self.ancestor,
            "current" => &self.current,
            "leaf" => &self.leaf,
            "loading" => &self.loading,
            "collapsed" => &self.collapsed,
            "expanded" => &self.expanded,
            "error" => &self.error,
            "toggle" => &self.toggle,
            "list" => &self.list,
            _ => &self.unknown_type,
        }
    }
}

// =============================================================================
// Label Source
// =============================================================================

/// Where the `label` request parameter comes from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum LabelSource {
    /// Always send this value
    Fixed { value: String },
    /// Read sessionStorage once at attach time, with a fallback
    Session {
        #[serde(default = "default_session_key")]
        key: String,
        #[serde(default = "default_label")]
        fallback: String,
    },
}

fn default_session_key() -> String {
    LABEL_SESSION_KEY.to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for LabelSource {
    fn default() -> Self {
        Self::Fixed {
            value: default_label(),
        }
    }
}

impl LabelSource {
    /// Resolve the label, using `lookup` for storage reads.
    pub fn resolve(&self, lookup: impl FnOnce(&str) -> Option<String>) -> String {
        match self {
            Self::Fixed { value } => value.clone(),
            Self::Session { key, fallback } => lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.clone()),
        }
    }
}

// =============================================================================
// Default Templates
// =============================================================================

/// `<ul class="nav"></ul>`
pub fn default_children_ul(options: &TreeOptions) -> Element {
    Element::new(LIST_TAG).with_class(options.css.list.as_str())
}

/// `<li class="{type}"><span class="sp-toggle"></span><a href="{link}">{title}</a></li>`
pub fn default_child_li(node: &TreeNode, options: &TreeOptions) -> Element {
    Element::new(ITEM_TAG)
        .with_class(options.css.class_for_type(&node.node_type))
        .with_child(Element::new(TOGGLE_TAG).with_class(options.css.toggle.as_str()))
        .with_child(
            Element::new(LINK_TAG)
                .with_attribute("href", node.link.as_str())
                .with_text(node.title.as_str()),
        )
}

// =============================================================================
// Tree Options
// =============================================================================

/// Full widget configuration, passed explicitly to render and fetch code.
#[derive(Clone)]
pub struct TreeOptions {
    /// Base path prepended to endpoint paths
    pub context_path: String,
    pub css: CssClasses,
    pub label: LabelSource,
    pub timeout_ms: i32,
    pub render_children_ul: ChildrenTemplate,
    pub render_child_li: ItemTemplate,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            context_path: DEFAULT_CONTEXT_PATH.to_string(),
            css: CssClasses::default(),
            label: LabelSource::default(),
            timeout_ms: FETCH_TIMEOUT_MS,
            render_children_ul: default_children_ul,
            render_child_li: default_child_li,
        }
    }
}

impl TreeOptions {
    /// Apply overrides on top of these options. `None` fields keep their value.
    pub fn merge(mut self, overrides: OptionOverrides) -> Self {
        if let Some(context_path) = overrides.context_path {
            self.context_path = context_path;
        }
        self.css = overrides.css.apply(self.css);
        if let Some(label) = overrides.label {
            self.label = label;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        if let Some(template) = overrides.render_children_ul {
            self.render_children_ul = template;
        }
        if let Some(template) = overrides.render_child_li {
            self.render_child_li = template;
        }
        self
    }

    /// Build options for a host element.
    ///
    /// The host's `data-context-path` is used unless its `data-options`
    /// JSON sets `contextPath`. Invalid JSON is logged and ignored.
    pub fn for_host(params: &HostParams) -> Self {
        let mut overrides = match params.options.as_deref() {
            Some(json) => OptionOverrides::from_json(json).unwrap_or_else(|e| {
                warn!("Ignoring invalid tree options: {}", e);
                OptionOverrides::default()
            }),
            None => OptionOverrides::default(),
        };
        if overrides.context_path.is_none() {
            overrides.context_path = params.context_path.clone();
        }
        Self::default().merge(overrides)
    }
}

// =============================================================================
// Overrides
// =============================================================================

/// Per-class overrides. `types` entries are added to the existing map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CssOverrides {
    pub ancestor: Option<String>,
    pub current: Option<String>,
    pub leaf: Option<String>,
    pub loading: Option<String>,
    pub collapsed: Option<String>,
    pub expanded: Option<String>,
    pub error: Option<String>,
    pub toggle: Option<String>,
    pub list: Option<String>,
    pub types: BTreeMap<String, String>,
    pub unknown_type: Option<String>,
}

impl CssOverrides {
    fn apply(self, mut css: CssClasses) -> CssClasses {
        let fields = [
            (self.ancestor, &mut css.ancestor),
            (self.current, &mut css.current),
            (self.leaf, &mut css.leaf),
            (self.loading, &mut css.loading),
            (self.collapsed, &mut css.collapsed),
            (self.expanded, &mut css.expanded),
            (self.error, &mut css.error),
            (self.toggle, &mut css.toggle),
            (self.list, &mut css.list),
            (self.unknown_type, &mut css.unknown_type),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        css.types.extend(self.types);
        css
    }
}

/// Optional replacement for every recognized option.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionOverrides {
    pub context_path: Option<String>,
    pub css: CssOverrides,
    pub label: Option<LabelSource>,
    pub timeout_ms: Option<i32>,
    #[serde(skip)]
    pub render_children_ul: Option<ChildrenTemplate>,
    #[serde(skip)]
    pub render_child_li: Option<ItemTemplate>,
}

impl OptionOverrides {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
