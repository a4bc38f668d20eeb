//! Widget configuration constants.
//!
//! Centralizes the endpoint contract, host-page attribute names and the
//! defaults that [`TreeOptions`](crate::models::TreeOptions) starts from.

// =============================================================================
// Endpoints
// =============================================================================

/// Endpoint returning the whole subtree down to the current page.
pub const RECURSIVE_CHILDREN_PATH: &str = "/rest/treefilter/1.0/getchildrenrecursive";

/// Endpoint returning the direct children of one node.
pub const DIRECT_CHILDREN_PATH: &str = "/rest/treefilter/1.0/getchildren";

/// Default request base path.
pub const DEFAULT_CONTEXT_PATH: &str = "/";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Query parameter names shared by both endpoints.
pub mod params {
    pub const SPACE_ID: &str = "spaceId";
    pub const PARENT: &str = "parent";
    pub const CURRENT: &str = "current";
    pub const PARENT_LINK: &str = "parentLink";
    pub const LABEL: &str = "label";
}

// =============================================================================
// Label
// =============================================================================

/// Label value sent with every request unless configured otherwise.
pub const DEFAULT_LABEL: &str = "mvc";

/// sessionStorage key holding the page label.
pub const LABEL_SESSION_KEY: &str = "label";

// =============================================================================
// Markup
// =============================================================================

/// Tag of a rendered tree item.
pub const ITEM_TAG: &str = "li";

/// Tag of a nested children container.
pub const LIST_TAG: &str = "ul";

/// Tag of the link inside an item; its text and href feed child requests.
pub const LINK_TAG: &str = "a";

/// Tag of the toggle control inside an item.
pub const TOGGLE_TAG: &str = "span";

/// Node type the server uses for ordinary pages.
pub const DEFAULT_NODE_TYPE: &str = "normal";

/// Default CSS class names, keyed by semantic state.
pub mod css {
    pub const ANCESTOR: &str = "active";
    pub const CURRENT: &str = "active";
    pub const LEAF: &str = "leaf";
    pub const LOADING: &str = "sp-loading";
    pub const COLLAPSED: &str = "sp-collapsed";
    pub const EXPANDED: &str = "sp-expanded";
    pub const ERROR: &str = "sp-error";
    pub const TOGGLE: &str = "sp-toggle";
    pub const LIST: &str = "nav";
}

// =============================================================================
// Host Page
// =============================================================================

/// Id of the element the widget mounts into.
pub const HOST_ELEMENT_ID: &str = "scroll-tree";

/// Data attributes read from the host element at attach time.
pub mod host_attrs {
    pub const SPACE_ID: &str = "data-space-id";
    pub const ROOT: &str = "data-root";
    pub const CURRENT_TITLE: &str = "data-current-title";
    pub const CONTEXT_PATH: &str = "data-context-path";
    pub const OPTIONS: &str = "data-options";
}
