//! Parameters read from the host page.

use crate::config::host_attrs;

/// Values the host element exposes through data attributes.
///
/// Read once at attach time; later attribute changes are not observed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostParams {
    /// Space identifier sent as `spaceId`
    pub space_id: String,
    /// Title of the tree root, the `parent` of the initial request
    pub root_title: String,
    /// Title of the page being viewed
    pub current_title: String,
    /// Request base path, if the host sets one
    pub context_path: Option<String>,
    /// Raw JSON option overrides
    pub options: Option<String>,
}

impl HostParams {
    /// Build params from an attribute lookup. Missing values become empty.
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            space_id: attribute(host_attrs::SPACE_ID).unwrap_or_default(),
            root_title: attribute(host_attrs::ROOT).unwrap_or_default(),
            current_title: attribute(host_attrs::CURRENT_TITLE).unwrap_or_default(),
            context_path: attribute(host_attrs::CONTEXT_PATH).filter(|path| !path.is_empty()),
            options: attribute(host_attrs::OPTIONS).filter(|json| !json.trim().is_empty()),
        }
    }

    /// Read params from a host element's data attributes.
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}
