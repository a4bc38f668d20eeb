//! Browser API access.
//!
//! Provides safe, consistent access to browser globals with `Option`
//! results instead of panics.

use web_sys::{Document, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Read one sessionStorage value.
pub fn session_item(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

/// Current page URL, used as the base for relative request URLs.
pub fn location_href() -> Option<String> {
    window()?.location().href().ok()
}
