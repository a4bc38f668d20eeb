//! Error types for the tree widget.
//!
//! - [`FetchError`] - Network/fetch failures for the tree endpoints
//! - [`DomError`] - Failures building or attaching DOM nodes
//! - [`TreeError`] - Anything that puts an item into the error state
//!
//! None of these reach the user; a failed load only shows as the `error`
//! class on the affected item.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParseError(e.to_string())
    }
}

/// DOM construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Document not available")]
    NoDocument,
    #[error("Failed to create <{0}> element")]
    CreateFailed(String),
    #[error("Failed to attach node: {0}")]
    AppendFailed(String),
}

/// A failed tree load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Dom(#[from] DomError),
}
