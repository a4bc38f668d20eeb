//! Tree endpoint requests and the transport capability.

use std::future::Future;

use super::error::FetchError;
use crate::config::{DIRECT_CHILDREN_PATH, RECURSIVE_CHILDREN_PATH, params};
use crate::models::TreeNode;

/// The two read-only tree endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Whole subtree down to the current page
    RecursiveChildren,
    /// One level below a parent
    DirectChildren,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::RecursiveChildren => RECURSIVE_CHILDREN_PATH,
            Self::DirectChildren => DIRECT_CHILDREN_PATH,
        }
    }

    /// Join the endpoint path onto a context path.
    pub fn url(self, context_path: &str) -> String {
        format!("{}{}", context_path.trim_end_matches('/'), self.path())
    }
}

/// A GET request against one of the tree endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRequest {
    pub endpoint: Endpoint,
    /// Endpoint URL without query string
    pub url: String,
    /// Query parameters, in send order
    pub params: Vec<(&'static str, String)>,
}

impl TreeRequest {
    /// Request for the subtree under `parent`, expanded down to `current`.
    pub fn recursive(
        context_path: &str,
        space_id: &str,
        parent: &str,
        current: &str,
        label: &str,
    ) -> Self {
        Self {
            endpoint: Endpoint::RecursiveChildren,
            url: Endpoint::RecursiveChildren.url(context_path),
            params: vec![
                (params::SPACE_ID, space_id.to_string()),
                (params::PARENT, parent.to_string()),
                (params::CURRENT, current.to_string()),
                (params::LABEL, label.to_string()),
            ],
        }
    }

    /// Request for the direct children of `parent`, located at `parent_link`.
    pub fn direct(
        context_path: &str,
        space_id: &str,
        parent: &str,
        parent_link: &str,
        label: &str,
    ) -> Self {
        Self {
            endpoint: Endpoint::DirectChildren,
            url: Endpoint::DirectChildren.url(context_path),
            params: vec![
                (params::SPACE_ID, space_id.to_string()),
                (params::PARENT, parent.to_string()),
                (params::PARENT_LINK, parent_link.to_string()),
                (params::LABEL, label.to_string()),
            ],
        }
    }

    /// Look up a query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transport for tree requests.
pub trait TreeFetcher {
    /// Perform the request and decode the node array.
    fn fetch_nodes(
        &self,
        request: &TreeRequest,
    ) -> impl Future<Output = Result<Vec<TreeNode>, FetchError>>;
}
