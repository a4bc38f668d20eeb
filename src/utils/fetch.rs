//! Network fetching with timeout support.
//!
//! Provides the browser [`TreeFetcher`]: a GET through the Fetch API raced
//! against a timeout, decoded as a JSON node array.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Url};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::{TreeFetcher, TreeRequest};
use crate::models::TreeNode;
use crate::utils::dom;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined when the timer fires
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Build an absolute URL with query parameters, resolved against the page.
pub fn request_url(url: &str, params: &[(&str, String)]) -> Result<String, FetchError> {
    let base = dom::location_href().ok_or(FetchError::NoWindow)?;
    let url = Url::new_with_base(url, &base).map_err(|_| FetchError::RequestCreationFailed)?;
    let search = url.search_params();
    for (name, value) in params {
        search.append(name, value);
    }
    Ok(url.href())
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout_ms: i32) -> Result<T, FetchError> {
    let text = fetch_url(url, timeout_ms).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Fetch text from a URL using the Fetch API with timeout.
async fn fetch_url(url: &str, timeout_ms: i32) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    let _ = request.headers().set("Accept", "application/json");

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}

// =============================================================================
// Tree Fetcher
// =============================================================================

/// [`TreeFetcher`] backed by the browser Fetch API.
#[derive(Clone, Copy, Debug)]
pub struct HttpFetcher {
    timeout_ms: i32,
}

impl HttpFetcher {
    pub fn new(timeout_ms: i32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT_MS)
    }
}

impl TreeFetcher for HttpFetcher {
    async fn fetch_nodes(&self, request: &TreeRequest) -> Result<Vec<TreeNode>, FetchError> {
        let url = request_url(&request.url, &request.params)?;
        fetch_json(&url, self.timeout_ms).await
    }
}
