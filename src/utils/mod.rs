//! Browser access, networking and markup helpers.
//!
//! - [`dom`] - Window, document and sessionStorage access
//! - [`HttpFetcher`], [`fetch_json`] - Fetch API with timeout
//! - [`markup`] - Typed, escaped markup fragments

pub mod dom;
mod fetch;
pub mod markup;

pub use fetch::{HttpFetcher, RaceResult, fetch_json, race_with_timeout, request_url};
