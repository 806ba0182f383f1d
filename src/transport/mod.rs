//! Transport capability for job dispatch.
//!
//! The client composes over [`JobTransport`] instead of inheriting transport
//! behavior, so tests can substitute a mock implementation. The default
//! implementation is the reqwest-backed [`HttpTransport`].

mod http;

pub use http::{HttpTransport, TransportError};

use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;

/// Capability injected into service clients: a JSON `POST` plus status-URL
/// extraction from the dispatch response.
#[async_trait]
pub trait JobTransport: Send + Sync {
    /// Issue a `POST` with a JSON body to a path under the API base URL and
    /// return the parsed JSON response.
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value>;

    /// Extract the status/polling URL from a dispatch response.
    fn parse_status_url(&self, response: &serde_json::Value) -> Result<String> {
        parse_status_url(response)
    }
}

/// Shared extraction routine: dispatch responses carry the polling URL in a
/// top-level `status_url` field.
pub fn parse_status_url(response: &serde_json::Value) -> Result<String> {
    response
        .get("status_url")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| {
            Error::response_with_context(
                "missing status_url in dispatch response",
                ErrorContext::new()
                    .with_field_path("status_url")
                    .with_source("status_url_parser"),
            )
        })
}
