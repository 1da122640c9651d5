//! Fetch capability handed to page loaders
//!
//! A loader never owns an HTTP client. The host passes it something that can
//! issue a request on behalf of the current navigation: the shared
//! [`HttpClient`] for one-shot CLI use, or a [`ScopedFetch`] that carries the
//! credentials of the incoming request when serving.

use super::client::{HttpClient, RequestConfig};
use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, COOKIE};
use std::collections::HashMap;
use tracing::trace;

/// Request headers copied from an incoming navigation to the backend
pub const FORWARDED_HEADERS: &[&str] = &["authorization", "cookie"];

/// Ability to issue a GET request and decode the JSON body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `path` (relative to the backend base URL) with the given request options
    async fn fetch(&self, path: &str, request: RequestConfig) -> Result<JsonValue>;
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch(&self, path: &str, request: RequestConfig) -> Result<JsonValue> {
        self.get_json_with_config(path, &request).await
    }
}

/// Fetch capability bound to a single navigation
///
/// Borrows the shared client and adds per-request headers on top of each
/// request. The client itself is never modified.
#[derive(Debug)]
pub struct ScopedFetch<'a> {
    client: &'a HttpClient,
    headers: HashMap<String, String>,
}

impl<'a> ScopedFetch<'a> {
    /// Scope `client` to a navigation with no extra headers
    pub fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            headers: HashMap::new(),
        }
    }

    /// Scope `client` to a navigation, forwarding its credentials
    ///
    /// Only [`FORWARDED_HEADERS`] are copied; values that are not valid
    /// visible ASCII are dropped. Multiple `cookie` fields (as sent over
    /// HTTP/2) are joined into one.
    pub fn forward_credentials(client: &'a HttpClient, incoming: &HeaderMap) -> Self {
        let mut scoped = Self::new(client);
        for name in FORWARDED_HEADERS {
            let values: Vec<&str> = incoming
                .get_all(*name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect();
            if values.is_empty() {
                continue;
            }

            let value = if *name == COOKIE.as_str() {
                values.join("; ")
            } else {
                values[0].to_string()
            };
            scoped.headers.insert((*name).to_string(), value);
        }
        scoped
    }

    /// Add a header to every request made through this scope
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Headers added by this scope
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

#[async_trait]
impl<'a> Fetch for ScopedFetch<'a> {
    async fn fetch(&self, path: &str, mut request: RequestConfig) -> Result<JsonValue> {
        trace!(path, scoped_headers = self.headers.len(), "scoped fetch");
        for (key, value) in &self.headers {
            request
                .headers
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        self.client.fetch(path, request).await
    }
}
