//! HTTP module
//!
//! Provides the fetch capability used by the page loaders: an HTTP client
//! with retry, rate limiting, and backoff, plus a per-navigation scope.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Request Scoping**: Forward the caller's credentials to the backend

mod client;
mod fetch;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use fetch::{Fetch, ScopedFetch, FORWARDED_HEADERS};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
pub(crate) use fetch::MockFetch;
