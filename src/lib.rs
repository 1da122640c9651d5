//! # Tamaya Web
//!
//! Page loaders for the Tamaya music library web frontend, together with
//! the library API client and HTTP plumbing they run on.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tamaya_web::http::{HttpClient, HttpClientConfig};
//! use tamaya_web::loader::load_albums;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> tamaya_web::Result<()> {
//!     let client = HttpClient::with_config(
//!         HttpClientConfig::builder().base_url("http://127.0.0.1:8000").build(),
//!     )?;
//!
//!     let url = Url::parse("http://localhost/albums?page=2&item=20")?;
//!     if let Some(view) = load_albums(&client, &url).await.into_option() {
//!         println!("{}: {} albums", view.title, view.list.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   navigation (URL + credentials)
//!               │
//! ┌─────────────┴─────────────┐
//! │  loader: parse page/item  │──► PageData { list, title, page, item }
//! └─────────────┬─────────────┘
//!               │ get_album_list(fetch, page, item)
//! ┌─────────────┴─────────────┐
//! │  api: typed library calls │
//! └─────────────┬─────────────┘
//!               │ Fetch
//! ┌─────────────┴─────────────┐
//! │  http: retry, rate limit  │──► library backend /api/*
//! └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Library records and shared types
pub mod types;

/// Application configuration
pub mod config;

/// HTTP client, fetch capability, rate limiting
pub mod http;

/// Page / item query parsing
pub mod pagination;

/// Library API client
pub mod api;

/// Page loaders and view models
pub mod loader;

/// Command-line interface and HTTP host
pub mod cli;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use loader::{
    load_album, load_albums, load_artist, load_artists, load_track, load_tracks, LoadOutcome,
    PageData,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
