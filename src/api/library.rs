//! Library API client
//!
//! Retrieval capabilities for the library backend. Each function takes the
//! fetch capability of the current navigation rather than owning a client.

use crate::error::{Error, Result};
use crate::http::{Fetch, RequestConfig};
use crate::pagination::{ITEM_PARAM, PAGE_PARAM};
use crate::types::{
    AlbumDetail, AlbumSummary, ArtistDetail, ArtistSummary, JsonValue, ListResponse, TrackDetail,
    TrackSummary,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

/// Characters escaped when a hash is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A paginated collection exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Albums,
    Tracks,
    Artists,
}

impl Listing {
    /// Endpoint path, relative to the backend base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Albums => "/api/albums",
            Self::Tracks => "/api/tracks",
            Self::Artists => "/api/artists",
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Albums => "album",
            Self::Tracks => "track",
            Self::Artists => "artist",
        })
    }
}

/// Record type served by one of the paginated endpoints
pub trait LibraryRecord: DeserializeOwned + Send + 'static {
    /// Collection this record is listed in
    const LISTING: Listing;
}

impl LibraryRecord for AlbumSummary {
    const LISTING: Listing = Listing::Albums;
}

impl LibraryRecord for TrackSummary {
    const LISTING: Listing = Listing::Tracks;
}

impl LibraryRecord for ArtistSummary {
    const LISTING: Listing = Listing::Artists;
}

/// Fetch one page of any listing
pub async fn get_list<T: LibraryRecord>(
    fetch: &dyn Fetch,
    page: u32,
    item: u32,
) -> Result<ListResponse<T>> {
    let listing = T::LISTING;
    debug!(%listing, page, item, "requesting {} list", listing);

    let request = RequestConfig::new()
        .query(PAGE_PARAM, page)
        .query(ITEM_PARAM, item);
    let body = fetch.fetch(listing.endpoint(), request).await?;

    serde_json::from_value(body)
        .map_err(|e| Error::decode(format!("{listing} list (page {page}): {e}")))
}

/// Fetch one page of albums
pub async fn get_album_list(
    fetch: &dyn Fetch,
    page: u32,
    item: u32,
) -> Result<ListResponse<AlbumSummary>> {
    get_list(fetch, page, item).await
}

/// Fetch one page of tracks
pub async fn get_track_list(
    fetch: &dyn Fetch,
    page: u32,
    item: u32,
) -> Result<ListResponse<TrackSummary>> {
    get_list(fetch, page, item).await
}

/// Fetch one page of artists
pub async fn get_artist_list(
    fetch: &dyn Fetch,
    page: u32,
    item: u32,
) -> Result<ListResponse<ArtistSummary>> {
    get_list(fetch, page, item).await
}

/// Fetch an album and its tracks
///
/// The backend answers an unknown hash with an empty object, reported here
/// as `Ok(None)`.
pub async fn get_album_info(fetch: &dyn Fetch, hash: &str) -> Result<Option<AlbumDetail>> {
    get_info(fetch, Listing::Albums, hash).await
}

/// Fetch a single track
pub async fn get_track_info(fetch: &dyn Fetch, hash: &str) -> Result<Option<TrackDetail>> {
    get_info(fetch, Listing::Tracks, hash).await
}

/// Fetch an artist and their albums
pub async fn get_artist_info(fetch: &dyn Fetch, hash: &str) -> Result<Option<ArtistDetail>> {
    get_info(fetch, Listing::Artists, hash).await
}

async fn get_info<T: DeserializeOwned>(
    fetch: &dyn Fetch,
    listing: Listing,
    hash: &str,
) -> Result<Option<T>> {
    let path = format!(
        "{}/{}",
        listing.endpoint(),
        utf8_percent_encode(hash, PATH_SEGMENT)
    );
    debug!(%listing, hash, "requesting {} info", listing);

    let body = fetch.fetch(&path, RequestConfig::new()).await?;
    if is_empty_body(&body) {
        return Ok(None);
    }

    serde_json::from_value(body)
        .map(Some)
        .map_err(|e| Error::decode(format!("{listing} '{hash}': {e}")))
}

fn is_empty_body(body: &JsonValue) -> bool {
    match body {
        JsonValue::Null => true,
        JsonValue::Object(map) => map.is_empty(),
        _ => false,
    }
}
