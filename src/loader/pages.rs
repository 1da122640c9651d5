//! Page loaders
//!
//! Each loader is called by the host once per navigation with the fetch
//! capability of that navigation. Loaders keep no state between calls and do
//! not modify their inputs.

use super::types::{
    AlbumView, ArtistView, LoadOutcome, PageData, TrackView, ALBUMS_TITLE, ARTISTS_TITLE,
    TRACKS_TITLE,
};
use crate::api::{self, LibraryRecord, Listing};
use crate::error::{Error, Result};
use crate::http::Fetch;
use crate::pagination::{PageQuery, PageRequest, ParsedParam, ITEM_PARAM, PAGE_PARAM};
use crate::types::{AlbumSummary, ArtistSummary, TrackSummary};
use tracing::{debug, error};
use url::Url;

/// Load the album listing for `url`
pub async fn load_albums(fetch: &dyn Fetch, url: &Url) -> LoadOutcome<PageData<AlbumSummary>> {
    load_listing(fetch, url, ALBUMS_TITLE).await
}

/// Load the track listing for `url`
pub async fn load_tracks(fetch: &dyn Fetch, url: &Url) -> LoadOutcome<PageData<TrackSummary>> {
    load_listing(fetch, url, TRACKS_TITLE).await
}

/// Load the artist listing for `url`
pub async fn load_artists(fetch: &dyn Fetch, url: &Url) -> LoadOutcome<PageData<ArtistSummary>> {
    load_listing(fetch, url, ARTISTS_TITLE).await
}

/// Load the album page for `hash`
///
/// An unknown hash is a failure like any other.
pub async fn load_album(fetch: &dyn Fetch, hash: &str) -> LoadOutcome<AlbumView> {
    let found = api::get_album_info(fetch, hash).await;
    detail_outcome(found, Listing::Albums, hash, |album| AlbumView {
        title: album.summary.album.clone(),
        album,
    })
}

/// Load the track page for `hash`
pub async fn load_track(fetch: &dyn Fetch, hash: &str) -> LoadOutcome<TrackView> {
    let found = api::get_track_info(fetch, hash).await;
    detail_outcome(found, Listing::Tracks, hash, |track| TrackView {
        title: track.summary.title.clone(),
        track,
    })
}

/// Load the artist page for `hash`
pub async fn load_artist(fetch: &dyn Fetch, hash: &str) -> LoadOutcome<ArtistView> {
    let found = api::get_artist_info(fetch, hash).await;
    detail_outcome(found, Listing::Artists, hash, |artist| ArtistView {
        title: artist.summary.artist.clone(),
        artist,
    })
}

fn detail_outcome<T, V>(
    found: Result<Option<T>>,
    listing: Listing,
    hash: &str,
    view: impl FnOnce(T) -> V,
) -> LoadOutcome<V> {
    let result = found.and_then(|record| {
        record
            .map(view)
            .ok_or_else(|| Error::not_found(format!("{listing} '{hash}'")))
    });

    if let Err(ref err) = result {
        error!(error = %err, %listing, hash, "failed to load {}", listing);
    }
    result.into()
}

async fn load_listing<T: LibraryRecord>(
    fetch: &dyn Fetch,
    url: &Url,
    title: &'static str,
) -> LoadOutcome<PageData<T>> {
    let request = page_request(url);
    let listing = T::LISTING;

    match api::get_list::<T>(fetch, request.page, request.item).await {
        Ok(data) => {
            let view = PageData::new(data.list, title, request);
            debug!(%listing, count = view.list.len(), "loaded {}", view.request());
            LoadOutcome::Loaded(view)
        }
        Err(err) => {
            error!(
                error = %err,
                %listing,
                page = request.page,
                item = request.item,
                "failed to load {} list",
                listing
            );
            LoadOutcome::Failed(err)
        }
    }
}

/// Parse and resolve the page query of `url`
pub fn page_request(url: &Url) -> PageRequest {
    let query = PageQuery::from_url(url);
    let request = query.resolve();

    log_rejected(PAGE_PARAM, &query.page, request.page);
    log_rejected(ITEM_PARAM, &query.item, request.item);

    request
}

fn log_rejected(name: &str, param: &ParsedParam, used: u32) {
    if param.is_rejected() {
        debug!(param = name, value = %param, used, "unusable query parameter, using default");
    }
}
