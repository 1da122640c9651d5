//! Page loader module
//!
//! Turns a navigation (URL plus fetch capability) into a view model.
//!
//! # Overview
//!
//! - `load_albums`, `load_tracks`, `load_artists` - listing pages driven by
//!   the `page` / `item` query parameters
//! - `load_album`, `load_track`, `load_artist` - a single record by hash
//!
//! A loader never returns an error. Retrieval failures are logged once and
//! reported as [`LoadOutcome::Failed`].

mod pages;
mod types;

pub use pages::{
    load_album, load_albums, load_artist, load_artists, load_track, load_tracks, page_request,
};
pub use types::{
    AlbumView, ArtistView, LoadOutcome, PageData, TrackView, ALBUMS_TITLE, ARTISTS_TITLE,
    TRACKS_TITLE,
};
