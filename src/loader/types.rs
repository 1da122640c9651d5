//! View models produced by the page loaders

use crate::error::{Error, Result};
use crate::pagination::PageRequest;
use crate::types::{AlbumDetail, ArtistDetail, TrackDetail};
use serde::{Deserialize, Serialize};

/// Title of the album listing view
pub const ALBUMS_TITLE: &str = "Albums";

/// Title of the track listing view
pub const TRACKS_TITLE: &str = "Tracks";

/// Title of the artist listing view
pub const ARTISTS_TITLE: &str = "Artists";

/// View model of a listing page
///
/// Serializes as `{ list, title, page, item }`. `page` and `item` are the
/// values actually sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    pub list: Vec<T>,
    pub title: String,
    pub page: u32,
    pub item: u32,
}

impl<T> PageData<T> {
    /// Build a view model for `request`
    pub fn new(list: Vec<T>, title: impl Into<String>, request: PageRequest) -> Self {
        Self {
            list,
            title: title.into(),
            page: request.page,
            item: request.item,
        }
    }

    /// The page request this view was loaded with
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.item)
    }
}

/// View model of an album page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumView {
    pub album: AlbumDetail,
    /// Album name, used as the page title
    pub title: String,
}

/// View model of a track page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackView {
    pub track: TrackDetail,
    /// Track title, used as the page title
    pub title: String,
}

/// View model of an artist page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistView {
    pub artist: ArtistDetail,
    /// Artist name, used as the page title
    pub title: String,
}

/// Result of running a loader
///
/// `Failed` has already been logged by the loader. Callers that only care
/// whether there is something to render can use [`LoadOutcome::into_option`].
#[derive(Debug)]
pub enum LoadOutcome<V> {
    /// Data retrieved and shaped into a view model
    Loaded(V),
    /// Retrieval failed
    Failed(Error),
}

impl<V> LoadOutcome<V> {
    /// Check if data was loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Borrow the view model, if any
    pub fn data(&self) -> Option<&V> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Failed(_) => None,
        }
    }

    /// Borrow the failure cause, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// The view model, or nothing when retrieval failed
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Failed(_) => None,
        }
    }

    /// Convert into a `Result`, keeping the failure cause
    pub fn into_result(self) -> Result<V> {
        match self {
            Self::Loaded(view) => Ok(view),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<V> From<Result<V>> for LoadOutcome<V> {
    fn from(result: Result<V>) -> Self {
        match result {
            Ok(view) => Self::Loaded(view),
            Err(error) => Self::Failed(error),
        }
    }
}
