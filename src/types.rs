//! Common types used throughout Tamaya Web
//!
//! This module contains the library records returned by the backend API,
//! the list payload wrapper, and small shared enums.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Library Records
// ============================================================================

/// One album as listed by `/api/albums`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumSummary {
    /// Album title
    pub album: String,
    /// Album artist
    pub albumartist: String,
    /// Hash of the album artist
    pub albumartisthash: String,
    /// Album identifier
    pub albumhash: String,
    /// Total duration in seconds
    pub durationtotals: f64,
    /// Total size in bytes
    pub sizetotals: u64,
    pub tracktotals: u32,
    pub disctotals: u32,
    pub year: i32,
}

/// A track as it appears inside an album detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumTrack {
    pub title: String,
    pub artist: String,
    /// Duration in seconds
    pub duration: f64,
    /// Track number within the disc
    pub track: u32,
    pub hash: String,
    pub albumhash: String,
    pub artisthash: String,
}

/// Album metadata plus its tracks, as returned by `/api/albums/{hash}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub summary: AlbumSummary,
    /// Tracks ordered by track number
    pub tracks: Vec<AlbumTrack>,
}

/// One track as listed by `/api/tracks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSummary {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub albumartist: String,
    pub hash: String,
    pub albumhash: String,
}

/// One artist as listed by `/api/artists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSummary {
    pub artist: String,
    pub artisthash: String,
}

/// A single track with its file metadata, as returned by `/api/tracks/{hash}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDetail {
    #[serde(flatten)]
    pub summary: TrackSummary,
    pub artisthash: String,
    /// Duration in seconds
    pub duration: f64,
    pub track: u32,
    pub disc: u32,
    pub year: i32,
    pub genre: String,
    /// Bitrate in kbps
    pub bitrate: u32,
    /// File size in bytes
    pub filesize: u64,
}

/// An artist and their albums, as returned by `/api/artists/{hash}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub summary: ArtistSummary,
    pub albums: Vec<AlbumSummary>,
}

/// List payload returned by every paginated library endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Records on the requested page
    pub list: Vec<T>,
    /// Total number of records, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
