//! Library API module
//!
//! Typed access to the music library backend:
//!
//! - `GET /api/albums?page=&item=` - album listing
//! - `GET /api/albums/{hash}` - album with its tracks
//! - `GET /api/tracks?page=&item=` - track listing
//! - `GET /api/tracks/{hash}` - a single track
//! - `GET /api/artists?page=&item=` - artist listing
//! - `GET /api/artists/{hash}` - artist with their albums

mod library;

pub use library::{
    get_album_info, get_album_list, get_artist_info, get_artist_list, get_list, get_track_info,
    get_track_list, LibraryRecord, Listing,
};

#[cfg(test)]
mod tests;
