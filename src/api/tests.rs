//! Tests for the library API client

use super::*;
use crate::error::Error;
use crate::http::{MockFetch, RequestConfig};
use crate::types::{AlbumSummary, ArtistSummary, JsonValue, TrackSummary};
use pretty_assertions::assert_eq;
use serde_json::json;

fn query_is(request: &RequestConfig, page: &str, item: &str) -> bool {
    request.query.get("page").map(String::as_str) == Some(page)
        && request.query.get("item").map(String::as_str) == Some(item)
}

/// Expect exactly one request for `expected_path`, answered with `body`
fn fetch_once(expected_path: &'static str, body: JsonValue) -> MockFetch {
    let mut fetch = MockFetch::new();
    fetch
        .expect_fetch()
        .withf(move |path: &str, _: &RequestConfig| path == expected_path)
        .times(1)
        .returning(move |_, _| Ok(body.clone()));
    fetch
}

#[test]
fn test_listing_endpoints() {
    assert_eq!(Listing::Albums.endpoint(), "/api/albums");
    assert_eq!(Listing::Tracks.endpoint(), "/api/tracks");
    assert_eq!(Listing::Artists.endpoint(), "/api/artists");
    assert_eq!(Listing::Albums.to_string(), "album");
}

#[test]
fn test_record_listings() {
    assert_eq!(AlbumSummary::LISTING, Listing::Albums);
    assert_eq!(TrackSummary::LISTING, Listing::Tracks);
    assert_eq!(ArtistSummary::LISTING, Listing::Artists);
}

#[tokio::test]
async fn test_get_album_list_sends_page_and_item() {
    let mut fetch = MockFetch::new();
    fetch
        .expect_fetch()
        .withf(|path: &str, request: &RequestConfig| {
            path == "/api/albums" && query_is(request, "3", "20")
        })
        .times(1)
        .returning(|_, _| {
            Ok(json!({
                "list": [
                    {"album": "Homogenic", "albumartist": "Björk", "albumhash": "h1", "year": 1997},
                    {"album": "Post", "albumartist": "Björk", "albumhash": "h2", "year": 1995}
                ],
                "total": 120
            }))
        });

    let page = get_album_list(&fetch, 3, 20).await.unwrap();

    assert_eq!(page.list.len(), 2);
    assert_eq!(page.list[0].album, "Homogenic");
    assert_eq!(page.total, Some(120));
}

#[tokio::test]
async fn test_get_track_and_artist_lists_use_their_endpoints() {
    let mut fetch = MockFetch::new();
    fetch
        .expect_fetch()
        .withf(|path: &str, request: &RequestConfig| {
            path == "/api/tracks" && query_is(request, "1", "40")
        })
        .times(1)
        .returning(|_, _| Ok(json!({"list": []})));
    fetch
        .expect_fetch()
        .withf(|path: &str, request: &RequestConfig| {
            path == "/api/artists" && query_is(request, "2", "10")
        })
        .times(1)
        .returning(|_, _| Ok(json!({"list": []})));

    get_track_list(&fetch, 1, 40).await.unwrap();
    get_artist_list(&fetch, 2, 10).await.unwrap();
}

#[tokio::test]
async fn test_get_list_without_list_field_is_decode_error() {
    let fetch = fetch_once("/api/albums", json!({"albums": []}));

    let err = get_album_list(&fetch, 1, 40).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("album list (page 1)"));
}

#[tokio::test]
async fn test_get_list_propagates_fetch_failure() {
    let mut fetch = MockFetch::new();
    fetch
        .expect_fetch()
        .times(1)
        .returning(|_, _| Err(Error::http_status(500, "database is locked")));

    let err = get_album_list(&fetch, 1, 40).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_get_album_info_decodes_tracks() {
    let fetch = fetch_once(
        "/api/albums/v1",
        json!({
            "album": "Vespertine",
            "albumartist": "Björk",
            "albumhash": "v1",
            "tracks": [
                {"title": "Hidden Place", "track": 1, "hash": "t1", "duration": 328.4}
            ]
        }),
    );

    let album = get_album_info(&fetch, "v1").await.unwrap().unwrap();

    assert_eq!(album.summary.album, "Vespertine");
    assert_eq!(album.tracks[0].title, "Hidden Place");
}

#[tokio::test]
async fn test_get_album_info_empty_object_is_none() {
    let fetch = fetch_once("/api/albums/missing", json!({}));
    assert!(get_album_info(&fetch, "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_album_info_escapes_hash() {
    let fetch = fetch_once("/api/albums/a%2Fb%20c%3Fd", json!({}));
    get_album_info(&fetch, "a/b c?d").await.unwrap();
}

#[tokio::test]
async fn test_get_track_info_decodes_file_metadata() {
    let fetch = fetch_once(
        "/api/tracks/t9",
        json!({
            "title": "Angel",
            "album": "Mezzanine",
            "artist": "Massive Attack",
            "hash": "t9",
            "duration": 379.5,
            "bitrate": 320,
            "filepath": "/music/angel.flac"
        }),
    );

    let track = get_track_info(&fetch, "t9").await.unwrap().unwrap();

    assert_eq!(track.summary.title, "Angel");
    assert_eq!(track.summary.album, "Mezzanine");
    assert_eq!(track.bitrate, 320);
    assert_eq!(track.track, 0);
}

#[tokio::test]
async fn test_get_track_info_null_is_none() {
    let fetch = fetch_once("/api/tracks/gone", JsonValue::Null);
    assert!(get_track_info(&fetch, "gone").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_artist_info_escapes_hash_and_decodes_albums() {
    let fetch = fetch_once(
        "/api/artists/sigur%20r%C3%B3s",
        json!({
            "artist": "Sigur Rós",
            "artisthash": "sigur rós",
            "albums": [{"album": "Ágætis byrjun", "year": 1999}]
        }),
    );

    let artist = get_artist_info(&fetch, "sigur rós").await.unwrap().unwrap();

    assert_eq!(artist.summary.artist, "Sigur Rós");
    assert_eq!(artist.albums[0].year, 1999);
}

#[tokio::test]
async fn test_get_info_rejects_non_object_body() {
    let fetch = fetch_once("/api/artists/x", json!(["not", "an", "artist"]));

    let err = get_artist_info(&fetch, "x").await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("artist 'x'"));
}
