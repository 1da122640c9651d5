//! HTTP server mode: hosts the page loaders
//!
//! Every navigation gets its own fetch capability, scoped to the credentials
//! of the incoming request, and runs exactly one loader.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, ScopedFetch};
use crate::loader::{self, LoadOutcome};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    client: Arc<HttpClient>,
}

/// Error body returned when a loader fails
#[derive(Debug, Serialize)]
struct ApiResponse {
    success: bool,
    error: String,
}

impl ApiResponse {
    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

/// Build the router for a shared backend client
pub fn router(client: Arc<HttpClient>) -> Router {
    let state = AppState { client };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/albums", get(albums))
        .route("/albums/:hash", get(album))
        .route("/tracks", get(tracks))
        .route("/tracks/:hash", get(track))
        .route("/artists", get(artists))
        .route("/artists/:hash", get(artist))
        .layer(cors)
        // loaders log their own failures
        .layer(TraceLayer::new_for_http().on_failure(()))
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: &AppConfig, port: u16) -> Result<()> {
    let client = HttpClient::with_config(config.api.http_client_config())?;
    let app = router(Arc::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(
        "Starting HTTP server on http://{} (library backend {})",
        addr,
        config.api.base_url
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Other(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn albums(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let Some(url) = navigation_url(&uri) else {
        return bad_request(&uri);
    };
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_albums(&fetch, &url).await)
}

async fn tracks(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let Some(url) = navigation_url(&uri) else {
        return bad_request(&uri);
    };
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_tracks(&fetch, &url).await)
}

async fn artists(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let Some(url) = navigation_url(&uri) else {
        return bad_request(&uri);
    };
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_artists(&fetch, &url).await)
}

async fn album(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    headers: HeaderMap,
) -> Response {
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_album(&fetch, &hash).await)
}

async fn track(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    headers: HeaderMap,
) -> Response {
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_track(&fetch, &hash).await)
}

async fn artist(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    headers: HeaderMap,
) -> Response {
    let fetch = ScopedFetch::forward_credentials(&state.client, &headers);
    respond(loader::load_artist(&fetch, &hash).await)
}

/// Absolute URL for the navigation, as the loaders expect
fn navigation_url(uri: &Uri) -> Option<Url> {
    let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
    Url::parse("http://localhost").ok()?.join(target).ok()
}

fn bad_request(uri: &Uri) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format!("Invalid request target: {uri}"))),
    )
        .into_response()
}

/// Map a loader outcome to a response; the loader has already logged failures
fn respond<V: Serialize>(outcome: LoadOutcome<V>) -> Response {
    match outcome {
        LoadOutcome::Loaded(view) => (StatusCode::OK, Json(view)).into_response(),
        LoadOutcome::Failed(err) => {
            let status = match err {
                Error::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Json(ApiResponse::error(err.to_string()))).into_response()
        }
    }
}
