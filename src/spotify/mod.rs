//! # Spotify Integration Module
//!
//! The remote surface the pipeline consumes, behind the [`SpotifyApi`] trait
//! so resolution and playlist sync can run against any implementation.
//!
//! ```text
//! management (TrackResolver, PlaylistSync)
//!          ↓
//! SpotifyApi ── SpotifyClient (reqwest, bearer token from TokenManager)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Endpoints
//!
//! - `GET /tracks/{id}` - direct lookup, 404 is absence ([`tracks`])
//! - `GET /search?type=track` - ranked search ([`tracks`])
//! - `GET /playlists/{id}/items` - one page of item ids ([`playlist`])
//! - `POST /playlists/{id}/items` - append ([`playlist`])
//! - `POST <token-url>` - refresh and code exchanges ([`auth`])
//!
//! ## Rate Limiting
//!
//! A `429 Too Many Requests` carrying a `Retry-After` of at most 120 seconds
//! is waited out and the request is sent once more. Longer delays are
//! reported and the 429 is returned as a transport failure.

pub mod auth;
pub mod playlist;
pub mod tracks;

use std::{future::Future, time::Duration};

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config::Config,
    error::SyncError,
    management::{TokenManager, TokenRefresher},
    types::CanonicalTrack,
    warning,
};

pub use auth::SpotifyTokenRefresher;

/// Longest `Retry-After` that is waited out instead of failing.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Operations the pipeline needs from the music service.
pub trait SpotifyApi {
    /// Looks a track up by id. `None` when the service has no such track.
    fn track(
        &self,
        track_id: &str,
    ) -> impl Future<Output = Result<Option<CanonicalTrack>, SyncError>> + Send;

    /// Runs a track search and returns results in the service's order.
    fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<CanonicalTrack>, SyncError>> + Send;

    /// Returns one page of playlist entries as track ids. Entries without a
    /// track id (local files, removed tracks) are `None` but still occupy a
    /// slot in the page.
    fn playlist_track_ids(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Option<String>>, SyncError>> + Send;

    /// Appends the given track URIs to the playlist.
    fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = Result<(), SyncError>> + Send;
}

/// Spotify Web API client authenticating through a shared [`TokenManager`].
pub struct SpotifyClient<R> {
    http: Client,
    api_url: String,
    tokens: TokenManager<R>,
}

impl SpotifyClient<SpotifyTokenRefresher> {
    /// Builds a client that refreshes its token with the configured
    /// long-lived refresh token.
    pub fn from_config(config: &Config) -> Self {
        let http = Client::new();
        let refresher = SpotifyTokenRefresher::new(
            http.clone(),
            config.token_url.clone(),
            config.credentials.clone(),
            config.refresh_token.clone(),
        );
        Self::new(http, config.api_url.clone(), TokenManager::new(refresher))
    }
}

impl<R> SpotifyClient<R>
where
    R: TokenRefresher + Send + Sync,
{
    pub fn new(http: Client, api_url: impl Into<String>, tokens: TokenManager<R>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Sends an authenticated request, waiting out one short rate limit.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, SyncError> {
        let token = self.tokens.ensure_valid().await?;
        let retry = request.try_clone();
        let response = request.bearer_auth(&token).send().await?;

        if response.status() != StatusCode::TOO_MANY_REQUESTS {
            return Ok(response);
        }

        match (retry_after_secs(&response), retry) {
            (Some(wait), Some(retry)) if wait <= MAX_RETRY_AFTER_SECS => {
                sleep(Duration::from_secs(wait)).await;
                Ok(retry.bearer_auth(&token).send().await?)
            }
            (Some(wait), _) if wait > MAX_RETRY_AFTER_SECS => {
                warning!(
                    "Retry after has reached an abnormal high of {} seconds.",
                    wait
                );
                Ok(response)
            }
            _ => Ok(response),
        }
    }
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

impl<R> SpotifyApi for SpotifyClient<R>
where
    R: TokenRefresher + Send + Sync,
{
    async fn track(&self, track_id: &str) -> Result<Option<CanonicalTrack>, SyncError> {
        self.get_track(track_id).await
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CanonicalTrack>, SyncError> {
        self.search(query, limit).await
    }

    async fn playlist_track_ids(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Option<String>>, SyncError> {
        self.get_playlist_page(playlist_id, offset, limit).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), SyncError> {
        self.add_items(playlist_id, uris).await
    }
}
