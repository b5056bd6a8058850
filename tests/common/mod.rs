#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use groovebot::{
    SyncError,
    extract::MetadataExtractor,
    management::TokenRefresher,
    spotify::SpotifyApi,
    types::{CanonicalTrack, TitleCandidate, TokenResponse},
};

pub const VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const TRACK_ID: &str = "4cOdK2wGLETKBW3PvgPWqT";

pub fn track(id: &str, artist: &str, name: &str) -> CanonicalTrack {
    CanonicalTrack {
        id: id.to_string(),
        display_artists: vec![artist.to_string()],
        display_name: name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Transport,
    Auth,
}

impl Failure {
    fn to_error(self, what: &str) -> SyncError {
        match self {
            Failure::Transport => SyncError::Transport(format!("{what} failed")),
            Failure::Auth => SyncError::Auth(format!("{what} rejected")),
        }
    }
}

/// In-memory music service that records every call it receives.
#[derive(Default)]
pub struct FakeSpotify {
    pub tracks: HashMap<String, CanonicalTrack>,
    pub search_results: Vec<CanonicalTrack>,
    pub playlist: Mutex<Vec<Option<String>>>,
    pub scan_failure: Option<Failure>,
    pub add_failure: Option<Failure>,
    pub searches: Mutex<Vec<(String, u32)>>,
    pub page_requests: Mutex<Vec<(usize, usize)>>,
    pub added: Mutex<Vec<String>>,
}

impl FakeSpotify {
    pub fn with_track(mut self, track: CanonicalTrack) -> Self {
        self.tracks.insert(track.id.clone(), track);
        self
    }

    pub fn with_search_results(mut self, results: Vec<CanonicalTrack>) -> Self {
        self.search_results = results;
        self
    }

    pub fn with_playlist(self, entries: Vec<Option<&str>>) -> Self {
        *self.playlist.lock().unwrap() = entries
            .into_iter()
            .map(|entry| entry.map(str::to_string))
            .collect();
        self
    }

    pub fn searches(&self) -> Vec<(String, u32)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn page_requests(&self) -> Vec<(usize, usize)> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<String> {
        self.added.lock().unwrap().clone()
    }

    pub fn playlist_len(&self) -> usize {
        self.playlist.lock().unwrap().len()
    }
}

impl SpotifyApi for FakeSpotify {
    async fn track(&self, track_id: &str) -> Result<Option<CanonicalTrack>, SyncError> {
        Ok(self.tracks.get(track_id).cloned())
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<CanonicalTrack>, SyncError> {
        self.searches.lock().unwrap().push((query.to_string(), limit));
        Ok(self
            .search_results
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn playlist_track_ids(
        &self,
        _playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Option<String>>, SyncError> {
        self.page_requests.lock().unwrap().push((offset, limit));
        if let Some(failure) = self.scan_failure {
            return Err(failure.to_error("playlist scan"));
        }

        let playlist = self.playlist.lock().unwrap();
        Ok(playlist.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn add_tracks(&self, _playlist_id: &str, uris: &[String]) -> Result<(), SyncError> {
        if let Some(failure) = self.add_failure {
            return Err(failure.to_error("playlist insert"));
        }

        let mut playlist = self.playlist.lock().unwrap();
        for uri in uris {
            self.added.lock().unwrap().push(uri.clone());
            playlist.push(uri.strip_prefix("spotify:track:").map(str::to_string));
        }
        Ok(())
    }
}

/// Metadata extractor backed by a fixed url -> candidate map.
#[derive(Default)]
pub struct FakeExtractor {
    pub candidates: HashMap<String, TitleCandidate>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeExtractor {
    pub fn with(mut self, url: &str, candidate: TitleCandidate) -> Self {
        self.candidates.insert(url.to_string(), candidate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MetadataExtractor for FakeExtractor {
    async fn extract(&self, url: &str) -> Option<TitleCandidate> {
        self.calls.lock().unwrap().push(url.to_string());
        self.candidates.get(url).cloned()
    }
}

/// Token refresher that counts refreshes and hands out numbered tokens.
pub struct FakeRefresher {
    pub expires_in: u64,
    pub delay: Duration,
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeRefresher {
    pub fn new(expires_in: u64) -> Self {
        Self {
            expires_in,
            delay: Duration::ZERO,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared refresh counter; stays readable after the refresher is moved.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl TokenRefresher for FakeRefresher {
    async fn refresh(&self) -> Result<TokenResponse, SyncError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.fail {
            return Err(SyncError::Transport("token endpoint unreachable".to_string()));
        }

        Ok(TokenResponse {
            access_token: format!("token-{call}"),
            expires_in: self.expires_in,
            refresh_token: None,
            scope: None,
        })
    }
}
