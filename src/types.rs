use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Raw title metadata for a video link, as delivered by the metadata extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCandidate {
    pub raw_title: String,
    pub uploader_hint: Option<String>,
    /// Song name from the video's own music metadata, when the site has it.
    pub track: Option<String>,
}

impl TitleCandidate {
    pub fn new(raw_title: impl Into<String>, uploader_hint: Option<String>) -> Self {
        Self {
            raw_title: raw_title.into(),
            uploader_hint,
            track: None,
        }
    }

    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }
}

/// Best-effort (song, artist) pair recovered from a video title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGuess {
    pub song: String,
    pub artist: Option<String>,
}

/// A track as known to the music service. Only built from a complete record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTrack {
    pub id: String,
    pub display_artists: Vec<String>,
    pub display_name: String,
}

impl CanonicalTrack {
    /// Converts a wire record, rejecting records without an id or name.
    pub fn from_wire(track: TrackObject) -> Option<Self> {
        let id = track.id.filter(|id| !id.is_empty())?;
        let display_name = track.name?;
        Some(Self {
            id,
            display_artists: track.artists.into_iter().map(|a| a.name).collect(),
            display_name,
        })
    }

    /// Formats the track as `"Artist, Artist - Name"`.
    pub fn display_name(&self) -> String {
        if self.display_artists.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} - {}", self.display_artists.join(", "), self.display_name)
        }
    }
}

/// Cached bearer token for the music API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCredential {
    pub token: String,
    pub expires_at_epoch_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
}

#[derive(Debug, Clone)]
pub struct PkceSession {
    pub code_verifier: String,
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<Option<TrackObject>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackRef {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default, alias = "item")]
    pub track: Option<PlaylistTrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Tabled)]
pub struct LinkOutcomeTableRow {
    pub link: String,
    pub track: String,
    pub status: String,
}

#[derive(Tabled)]
pub struct GuessTableRow {
    pub song: String,
    pub artist: String,
    pub query: String,
}
