use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::SyncError;

// Host parts are case-insensitive, identifiers are not.
static VIDEO_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:https?://)?(?i:www\.)?(?:(?i:youtube\.com)/watch\?v=|(?i:youtu\.be)/|(?i:music\.youtube\.com)/watch\?v=)([A-Za-z0-9_-]{11})",
    )
    .expect("valid video link pattern")
});

static TRACK_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:https?://)?(?i:open\.)?(?i:spotify\.com)/track/([A-Za-z0-9]{22})")
        .expect("valid track link pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkSource {
    VideoSite,
    MusicService,
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSource::VideoSite => write!(f, "youtube"),
            LinkSource::MusicService => write!(f, "spotify"),
        }
    }
}

/// A music link found in free text, reduced to its source and native id.
///
/// The url is always the canonical reconstruction, whichever URL shape was
/// matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkReference {
    url: String,
    source: LinkSource,
    native_id: String,
}

impl LinkReference {
    fn video(video_id: &str) -> Self {
        Self {
            url: format!("https://www.youtube.com/watch?v={video_id}"),
            source: LinkSource::VideoSite,
            native_id: video_id.to_string(),
        }
    }

    fn track(track_id: &str) -> Self {
        Self {
            url: format!("https://open.spotify.com/track/{track_id}"),
            source: LinkSource::MusicService,
            native_id: track_id.to_string(),
        }
    }

    /// Parses a single URL into a reference.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::MalformedInput` when the string holds no
    /// recognized music link.
    pub fn parse(url: &str) -> Result<Self, SyncError> {
        extract_links(url)
            .next()
            .ok_or_else(|| SyncError::MalformedInput(format!("not a music link: {url}")))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn source(&self) -> LinkSource {
        self.source
    }

    pub fn native_id(&self) -> &str {
        &self.native_id
    }

    pub fn is_video(&self) -> bool {
        self.source == LinkSource::VideoSite
    }
}

impl fmt::Display for LinkReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Lazily yields every music link in `text`.
///
/// Video links come first, then track links, each group in order of
/// appearance. Repeated links are yielded repeatedly.
pub fn extract_links(text: &str) -> impl Iterator<Item = LinkReference> + '_ {
    let videos = VIDEO_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|id| LinkReference::video(id.as_str()));

    let tracks = TRACK_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|id| LinkReference::track(id.as_str()));

    videos.chain(tracks)
}
