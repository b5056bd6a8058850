use std::fmt;

use crate::{
    config::DEFAULT_PAGE_SIZE, error::SyncError, info, spotify::SpotifyApi, types::CanonicalTrack,
    utils, warning,
};

/// How an `ensure_present` call was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The scan found the track; nothing was written.
    AlreadyPresent,
    /// The scan completed without a match and the track was appended.
    Added,
    /// The scan failed, so the track was appended without a duplicate check.
    AddedAfterFailedCheck,
}

impl SyncOutcome {
    pub fn inserted(&self) -> bool {
        !matches!(self, SyncOutcome::AlreadyPresent)
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::AlreadyPresent => write!(f, "already in playlist"),
            SyncOutcome::Added => write!(f, "added"),
            SyncOutcome::AddedAfterFailedCheck => write!(f, "added (duplicate check failed)"),
        }
    }
}

/// Keeps one playlist free of duplicate entries.
///
/// The check-then-insert is not atomic on the remote side: two concurrent
/// syncs of the same track can both miss it in the scan and both insert.
pub struct PlaylistSync<'a, A> {
    api: &'a A,
    playlist_id: String,
    page_size: usize,
}

impl<'a, A> PlaylistSync<'a, A>
where
    A: SpotifyApi + Sync,
{
    pub fn new(api: &'a A, playlist_id: impl Into<String>) -> Self {
        Self {
            api,
            playlist_id: playlist_id.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Scans the playlist page by page for `track_id`.
    ///
    /// Stops at the first match or at the first short page.
    pub async fn contains(&self, track_id: &str) -> Result<bool, SyncError> {
        let mut offset = 0;

        loop {
            let page = self
                .api
                .playlist_track_ids(&self.playlist_id, offset, self.page_size)
                .await?;

            if page.iter().flatten().any(|id| id == track_id) {
                return Ok(true);
            }

            if page.len() < self.page_size {
                return Ok(false);
            }

            offset += self.page_size;
        }
    }

    /// Makes sure the track is in the playlist exactly once.
    ///
    /// A transport failure during the scan does not block the insert; the
    /// result is then [`SyncOutcome::AddedAfterFailedCheck`].
    ///
    /// # Errors
    ///
    /// Fails when the insert fails, or when the scan fails for any reason
    /// other than transport.
    pub async fn ensure_present(&self, track: &CanonicalTrack) -> Result<SyncOutcome, SyncError> {
        let outcome = match self.contains(&track.id).await {
            Ok(true) => {
                info!("Track {} already in playlist", track.id);
                return Ok(SyncOutcome::AlreadyPresent);
            }
            Ok(false) => SyncOutcome::Added,
            Err(e) if e.is_transport() => {
                warning!("Failed to check playlist for duplicates: {}", e);
                SyncOutcome::AddedAfterFailedCheck
            }
            Err(e) => return Err(e),
        };

        self.api
            .add_tracks(&self.playlist_id, &[utils::track_uri(&track.id)])
            .await?;

        info!("Added track {} to playlist {}", track.id, self.playlist_id);
        Ok(outcome)
    }
}
