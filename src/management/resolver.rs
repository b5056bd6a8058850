use crate::{
    error::SyncError,
    extract::{LinkReference, LinkSource, guess_from_candidate},
    spotify::SpotifyApi,
    types::{CanonicalTrack, NormalizedGuess, TitleCandidate},
    warning,
};

/// Only the top search result is ever considered.
pub const SEARCH_LIMIT: u32 = 1;

/// Builds the search query for a guess.
///
/// With a usable artist the query is `track:<song> artist:<artist>`;
/// without one (absent or the `Unknown` placeholder) it is the bare song.
pub fn build_search_query(guess: &NormalizedGuess) -> String {
    match guess.searchable_artist() {
        Some(artist) => format!("track:{} artist:{}", guess.song, artist),
        None => guess.song.clone(),
    }
}

/// Maps link references to canonical tracks.
pub struct TrackResolver<'a, A> {
    api: &'a A,
}

impl<'a, A> TrackResolver<'a, A>
where
    A: SpotifyApi + Sync,
{
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Resolves a link to its canonical track.
    ///
    /// Track links are looked up directly. Video links need the extractor's
    /// `candidate`; without one the link stays unresolved.
    ///
    /// Returns `Ok(None)` when the service has no matching track. Transport
    /// and authorization failures are returned as errors.
    pub async fn resolve(
        &self,
        link: &LinkReference,
        candidate: Option<&TitleCandidate>,
    ) -> Result<Option<CanonicalTrack>, SyncError> {
        match link.source() {
            LinkSource::MusicService => self.api.track(link.native_id()).await,
            LinkSource::VideoSite => {
                let Some(candidate) = candidate else {
                    warning!("No title metadata for {}", link.url());
                    return Ok(None);
                };
                self.search(&guess_from_candidate(candidate)).await
            }
        }
    }

    /// Searches for a guess and takes the first result as is.
    ///
    /// # Errors
    ///
    /// `SyncError::MalformedInput` when the guess has no song title.
    pub async fn search(&self, guess: &NormalizedGuess) -> Result<Option<CanonicalTrack>, SyncError> {
        if guess.song.trim().is_empty() {
            return Err(SyncError::MalformedInput(
                "title is empty after removing metadata".to_string(),
            ));
        }

        let query = build_search_query(guess);
        let results = self.api.search_tracks(&query, SEARCH_LIMIT).await?;
        Ok(results.into_iter().next())
    }
}
