use crate::{
    config::DEFAULT_PAGE_SIZE,
    error::SyncError,
    extract::{LinkReference, MetadataExtractor, extract_links},
    info,
    management::{PlaylistSync, SyncOutcome, TrackResolver},
    spotify::SpotifyApi,
    success,
    types::{CanonicalTrack, TitleCandidate},
    warning,
};

/// What happened to a link once resolution finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Synced {
        track: CanonicalTrack,
        outcome: SyncOutcome,
    },
    /// The service has no track for this link.
    Unresolved,
}

/// The result of processing one link of a message.
#[derive(Debug)]
pub struct LinkOutcome {
    pub link: LinkReference,
    pub candidate: Option<TitleCandidate>,
    pub result: Result<LinkStatus, SyncError>,
}

impl LinkOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.result, Ok(LinkStatus::Synced { .. }))
    }
}

/// Runs every music link of a message through resolution and playlist sync.
///
/// Links are handled one after another; a failure on one link never stops
/// the next one.
pub struct MessageProcessor<'a, A, M> {
    api: &'a A,
    extractor: &'a M,
    playlist_id: String,
    page_size: usize,
}

impl<'a, A, M> MessageProcessor<'a, A, M>
where
    A: SpotifyApi + Sync,
    M: MetadataExtractor + Sync,
{
    pub fn new(api: &'a A, extractor: &'a M, playlist_id: impl Into<String>) -> Self {
        Self {
            api,
            extractor,
            playlist_id: playlist_id.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Processes a message and returns one outcome per link, in link order.
    pub async fn process(&self, text: &str) -> Vec<LinkOutcome> {
        let links: Vec<LinkReference> = extract_links(text).collect();
        if links.is_empty() {
            return Vec::new();
        }

        info!("Found {} music link(s) in message", links.len());

        let mut outcomes = Vec::with_capacity(links.len());
        for link in links {
            outcomes.push(self.process_link(link).await);
        }
        outcomes
    }

    async fn process_link(&self, link: LinkReference) -> LinkOutcome {
        let candidate = if link.is_video() {
            self.extractor.extract(link.url()).await
        } else {
            None
        };

        let result = self.sync_link(&link, candidate.as_ref()).await;
        report(&link, candidate.as_ref(), &result);

        LinkOutcome {
            link,
            candidate,
            result,
        }
    }

    async fn sync_link(
        &self,
        link: &LinkReference,
        candidate: Option<&TitleCandidate>,
    ) -> Result<LinkStatus, SyncError> {
        let resolver = TrackResolver::new(self.api);
        let Some(track) = resolver.resolve(link, candidate).await? else {
            return Ok(LinkStatus::Unresolved);
        };

        let playlist =
            PlaylistSync::new(self.api, self.playlist_id.as_str()).with_page_size(self.page_size);
        let outcome = playlist.ensure_present(&track).await?;

        Ok(LinkStatus::Synced { track, outcome })
    }
}

fn report(
    link: &LinkReference,
    candidate: Option<&TitleCandidate>,
    result: &Result<LinkStatus, SyncError>,
) {
    match result {
        Ok(LinkStatus::Synced { track, outcome }) if outcome.inserted() => {
            success!("Added to playlist: {}", track.display_name())
        }
        Ok(LinkStatus::Synced { track, .. }) => {
            info!("Already in playlist: {}", track.display_name())
        }
        Ok(LinkStatus::Unresolved) => match candidate {
            Some(c) => warning!(
                "Could not find Spotify track for {} (title: {}, uploader: {})",
                link.url(),
                c.raw_title,
                c.uploader_hint.as_deref().unwrap_or("-")
            ),
            None => warning!("Could not find Spotify track for {}", link.url()),
        },
        Err(e) => warning!("Error processing link {}: {}", link.url(), e),
    }
}
