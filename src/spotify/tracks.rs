use reqwest::StatusCode;

use crate::{
    error::SyncError,
    management::TokenRefresher,
    spotify::SpotifyClient,
    types::{CanonicalTrack, SearchResponse, TrackObject},
};

impl<R> SpotifyClient<R>
where
    R: TokenRefresher + Send + Sync,
{
    /// Fetches a track by its Spotify id.
    ///
    /// A `404 Not Found` (e.g. a removed track) yields `Ok(None)`; every
    /// other non-success status is a transport failure.
    pub async fn get_track(&self, track_id: &str) -> Result<Option<CanonicalTrack>, SyncError> {
        let api_url = self.endpoint(&format!("tracks/{track_id}"));
        let response = self.execute(self.http.get(&api_url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let track = response.error_for_status()?.json::<TrackObject>().await?;
        Ok(CanonicalTrack::from_wire(track))
    }

    /// Searches tracks and returns the complete records in ranked order.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<CanonicalTrack>, SyncError> {
        let api_url = self.endpoint("search");
        let limit = limit.to_string();
        let request = self.http.get(&api_url).query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit.as_str()),
        ]);

        let response = self.execute(request).await?.error_for_status()?;
        let results = response.json::<SearchResponse>().await?;

        Ok(results
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(CanonicalTrack::from_wire)
            .collect())
    }
}
