use crate::{
    error::SyncError,
    management::TokenRefresher,
    spotify::SpotifyClient,
    types::{AddTracksToPlaylistRequest, PlaylistItemsPage},
};

/// Restricts playlist pages to the entry ids.
const ITEM_ID_FIELDS: &str = "items(track(id))";

impl<R> SpotifyClient<R>
where
    R: TokenRefresher + Send + Sync,
{
    /// Fetches one page of a playlist, keeping only each entry's track id.
    pub async fn get_playlist_page(
        &self,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Option<String>>, SyncError> {
        let api_url = self.endpoint(&format!("playlists/{playlist_id}/items"));
        let request = self.http.get(&api_url).query(&[
            ("offset", offset.to_string()),
            ("limit", limit.to_string()),
            ("fields", ITEM_ID_FIELDS.to_string()),
        ]);

        let response = self.execute(request).await?.error_for_status()?;
        let page = response.json::<PlaylistItemsPage>().await?;

        Ok(page
            .items
            .into_iter()
            .map(|item| item.track.and_then(|track| track.id))
            .collect())
    }

    /// Appends track URIs to the end of a playlist.
    pub async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), SyncError> {
        let api_url = self.endpoint(&format!("playlists/{playlist_id}/items"));
        let body = AddTracksToPlaylistRequest {
            uris: uris.to_vec(),
        };

        self.execute(self.http.post(&api_url).json(&body))
            .await?
            .error_for_status()?;
        Ok(())
    }
}
