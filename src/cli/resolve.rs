use tabled::Table;

use crate::{
    cli::load_config,
    error,
    extract::{LinkReference, MetadataExtractor, YtDlpExtractor, guess_from_candidate, normalize_title},
    management::{TrackResolver, build_search_query},
    spotify::SpotifyClient,
    success,
    types::TitleCandidate,
    utils, warning,
};

/// Resolves a single link without touching the playlist.
pub async fn resolve(url: String, title: Option<String>, uploader: Option<String>) {
    let link = match LinkReference::parse(&url) {
        Ok(link) => link,
        Err(e) => error!("{}", e),
    };

    let config = load_config();
    let client = SpotifyClient::from_config(&config);

    let candidate = match (link.is_video(), title) {
        (true, Some(title)) => Some(TitleCandidate::new(title, uploader)),
        (true, None) => {
            let pb = utils::spinner("Fetching video metadata...");
            let candidate = YtDlpExtractor::new(config.ytdlp_path.as_str())
                .extract(link.url())
                .await;
            pb.finish_and_clear();
            candidate
        }
        (false, _) => None,
    };

    if let Some(candidate) = &candidate {
        let guess = guess_from_candidate(candidate);
        let query = build_search_query(&guess);
        println!("{}", Table::new(vec![utils::guess_row(&guess, query)]));
    }

    let pb = utils::spinner("Resolving link...");
    let result = TrackResolver::new(&client)
        .resolve(&link, candidate.as_ref())
        .await;
    pb.finish_and_clear();

    match result {
        Ok(Some(track)) => success!(
            "{} -> {} ({})",
            link,
            track.display_name(),
            utils::track_uri(&track.id)
        ),
        Ok(None) => warning!("Could not find Spotify track for {}", link),
        Err(e) => error!("Failed to resolve {}: {}", link, e),
    }
}

/// Shows how a video title is split, without any network access.
pub fn normalize(title: String, uploader: Option<String>) {
    let guess = normalize_title(&title, uploader.as_deref());
    let query = build_search_query(&guess);
    println!("{}", Table::new(vec![utils::guess_row(&guess, query)]));
}
