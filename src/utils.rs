use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    management::{LinkOutcome, LinkStatus},
    types::{GuessTableRow, LinkOutcomeTableRow, NormalizedGuess},
};

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Opaque value echoed back by the authorization callback.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `spotify:track:<id>`
pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub fn outcome_row(outcome: &LinkOutcome) -> LinkOutcomeTableRow {
    let (track, status) = match &outcome.result {
        Ok(LinkStatus::Synced { track, outcome }) => (track.display_name(), outcome.to_string()),
        Ok(LinkStatus::Unresolved) => ("-".to_string(), "not found".to_string()),
        Err(e) => ("-".to_string(), e.to_string()),
    };

    LinkOutcomeTableRow {
        link: outcome.link.url().to_string(),
        track,
        status,
    }
}

pub fn guess_row(guess: &NormalizedGuess, query: String) -> GuessTableRow {
    GuessTableRow {
        song: guess.song.clone(),
        artist: guess.artist.clone().unwrap_or_else(|| "-".to_string()),
        query,
    }
}
