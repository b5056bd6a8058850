use groovebot::extract::{LinkReference, candidate_from_info};
use groovebot::management::{LinkOutcome, LinkStatus, SyncOutcome};
use groovebot::types::{CanonicalTrack, NormalizedGuess, TrackObject};
use groovebot::utils::*;
use serde_json::json;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Base64url without padding
    assert!(!challenge.contains('='));
    assert!(!challenge.contains('+'));
    assert!(!challenge.contains('/'));
}

#[test]
fn test_generate_code_challenge_known_value() {
    // RFC 7636 appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 32);
    assert_ne!(state, generate_state());
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("abc123"), "spotify:track:abc123");
}

#[test]
fn test_candidate_from_info_prefers_music_metadata() {
    let info = json!({
        "title": "Dylan Gossett - Coal (Lyric Video)",
        "uploader": "DylanGossettVEVO",
        "artist": "Dylan Gossett",
        "track": "Coal"
    });

    let candidate = candidate_from_info(&info).unwrap();
    assert_eq!(candidate.raw_title, "Dylan Gossett - Coal (Lyric Video)");
    assert_eq!(candidate.uploader_hint.as_deref(), Some("Dylan Gossett"));
    assert_eq!(candidate.track.as_deref(), Some("Coal"));
}

#[test]
fn test_candidate_from_info_falls_back_to_uploader() {
    let info = json!({
        "title": "Just A Song Title",
        "uploader": "Some Channel",
        "artist": ""
    });

    let candidate = candidate_from_info(&info).unwrap();
    assert_eq!(candidate.uploader_hint.as_deref(), Some("Some Channel"));
    assert_eq!(candidate.track, None);
}

#[test]
fn test_candidate_from_info_without_title() {
    assert!(candidate_from_info(&json!({ "uploader": "Some Channel" })).is_none());
    assert!(candidate_from_info(&json!({ "title": "   " })).is_none());
}

#[test]
fn test_canonical_track_from_wire() {
    let wire: TrackObject = serde_json::from_value(json!({
        "id": "4cOdK2wGLETKBW3PvgPWqT",
        "name": "Drag Path",
        "artists": [{ "name": "Twenty One Pilots" }]
    }))
    .unwrap();

    let track = CanonicalTrack::from_wire(wire).unwrap();
    assert_eq!(track.display_name(), "Twenty One Pilots - Drag Path");

    let local: TrackObject = serde_json::from_value(json!({ "id": null, "name": "Local" })).unwrap();
    assert!(CanonicalTrack::from_wire(local).is_none());
}

#[test]
fn test_outcome_row() {
    let outcome = LinkOutcome {
        link: LinkReference::parse("https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT")
            .unwrap(),
        candidate: None,
        result: Ok(LinkStatus::Synced {
            track: CanonicalTrack {
                id: "4cOdK2wGLETKBW3PvgPWqT".to_string(),
                display_artists: vec!["A".to_string(), "B".to_string()],
                display_name: "Song".to_string(),
            },
            outcome: SyncOutcome::Added,
        }),
    };

    let row = outcome_row(&outcome);
    assert_eq!(row.link, "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT");
    assert_eq!(row.track, "A, B - Song");
    assert_eq!(row.status, "added");
}

#[test]
fn test_guess_row() {
    let guess = NormalizedGuess {
        song: "Song".to_string(),
        artist: None,
    };

    let row = guess_row(&guess, "Song".to_string());
    assert_eq!(row.artist, "-");
    assert_eq!(row.query, "Song");
}
