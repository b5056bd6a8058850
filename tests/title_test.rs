use groovebot::extract::{guess_from_candidate, normalize_title, strip_metadata};
use groovebot::types::{NormalizedGuess, TitleCandidate};

fn guess(song: &str, artist: Option<&str>) -> NormalizedGuess {
    NormalizedGuess {
        song: song.to_string(),
        artist: artist.map(str::to_string),
    }
}

#[test]
fn test_strip_live_performance_with_location_and_date() {
    let title = "Men Without Hats – On Tuesday (Live in South Jordan, Utah | July 28, 2025)";
    assert_eq!(strip_metadata(title), "Men Without Hats – On Tuesday");
}

#[test]
fn test_strip_tv_appearance_with_trailing_quality() {
    let title = "The Easybeats - Friday On My Mind (French TV, 1967) 1080p HD";
    assert_eq!(strip_metadata(title), "The Easybeats - Friday On My Mind");
}

#[test]
fn test_strip_common_annotations() {
    let cases = [
        ("Dylan Gossett - Coal (Lyric Video)", "Dylan Gossett - Coal"),
        ("Twenty One Pilots - Drag Path (Official Video)", "Twenty One Pilots - Drag Path"),
        ("Artist - Song (Official Music Video)", "Artist - Song"),
        ("Artist - Song 1080p HD", "Artist - Song"),
        ("Artist - Song (Remastered)", "Artist - Song"),
        ("Artist - Song (Live at Madison Square Garden)", "Artist - Song"),
        ("Artist - Song (Acoustic Version)", "Artist - Song"),
        ("Artist - Song (Official Video) [HD]", "Artist - Song"),
        ("Artist - Song (2024)", "Artist - Song"),
    ];

    for (title, expected) in cases {
        assert_eq!(strip_metadata(title), expected, "title: {title}");
    }
}

#[test]
fn test_strip_each_metadata_rule() {
    let cases = [
        ("Artist - Song (Official)", "official"),
        ("Artist - Song (Music)", "music"),
        ("Artist - Song (Lyrics)", "lyrics"),
        ("Artist - Song (Video)", "video"),
        ("Artist - Song (Audio)", "audio"),
        ("Artist - Song [HD]", "hd"),
        ("Artist - Song [HQ]", "hq"),
        ("Artist - Song [4K]", "4k"),
        ("Artist - Song [1080p]", "1080p"),
        ("Artist - Song [720p]", "720p"),
        ("Artist - Song (Remaster)", "remaster"),
        ("Artist - Song (German TV)", "tv"),
        ("Artist - Song (Single Version)", "version"),
        ("Artist - Song (Radio Edit)", "edit"),
        ("Artist - Song (Club Remix)", "remix"),
        ("Artist - Song (Cover)", "cover"),
        ("Artist - Song (Acoustic)", "acoustic"),
        ("Artist - Song (Unplugged)", "unplugged"),
        ("Artist - Song (BBC Session)", "session"),
        ("Artist - Song (Studio Performance)", "performance"),
        ("Artist - Song (Full Concert)", "concert"),
        ("Artist - Song (Tour Edition Footage)", "keyword mid-span"),
        ("Artist - Song (Live in Berlin)", "live in"),
        ("Artist - Song (Live at the Apollo)", "live at"),
        ("Artist - Song (Live from Abbey Road)", "live from"),
        ("Artist - Song (Live on KEXP)", "live on"),
        ("Artist - Song (1999)", "year"),
        ("Artist - Song 480p", "trailing 480p"),
        ("Artist - Song 720p", "trailing 720p"),
        ("Artist - Song 4K", "trailing 4k"),
        ("Artist - Song HQ", "trailing hq"),
        ("Artist - Song HD", "trailing hd"),
    ];

    for (title, rule) in cases {
        assert_eq!(strip_metadata(title), "Artist - Song", "rule: {rule}");
    }
}

#[test]
fn test_strip_keywords_match_whole_words_only() {
    assert_eq!(
        strip_metadata("Artist - Song (Coverage Mix)"),
        "Artist - Song (Coverage Mix)"
    );
    assert_eq!(
        strip_metadata("Artist - Song (Editorial)"),
        "Artist - Song (Editorial)"
    );
}

#[test]
fn test_strip_nested_brackets() {
    assert_eq!(
        strip_metadata("Queen - Radio Ga Ga (Live at Wembley [1986])"),
        "Queen - Radio Ga Ga"
    );
    assert_eq!(
        strip_metadata("Artist - Song [Official Video (HD)]"),
        "Artist - Song"
    );
    assert_eq!(
        strip_metadata("Artist - Song (feat. Someone [UK])"),
        "Artist - Song (feat. Someone [UK])"
    );
}

#[test]
fn test_strip_ignores_mismatched_brackets() {
    assert_eq!(
        strip_metadata("Artist - Song (feat. X] [Official Video)"),
        "Artist - Song (feat. X] [Official Video)"
    );
}

#[test]
fn test_normalize_nested_metadata_stays_out_of_song() {
    assert_eq!(
        normalize_title("Queen - Radio Ga Ga (Live at Wembley [1986])", None),
        guess("Radio Ga Ga", Some("Queen"))
    );
}

#[test]
fn test_strip_leaves_plain_titles_alone() {
    assert_eq!(strip_metadata("Artist - Song"), "Artist - Song");
}

#[test]
fn test_strip_keeps_non_metadata_brackets() {
    assert_eq!(
        strip_metadata("Artist - Song (feat. Someone) (Official Audio)"),
        "Artist - Song (feat. Someone)"
    );
}

#[test]
fn test_strip_collapses_whitespace() {
    assert_eq!(strip_metadata("  Artist  -   Song  [4K] "), "Artist - Song");
}

#[test]
fn test_normalize_split_after_stripping() {
    let title = "Men Without Hats – On Tuesday (Live in South Jordan, Utah | July 28, 2025)";
    assert_eq!(
        normalize_title(title, None),
        guess("On Tuesday", Some("Men Without Hats"))
    );

    let title = "The Easybeats - Friday On My Mind (French TV, 1967) 1080p HD";
    assert_eq!(
        normalize_title(title, None),
        guess("Friday On My Mind", Some("The Easybeats"))
    );
}

#[test]
fn test_normalize_dash_separators() {
    assert_eq!(
        normalize_title("Dylan Gossett - Coal (Lyric Video)", None),
        guess("Coal", Some("Dylan Gossett"))
    );
    assert_eq!(
        normalize_title("Artist – Song Title", None),
        guess("Song Title", Some("Artist"))
    );
    assert_eq!(
        normalize_title("Artist — Song Title", None),
        guess("Song Title", Some("Artist"))
    );
}

#[test]
fn test_normalize_pipe_puts_song_first() {
    assert_eq!(
        normalize_title("Song Title | Artist Name", None),
        guess("Song Title", Some("Artist Name"))
    );
}

#[test]
fn test_normalize_splits_on_first_separator_only() {
    assert_eq!(
        normalize_title("Artist - Song - Extended", None),
        guess("Song - Extended", Some("Artist"))
    );
}

#[test]
fn test_normalize_separator_beats_uploader() {
    assert_eq!(
        normalize_title("Artist - Song", Some("Some Channel")),
        guess("Song", Some("Artist"))
    );
}

#[test]
fn test_normalize_falls_back_to_uploader() {
    assert_eq!(
        normalize_title("Just A Song Title", Some("Fallback Artist")),
        guess("Just A Song Title", Some("Fallback Artist"))
    );
}

#[test]
fn test_normalize_without_separator_or_uploader() {
    assert_eq!(
        normalize_title("Just A Song Title (Official Video)", None),
        guess("Just A Song Title", None)
    );
    assert_eq!(
        normalize_title("Just A Song Title", Some("   ")),
        guess("Just A Song Title", None)
    );
}

#[test]
fn test_normalize_leading_dash_is_not_a_separator() {
    assert_eq!(
        normalize_title("- Song", Some("Uploader")),
        guess("- Song", Some("Uploader"))
    );
}

#[test]
fn test_searchable_artist_filters_placeholder() {
    assert_eq!(guess("Song", Some("Unknown")).searchable_artist(), None);
    assert_eq!(guess("Song", None).searchable_artist(), None);
    assert_eq!(guess("Song", Some("Artist")).searchable_artist(), Some("Artist"));
}

#[test]
fn test_candidate_track_field_bypasses_title_parsing() {
    let candidate = TitleCandidate::new("Some Channel - Upload 2024 (Official)", Some("Artist".into()))
        .with_track("Real Song");
    assert_eq!(guess_from_candidate(&candidate), guess("Real Song", Some("Artist")));
}

#[test]
fn test_candidate_without_track_parses_title() {
    let candidate = TitleCandidate::new("Artist - Song (Official Video)", Some("Channel".into()));
    assert_eq!(guess_from_candidate(&candidate), guess("Song", Some("Artist")));

    let blank = TitleCandidate::new("Artist - Song", None).with_track("  ");
    assert_eq!(guess_from_candidate(&blank), guess("Song", Some("Artist")));
}
