//! Recovers a (song, artist) pair from decorated video titles.
//!
//! Stripping runs before splitting so that bracketed annotations such as
//! `(Live in Utah | July 2025)` never leak their separators into the split.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{NormalizedGuess, TitleCandidate};

/// Placeholder some metadata sources use when no artist is known.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Whole-word keywords that mark a bracketed span as metadata.
const METADATA_KEYWORDS: &[&str] = &[
    "official",
    "music",
    "lyrics?",
    "video",
    "audio",
    "hd",
    "hq",
    "4k",
    "1080p",
    "720p",
    "remaster(?:ed)?",
    "tv",
    "version",
    "edit",
    "remix",
    "cover",
    "acoustic",
    "unplugged",
    "session",
    "performance",
    "concert",
    "tour",
];

/// Quality markers stripped from the end of a title when not bracketed.
const QUALITY_TOKENS: &[&str] = &["1080p", "720p", "480p", "4k", "hd", "hq"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    ArtistFirst,
    SongFirst,
}

struct SplitRule {
    separator: &'static str,
    order: Order,
}

/// Tried in order; the first separator present wins.
const SPLIT_RULES: &[SplitRule] = &[
    SplitRule {
        separator: " - ",
        order: Order::ArtistFirst,
    },
    SplitRule {
        separator: " – ",
        order: Order::ArtistFirst,
    },
    SplitRule {
        separator: " — ",
        order: Order::ArtistFirst,
    },
    SplitRule {
        separator: " | ",
        order: Order::SongFirst,
    },
];

// Matching pairs only; one level of the other bracket kind may nest inside.
static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(((?:[^()\[\]]|\[[^\[\]]*\])*)\)|\[((?:[^()\[\]]|\([^()]*\))*)\]")
        .expect("valid bracket pattern")
});

static METADATA_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\blive\s+(?:in|at|from|on)\s+\S".to_string(),
        format!(r"(?i)\b(?:{})\b", METADATA_KEYWORDS.join("|")),
        r"\b\d{4}\b".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid metadata pattern"))
    .collect()
});

static TRAILING_QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s+(?:{})(?:\s+hd)?\s*$",
        QUALITY_TOKENS.join("|")
    ))
    .expect("valid quality pattern")
});

fn is_metadata(span: &str) -> bool {
    METADATA_RULES.iter().any(|rule| rule.is_match(span))
}

/// Removes bracketed metadata spans and trailing quality markers.
///
/// Brackets whose contents are not metadata (e.g. `(feat. X)`) are kept.
/// Whitespace runs are collapsed and the result is trimmed.
pub fn strip_metadata(raw_title: &str) -> String {
    let without_brackets = BRACKETED.replace_all(raw_title, |caps: &regex::Captures| {
        let span = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        if is_metadata(span) {
            String::new()
        } else {
            caps[0].to_string()
        }
    });

    let collapsed = collapse_whitespace(&without_brackets);
    let without_quality = TRAILING_QUALITY.replace(&collapsed, "");
    collapse_whitespace(&without_quality)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a stripped title into (song, artist).
///
/// Dash separators read `Artist - Song`, the pipe reads `Song | Artist`.
/// Without a usable separator the whole title is the song and the artist is
/// the uploader hint.
pub fn normalize_title(raw_title: &str, uploader_hint: Option<&str>) -> NormalizedGuess {
    let stripped = strip_metadata(raw_title);

    for rule in SPLIT_RULES {
        let Some((left, right)) = stripped.split_once(rule.separator) else {
            continue;
        };

        let (artist, song) = match rule.order {
            Order::ArtistFirst => (left.trim(), right.trim()),
            Order::SongFirst => (right.trim(), left.trim()),
        };

        if artist.is_empty() || song.is_empty() {
            continue;
        }

        return NormalizedGuess {
            song: song.to_string(),
            artist: Some(artist.to_string()),
        };
    }

    NormalizedGuess {
        song: stripped,
        artist: hint(uploader_hint),
    }
}

/// Builds a guess from extractor output.
///
/// Music metadata supplied by the video site takes precedence over parsing
/// the title.
pub fn guess_from_candidate(candidate: &TitleCandidate) -> NormalizedGuess {
    match candidate.track.as_deref().map(str::trim) {
        Some(track) if !track.is_empty() => NormalizedGuess {
            song: track.to_string(),
            artist: hint(candidate.uploader_hint.as_deref()),
        },
        _ => normalize_title(&candidate.raw_title, candidate.uploader_hint.as_deref()),
    }
}

fn hint(uploader_hint: Option<&str>) -> Option<String> {
    uploader_hint
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

impl NormalizedGuess {
    /// The artist when it is usable in a search, i.e. neither absent nor the
    /// `Unknown` placeholder.
    pub fn searchable_artist(&self) -> Option<&str> {
        self.artist
            .as_deref()
            .filter(|artist| *artist != UNKNOWN_ARTIST)
    }
}
