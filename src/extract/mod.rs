//! # Extraction Module
//!
//! Turns chat text into structured input for track resolution:
//!
//! - [`links`] - finds video and track links in free text
//! - [`title`] - strips metadata from video titles and splits artist/song
//! - [`metadata`] - fetches raw video titles through `yt-dlp`

pub mod links;
pub mod metadata;
pub mod title;

pub use links::{LinkReference, LinkSource, extract_links};
pub use metadata::{MetadataExtractor, YtDlpExtractor, candidate_from_info};
pub use title::{UNKNOWN_ARTIST, guess_from_candidate, normalize_title, strip_metadata};
