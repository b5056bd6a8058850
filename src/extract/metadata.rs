use std::{future::Future, process::Stdio};

use serde_json::Value;
use tokio::process::Command;

use crate::{error::SyncError, types::TitleCandidate, warning};

/// Turns a video URL into raw title metadata.
pub trait MetadataExtractor {
    /// Returns the candidate for `url`, or `None` when nothing usable could
    /// be extracted.
    fn extract(&self, url: &str) -> impl Future<Output = Option<TitleCandidate>> + Send;
}

/// Extracts video metadata by running the `yt-dlp` binary.
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    program: String,
}

impl YtDlpExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn dump_info(&self, url: &str) -> Result<Value, SyncError> {
        let output = Command::new(&self.program)
            .args([
                "--dump-single-json",
                "--skip-download",
                "--no-warnings",
                "--no-playlist",
            ])
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SyncError::Transport(format!(
                "yt-dlp failed: {}",
                stderr.trim()
            )));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| SyncError::MalformedInput(format!("yt-dlp returned invalid JSON: {e}")))
    }
}

impl MetadataExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str) -> Option<TitleCandidate> {
        match self.dump_info(url).await {
            Ok(info) => candidate_from_info(&info),
            Err(e) => {
                warning!("Failed to extract video metadata for {}: {}", url, e);
                None
            }
        }
    }
}

/// Maps a yt-dlp info document to a title candidate.
///
/// The uploader hint prefers the music `artist`, then `creator`, then the
/// channel `uploader`. A `track` field marks site-supplied music metadata.
pub fn candidate_from_info(info: &Value) -> Option<TitleCandidate> {
    let field = |name: &str| {
        info.get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let hint = field("artist")
        .or_else(|| field("creator"))
        .or_else(|| field("uploader"));
    let track = field("track");
    let raw_title = field("title").or_else(|| track.clone())?;

    let candidate = TitleCandidate::new(raw_title, hint);
    Some(match track {
        Some(track) => candidate.with_track(track),
        None => candidate,
    })
}
