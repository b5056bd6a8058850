use thiserror::Error;

/// Failures surfaced by the resolution and synchronization pipeline.
///
/// A lookup or search that finds nothing is not an error; it is reported as
/// `None` by the operation that performed it.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("authorization failure: {0}")]
    Auth(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        SyncError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Transport(format!("unexpected response body: {e}"))
    }
}

impl SyncError {
    /// Whether the failure came from the remote service or the network.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }
}
