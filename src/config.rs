//! Configuration management for groovebot.
//!
//! Values come from the process environment, which is seeded from `.env`
//! files before anything reads it:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/groovebot/.env`)
//! 4. Application defaults for optional values

use std::{env, path::PathBuf};

use crate::error::SyncError;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private playlist-read-private";
pub const DEFAULT_YTDLP_PATH: &str = "yt-dlp";
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Loads `.env` files into the process environment.
///
/// Looks in the working directory first, then in the platform-specific local
/// data directory, creating that directory if it does not exist yet:
/// - Linux: `~/.local/share/groovebot/.env`
/// - macOS: `~/Library/Application Support/groovebot/.env`
/// - Windows: `%LOCALAPPDATA%/groovebot/.env`
///
/// Variables already present in the environment are never overwritten and a
/// missing file is not an error.
///
/// # Errors
///
/// Fails if the data directory cannot be created or a present `.env` file
/// cannot be parsed.
pub async fn load_env() -> Result<(), SyncError> {
    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    for candidate in [PathBuf::from(".env"), path] {
        if candidate.is_file() {
            dotenv::from_path(&candidate).map_err(|e| {
                SyncError::Config(format!("cannot read {}: {}", candidate.display(), e))
            })?;
        }
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("groovebot/.env");
    path
}

/// Client credentials of the registered Spotify application.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Everything the sync pipeline needs at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: SpotifyCredentials,
    pub refresh_token: String,
    pub playlist_id: String,
    pub api_url: String,
    pub token_url: String,
    pub ytdlp_path: String,
    pub page_size: usize,
}

impl Config {
    /// Reads the pipeline configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Config` naming every missing required variable.
    pub fn from_env() -> Result<Self, SyncError> {
        let mut missing = Vec::new();
        let client_id = required("SPOTIFY_CLIENT_ID", &mut missing);
        let client_secret = required("SPOTIFY_CLIENT_SECRET", &mut missing);
        let refresh_token = required("SPOTIFY_REFRESH_TOKEN", &mut missing);
        let playlist_id = required("SPOTIFY_PLAYLIST_ID", &mut missing);
        ensure_present(&missing)?;

        Ok(Self {
            credentials: SpotifyCredentials {
                client_id,
                client_secret,
            },
            refresh_token,
            playlist_id,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            ytdlp_path: optional("YTDLP_PATH", DEFAULT_YTDLP_PATH),
            page_size: page_size(),
        })
    }
}

/// Settings for the one-time authorization flow.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub credentials: SpotifyCredentials,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub redirect_uri: String,
    pub server_addr: String,
    pub scope: String,
}

impl AuthConfig {
    /// Reads the authorization settings from the environment.
    ///
    /// Only the client credentials are required.
    pub fn from_env() -> Result<Self, SyncError> {
        let mut missing = Vec::new();
        let client_id = required("SPOTIFY_CLIENT_ID", &mut missing);
        let client_secret = required("SPOTIFY_CLIENT_SECRET", &mut missing);
        ensure_present(&missing)?;

        Ok(Self {
            credentials: SpotifyCredentials {
                client_id,
                client_secret,
            },
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            redirect_uri: optional("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            scope: optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
        })
    }
}

fn required(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

fn optional(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn ensure_present(missing: &[&str]) -> Result<(), SyncError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Config(format!(
            "missing required environment variables: {}",
            missing.join(", ")
        )))
    }
}

// Spotify caps playlist pages at 100 items.
fn page_size() -> usize {
    env::var("GROOVEBOT_PAGE_SIZE")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map(|size| size.clamp(1, DEFAULT_PAGE_SIZE))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
