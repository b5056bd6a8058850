//! Groovebot Library
//!
//! Watches chat messages for music links, resolves every link to a canonical
//! Spotify track and keeps a shared playlist free of duplicates.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local authorization callback server
//! - `cli` - Command-line interface implementations
//! - `config` - `.env` loading and typed configuration
//! - `error` - Pipeline error type
//! - `extract` - Link extraction, title normalization and video metadata
//! - `management` - Token cache, track resolution, playlist sync and dispatch
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and wire types
//! - `utils` - Small helpers shared across modules
//!
//! # Pipeline
//!
//! ```text
//! message text -> extract::extract_links -> (video) extract::normalize_title
//!              -> management::TrackResolver -> management::PlaylistSync
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::SyncError;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} music link(s) in message", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added to playlist: {}", track.display_name());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the binary and CLI layer. Library components
/// return errors instead.
///
/// # Example
///
/// ```
/// error!("Configuration error: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures such as a failed duplicate check.
///
/// # Example
///
/// ```
/// warning!("Failed to check playlist for duplicates: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
