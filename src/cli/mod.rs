//! # CLI Module
//!
//! User-facing commands. Each command loads its configuration, builds the
//! Spotify client and hands off to the [`crate::management`] pipeline.
//!
//! ## Commands
//!
//! - [`auth`] - one-time authorization, prints the refresh token for `.env`
//! - [`sync_message`] - processes a single message given on the command line
//! - [`watch`] - processes stdin line by line, one message per line
//! - [`resolve`] - resolves one link without writing to the playlist
//! - [`normalize`] - shows how a video title is split, offline
//!
//! ## Usage
//!
//! ```bash
//! groovebot auth
//! groovebot sync "check this https://youtu.be/dQw4w9WgXcQ"
//! tail -f channel.log | groovebot watch
//! groovebot normalize "Artist - Song (Official Video) [HD]"
//! ```
//!
//! Configuration problems are fatal and reported through [`crate::error!`].
//! Failures on individual links are reported and never stop the command.

mod auth;
mod resolve;
mod sync;

pub use auth::auth;
pub use resolve::normalize;
pub use resolve::resolve;
pub use sync::sync_message;
pub use sync::watch;

use crate::{config::Config, error};

pub(crate) fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    }
}
