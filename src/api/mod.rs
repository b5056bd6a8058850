//! # API Module
//!
//! HTTP endpoints of the short-lived local server used by `groovebot auth`.
//!
//! - [`callback`] - receives the authorization code, checks `state` and
//!   exchanges the code for tokens
//! - [`health`] - reports status and version

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
