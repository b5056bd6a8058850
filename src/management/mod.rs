mod auth;
mod dispatch;
mod playlist;
mod resolver;

pub use auth::EXPIRY_MARGIN_SECS;
pub use auth::TokenManager;
pub use auth::TokenRefresher;
pub use dispatch::LinkOutcome;
pub use dispatch::LinkStatus;
pub use dispatch::MessageProcessor;
pub use playlist::PlaylistSync;
pub use playlist::SyncOutcome;
pub use resolver::SEARCH_LIMIT;
pub use resolver::TrackResolver;
pub use resolver::build_search_query;
