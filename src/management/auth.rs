use std::future::Future;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::SyncError,
    types::{AccessCredential, TokenResponse},
};

/// Seconds before the recorded expiry at which a token counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Performs the refresh exchange against the authorization server.
pub trait TokenRefresher {
    fn refresh(&self) -> impl Future<Output = Result<TokenResponse, SyncError>> + Send;
}

/// Holds the process-wide bearer token and refreshes it on expiry.
///
/// The cached credential sits behind an async mutex that stays locked for
/// the whole refresh, so concurrent callers wait for the single in-flight
/// refresh and then reuse its result.
pub struct TokenManager<R> {
    refresher: R,
    credential: Mutex<Option<AccessCredential>>,
}

impl<R: TokenRefresher> TokenManager<R> {
    pub fn new(refresher: R) -> Self {
        Self {
            refresher,
            credential: Mutex::new(None),
        }
    }

    /// Returns a bearer token valid for at least [`EXPIRY_MARGIN_SECS`].
    ///
    /// # Errors
    ///
    /// A failed refresh is returned as `SyncError::Auth` and leaves the
    /// cached credential untouched. No retry happens here.
    pub async fn ensure_valid(&self) -> Result<String, SyncError> {
        let mut credential = self.credential.lock().await;

        if let Some(current) = credential.as_ref() {
            if !is_expired(current, Utc::now().timestamp()) {
                return Ok(current.token.clone());
            }
        }

        let grant = self.refresher.refresh().await.map_err(|e| match e {
            SyncError::Auth(msg) => SyncError::Auth(msg),
            other => SyncError::Auth(other.to_string()),
        })?;

        let fresh = AccessCredential {
            token: grant.access_token,
            expires_at_epoch_seconds: Utc::now().timestamp() + grant.expires_in as i64,
        };
        let token = fresh.token.clone();
        *credential = Some(fresh);

        Ok(token)
    }
}

fn is_expired(credential: &AccessCredential, now: i64) -> bool {
    now >= credential.expires_at_epoch_seconds - EXPIRY_MARGIN_SECS
}
