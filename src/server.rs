use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config::AuthConfig, error::SyncError, types::PkceSession};

/// Serves `/health` and the OAuth `/callback` until the task is aborted.
pub async fn start_api_server(
    state: Arc<Mutex<Option<PkceSession>>>,
    config: Arc<AuthConfig>,
) -> Result<(), SyncError> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(config.clone()));

    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| SyncError::Config(format!("invalid server address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
