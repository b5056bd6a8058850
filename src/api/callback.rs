use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{config::AuthConfig, spotify::auth::exchange_code, types::PkceSession, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
    Extension(config): Extension<Arc<AuthConfig>>,
) -> Html<String> {
    if let Some(error) = params.get("error") {
        warning!("Authorization denied: {}", error);
        return Html(format!("<h4>Authorization failed: {error}</h4>"));
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>".to_string());
    };

    let mut state = shared_state.lock().await;
    let Some(session) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>".to_string());
    };

    if params.get("state") != Some(&session.state) {
        warning!("Callback state did not match the authorization request");
        return Html("<h4>State mismatch, please retry.</h4>".to_string());
    }

    let verifier = session.code_verifier.clone();
    match exchange_code(&config, code, &verifier).await {
        Ok(token) => {
            session.token = Some(token);
            Html("<h2>Authorization successful.</h2><p>You can close this window.</p>".to_string())
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>".to_string())
        }
    }
}
