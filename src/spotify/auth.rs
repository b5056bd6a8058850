use std::{sync::Arc, time::Duration};

use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    config::{AuthConfig, SpotifyCredentials},
    error::SyncError,
    management::TokenRefresher,
    server::start_api_server,
    types::{CurrentUser, PkceSession, Token, TokenResponse},
    utils, warning,
};

/// How long `authorize` waits for the browser round trip.
pub const AUTHORIZATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Exchanges the long-lived refresh token for short-lived access tokens.
#[derive(Debug, Clone)]
pub struct SpotifyTokenRefresher {
    http: Client,
    token_url: String,
    credentials: SpotifyCredentials,
    refresh_token: String,
}

impl SpotifyTokenRefresher {
    pub fn new(
        http: Client,
        token_url: String,
        credentials: SpotifyCredentials,
        refresh_token: String,
    ) -> Self {
        Self {
            http,
            token_url,
            credentials,
            refresh_token,
        }
    }
}

impl TokenRefresher for SpotifyTokenRefresher {
    async fn refresh(&self) -> Result<TokenResponse, SyncError> {
        refresh_access_token(
            &self.http,
            &self.token_url,
            &self.credentials,
            &self.refresh_token,
        )
        .await
    }
}

/// Refreshes an access token with the `refresh_token` grant.
///
/// Client credentials travel as HTTP basic auth. Any failure, including a
/// rejected refresh token, is an authorization failure.
pub async fn refresh_access_token(
    http: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
    refresh_token: &str,
) -> Result<TokenResponse, SyncError> {
    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| SyncError::Auth(format!("token refresh request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SyncError::Auth(format!(
            "token refresh rejected ({status}): {body}"
        )));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| SyncError::Auth(format!("unexpected token response: {e}")))
}

/// Exchanges an authorization code for tokens.
///
/// Sends the PKCE verifier alongside the client credentials; the redirect
/// URI must match the one used in the authorization request.
pub async fn exchange_code(
    config: &AuthConfig,
    code: &str,
    verifier: &str,
) -> Result<Token, SyncError> {
    let response = Client::new()
        .post(&config.token_url)
        .basic_auth(
            &config.credentials.client_id,
            Some(&config.credentials.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await
        .map_err(|e| SyncError::Auth(format!("code exchange request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SyncError::Auth(format!(
            "code exchange rejected ({status}): {body}"
        )));
    }

    let json = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| SyncError::Auth(format!("unexpected token response: {e}")))?;

    let refresh_token = json
        .refresh_token
        .ok_or_else(|| SyncError::Auth("no refresh token in response".to_string()))?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token,
        scope: json.scope.unwrap_or_default(),
    })
}

/// Fetches the profile of the account that granted `access_token`.
pub async fn current_user(api_url: &str, access_token: &str) -> Result<CurrentUser, SyncError> {
    let user = Client::new()
        .get(format!("{}/me", api_url.trim_end_matches('/')))
        .bearer_auth(access_token)
        .send()
        .await?
        .error_for_status()?
        .json::<CurrentUser>()
        .await?;
    Ok(user)
}

/// Builds the URL the user opens to grant access.
pub fn authorization_url(
    config: &AuthConfig,
    code_challenge: &str,
    state: &str,
) -> Result<String, SyncError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("state", state),
            ("scope", config.scope.as_str()),
        ],
    )
    .map_err(|e| SyncError::Config(format!("invalid authorization url: {e}")))?;
    Ok(url.to_string())
}

/// Runs the one-time authorization flow and returns the granted tokens.
///
/// 1. Generates a PKCE verifier/challenge and a `state` value
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback to exchange the code
///
/// # Errors
///
/// Returns `SyncError::Auth` when no token arrives within
/// [`AUTHORIZATION_TIMEOUT`].
pub async fn authorize(config: AuthConfig) -> Result<Token, SyncError> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state = utils::generate_state();

    let shared_state: Arc<Mutex<Option<PkceSession>>> = Arc::new(Mutex::new(Some(PkceSession {
        code_verifier,
        state: state.clone(),
        token: None,
    })));

    let config = Arc::new(config);
    let auth_url = authorization_url(&config, &code_challenge, &state)?;

    let server_state = Arc::clone(&shared_state);
    let server_config = Arc::clone(&config);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state, server_config).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state, AUTHORIZATION_TIMEOUT).await;
    server.abort();

    token.ok_or_else(|| SyncError::Auth("authorization failed or timed out".to_string()))
}

/// Polls the shared session until the callback stored a token.
async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceSession>>>,
    max_wait: Duration,
) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|session| session.token.clone()) {
            return Some(token);
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
