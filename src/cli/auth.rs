use crate::{config::AuthConfig, error, info, spotify, success, warning};

pub async fn auth() {
    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    info!("Opening browser for Spotify authorization...");
    let api_url = config.api_url.clone();
    let token = match spotify::auth::authorize(config).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed: {}", e),
    };

    match spotify::auth::current_user(&api_url, &token.access_token).await {
        Ok(user) => success!(
            "Authorized as: {} ({})",
            user.display_name.as_deref().unwrap_or("Unknown"),
            user.id
        ),
        Err(e) => warning!("Could not confirm the authorized account: {}", e),
    }

    if !token.scope.is_empty() {
        info!("Granted scopes: {}", token.scope);
    }

    success!("Authentication successful! Add this line to your .env file:");
    println!("SPOTIFY_REFRESH_TOKEN={}", token.refresh_token);
}
