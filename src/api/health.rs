use axum::response::Json;
use serde_json::{Value, json};

/// Liveness check for the authorization callback server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "awaiting-callback",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
