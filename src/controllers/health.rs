use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::domain::tts::Provider;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Both providers are built at startup, so a running server has them available
pub async fn health_ready() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "providers": [Provider::Google.as_str(), Provider::OpenAi.as_str()],
        })),
    )
}
