use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Reports engine readiness and credential presence. The key's presence is
/// re-read from the environment on every call; its value is never exposed.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let api_key_set = std::env::var("GEMINI_API_KEY")
        .map(|v| !v.is_empty())
        .unwrap_or(false);

    Json(json!({
        "status": "healthy",
        "gemini_initialized": state.engine.is_some(),
        "api_key_set": api_key_set,
    }))
}
