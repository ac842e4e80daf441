use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::core::state::AppState;

pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let token_stats = state.tokens.stats().await;

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "auth": {
            "tokenCacheInitialized": token_stats.is_initialized,
            "userCount": token_stats.user_count,
        }
    }))
}

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "Task Blaster API",
        "version": "1.0.0",
        "endpoints": [
            "/health",
            "/users",
            "/projects",
            "/tasks",
            "/tags",
            "/images",
            "/translations",
            "/status-definitions"
        ]
    }))
}
