use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let providers: Vec<&str> = state.providers.iter().map(|p| p.name()).collect();
    Json(json!({
        "status": "ok",
        "providers": providers,
        "widget_sessions": state.sessions.len(),
    }))
}
