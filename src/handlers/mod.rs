pub mod chat;
pub mod health;
pub mod newsletter;
pub mod widget;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::chat))
        .route("/api/newsletter", post(newsletter::subscribe))
        .route("/api/widget/catalog", get(widget::catalog))
        .route("/api/widget/sessions", post(widget::create_session))
        .route("/api/widget/sessions/:id", get(widget::get_session))
        .route("/api/widget/sessions/:id/events", post(widget::post_event))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
