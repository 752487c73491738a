use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::engine::fields::is_plausible_email;
use crate::errors::AppError;
use crate::models::NewsletterSignup;
use crate::services::notifications;
use crate::state::AppState;

// POST /api/newsletter
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(signup): Json<NewsletterSignup>,
) -> Result<Json<Value>, AppError> {
    if !is_plausible_email(&signup.email) {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }

    let subscribed_at = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let email = notifications::newsletter_email(
        &state.templates,
        &state.config.agency,
        &signup,
        &subscribed_at,
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .mailer
        .send(&email)
        .await
        .map_err(|e| AppError::Mailer(e.to_string()))?;

    tracing::info!(email = %signup.email.trim(), "newsletter signup");
    Ok(Json(json!({
        "success": true,
        "message": "Successfully subscribed to the newsletter!",
    })))
}
