use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::catalog::{DEMO_TIME_SLOTS, INDUSTRIES};
use crate::models::{ContactType, Priority, ServiceType, SupportCategory};
use crate::services::dispatch;
use crate::state::AppState;
use crate::widget::{ChatWidget, Effect, WidgetError, WidgetEvent, WidgetView};

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub view: WidgetView,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("widget session {id}"))
}

// POST /api/widget/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let widget = ChatWidget::new(state.config.agency.clone());
    let view = widget.view();
    let id = state.sessions.create(widget);
    tracing::info!(session = %id, "widget session opened");
    (StatusCode::CREATED, Json(SessionResponse { id, view }))
}

// GET /api/widget/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let view = state
        .sessions
        .with(id, |widget| widget.view())
        .ok_or_else(|| not_found(id))?;
    Ok(Json(SessionResponse { id, view }))
}

// POST /api/widget/sessions/:id/events
//
// The session lock is released while effects run; the widget stays busy
// until their outcomes are applied. Effects run in their own task so a
// dropped request still settles the session.
pub async fn post_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(event): Json<WidgetEvent>,
) -> Result<Json<SessionResponse>, AppError> {
    let (effects, conversation) = state
        .sessions
        .with(id, |widget| {
            widget
                .apply(event)
                .map(|effects| (effects, widget.conversation()))
        })
        .ok_or_else(|| not_found(id))??;

    if !effects.is_empty() {
        let worker = Arc::clone(&state);
        tokio::spawn(async move { settle(&worker, id, conversation, effects).await })
            .await
            .map_err(|e| AppError::Internal(format!("widget effects task failed: {e}")))?;
    }

    let view = state
        .sessions
        .with(id, |widget| widget.view())
        .ok_or_else(|| not_found(id))?;
    Ok(Json(SessionResponse { id, view }))
}

/// Runs each effect and feeds its outcome back. A panicking effect resolves
/// with the failure outcome so the widget never stays busy.
async fn settle(state: &Arc<AppState>, id: Uuid, conversation: u64, effects: Vec<Effect>) {
    for effect in effects {
        let fallback = dispatch::failed_outcome(&state.config.agency, &effect);
        let worker = Arc::clone(state);
        let outcome =
            match tokio::spawn(async move { dispatch::run_effect(&worker, effect).await }).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(session = %id, error = %e, "widget effect panicked");
                    fallback
                }
            };

        let resolved = state.sessions.with(id, |widget| {
            if widget.conversation() != conversation {
                return Err(WidgetError::NothingPending);
            }
            widget.resolve(outcome)
        });
        match resolved {
            Some(Ok(())) => {}
            Some(Err(e)) => tracing::debug!(session = %id, error = %e, "dropping stale outcome"),
            None => tracing::debug!(session = %id, "session closed before outcome arrived"),
        }
    }
}

// GET /api/widget/catalog
//
// Option lists the widget renders for the select steps.
pub async fn catalog() -> Json<Value> {
    let services: Vec<Value> = ServiceType::ALL
        .iter()
        .map(|s| {
            json!({
                "id": s,
                "name": s.service_name(),
                "demoName": s.demo_name(),
                "subServices": s.sub_services(),
                "demoSubServices": s.demo_sub_services(),
            })
        })
        .collect();
    let contact_types: Vec<Value> = ContactType::ALL
        .iter()
        .map(|t| json!({ "id": t, "name": t.display_name() }))
        .collect();
    let support_categories: Vec<Value> = SupportCategory::ALL
        .iter()
        .map(|c| json!({ "id": c, "name": c.display_name() }))
        .collect();
    let priorities: Vec<Value> = Priority::ALL
        .iter()
        .map(|p| json!({ "id": p, "responseTime": p.response_time() }))
        .collect();

    Json(json!({
        "services": services,
        "industries": INDUSTRIES,
        "demoTimeSlots": DEMO_TIME_SLOTS,
        "contactTypes": contact_types,
        "supportCategories": support_categories,
        "priorities": priorities,
    }))
}
