use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{BookingRequest, ChatMessage};
use crate::services::dispatch;
use crate::state::AppState;

// POST /api/chat
//
// Chat turns and `create_booking` share this route. Anything that goes wrong
// past input validation still answers 200 with an apology.
pub async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "chat request is not JSON");
            return Json(dispatch::apology(&state.config.agency)).into_response();
        }
    };

    let worker = Arc::clone(&state);
    match tokio::spawn(async move { route(&worker, payload).await }).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "chat request panicked");
            Json(dispatch::apology(&state.config.agency)).into_response()
        }
    }
}

async fn route(state: &AppState, payload: Value) -> Response {
    if payload.get("action").and_then(Value::as_str) == Some("create_booking") {
        let data = match booking_data(&payload) {
            Ok(data) => data,
            Err(e) => return e.into_response(),
        };
        let response = match serde_json::from_value::<BookingRequest>(data.clone()) {
            Ok(booking) => dispatch::create_booking(state, booking).await,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable booking data");
                dispatch::booking_recorded(&state.config.agency)
            }
        };
        return Json(response).into_response();
    }

    let Some(raw) = payload.get("messages").and_then(Value::as_array) else {
        return AppError::BadRequest("Messages array is required".to_string()).into_response();
    };
    let history = parse_history(raw);
    Json(dispatch::send_chat_turn(state, &history).await).into_response()
}

/// Only a missing `bookingData` is a client error; anything present is
/// acknowledged.
fn booking_data(payload: &Value) -> Result<&Value, AppError> {
    match payload.get("bookingData") {
        None | Some(Value::Null) => Err(AppError::BadRequest("Booking data is required".to_string())),
        Some(data) => Ok(data),
    }
}

/// Keeps the entries shaped like `{role, content}`; anything else is dropped.
fn parse_history(raw: &[Value]) -> Vec<ChatMessage> {
    raw.iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed chat message");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Role;

    #[test]
    fn test_parse_history_skips_malformed_entries() {
        let raw = json!([
            {"role": "user", "content": "hi"},
            {"role": "tool", "content": "x"},
            "just a string",
            {"role": "assistant", "content": "hello"}
        ]);
        let history = parse_history(raw.as_array().unwrap());
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[test]
    fn test_booking_data_required() {
        assert!(booking_data(&json!({"action": "create_booking"})).is_err());
        assert!(booking_data(&json!({"bookingData": null})).is_err());
        assert_eq!(
            booking_data(&json!({"bookingData": "Asha"})).unwrap(),
            &json!("Asha")
        );
    }
}
