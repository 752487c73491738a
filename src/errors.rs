use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::engine::FormError;
use crate::widget::WidgetError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Widget(WidgetError),

    #[error("email delivery failed: {0}")]
    Mailer(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<WidgetError> for AppError {
    fn from(err: WidgetError) -> Self {
        match err {
            WidgetError::Form(e) => AppError::Form(e),
            WidgetError::EmptyMessage => AppError::BadRequest("message is empty".to_string()),
            other => AppError::Widget(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Widget(_) => StatusCode::CONFLICT,
            AppError::Mailer(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
