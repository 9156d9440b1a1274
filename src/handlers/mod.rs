pub mod results;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

// ─── Unified error type ──────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Feature not ready for live yet. Enable DEBUG mode.")]
    ServiceDisabled,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceDisabled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = serde_json::json!({
            "detail": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

// ─── Fallbacks ───────────────────────────────────────────────────

/// Active mode: any route not registered.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}

/// Gated mode: every request, whatever the method or path.
pub async fn service_disabled() -> AppError {
    AppError::ServiceDisabled
}
