use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const UNEXPECTED_ERROR: &str = "Unexpected server error";

/// Error returned by handlers.
///
/// `Detail` is a deliberate rejection and renders `{"detail": ...}`.
/// `Unexpected` is anything nobody raised on purpose and renders the generic
/// `{"error": "Unexpected server error", "details": ...}` body with 500.
#[derive(Debug)]
pub enum ApiError {
    Detail { status: StatusCode, detail: String },
    Unexpected(String),
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Detail { status, detail: detail.into() }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_unexpected() {
            error!(error = %e, "unexpected service error");
            return ApiError::Unexpected(e.to_string());
        }
        let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %e, status = status.as_u16(), "request failed");
        }
        ApiError::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError::new(r.status(), r.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        ApiError::new(r.status(), r.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        ApiError::new(r.status(), r.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Detail { status, detail } => {
                (status, Json(serde_json::json!({ "detail": detail }))).into_response()
            }
            ApiError::Unexpected(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": UNEXPECTED_ERROR, "details": details })),
            )
                .into_response(),
        }
    }
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Response for a handler that panicked; used with `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    error!(event = "handler_panic", %details, "request handler panicked");
    ApiError::Unexpected(details).into_response()
}

/// Failures while preparing the store, before the listener is bound.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
