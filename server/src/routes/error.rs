//! Service error to HTTP response mapping.
//!
//! Every failing route answers `{"detail": "..."}`. 5xx outcomes are logged
//! here once so handlers can just use `?`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use records::{ChatRequestError, ErrorBody};

use crate::services::apps::AppsError;
use crate::services::assistant::ChatError;
use crate::services::blog::BlogError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<AppsError> for ApiError {
    fn from(err: AppsError) -> Self {
        match err {
            AppsError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Apps data not found"),
            AppsError::InvalidFormat(e) => {
                tracing::error!(error = %e, "apps.json does not parse");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Invalid apps data format")
            }
            AppsError::Io(e) => {
                tracing::error!(error = %e, "apps.json read failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Error reading apps data")
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Blog post not found"),
            BlogError::Io(e) => {
                tracing::error!(error = %e, "blog read failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Error reading blog post: {e}"))
            }
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::LlmNotConfigured => Self::new(StatusCode::SERVICE_UNAVAILABLE, "Chat is not available"),
            ChatError::Llm(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "assistant call failed");
                Self::new(StatusCode::BAD_GATEWAY, "Chat error: assistant unavailable")
            }
            ChatError::EmptyReply => {
                tracing::warn!("assistant returned no text");
                Self::new(StatusCode::BAD_GATEWAY, "Chat error: empty reply")
            }
        }
    }
}

impl From<ChatRequestError> for ApiError {
    fn from(err: ChatRequestError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
