use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::ports::RepositoryError;
use crate::application::use_cases::PortUseCaseError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl From<PortUseCaseError> for ApiError {
    fn from(err: PortUseCaseError) -> Self {
        match err {
            PortUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            PortUseCaseError::Repository(e @ RepositoryError::NotFound(_)) => {
                ApiError::not_found(e.to_string())
            }
            PortUseCaseError::Repository(e @ RepositoryError::AlreadyExists(_)) => {
                ApiError::conflict(e.to_string())
            }
            PortUseCaseError::Repository(e) => {
                error!("Repository error: {}", e);
                ApiError::internal_error("internal storage error")
            }
        }
    }
}
