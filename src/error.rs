//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Agent with the given ID was not found in the directory
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Chat session with the given ID was not found
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Message with the given ID was not found in the session
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// Agent configuration is invalid
    #[error("Invalid agent configuration: {0}")]
    InvalidAgentConfig(String),

    /// Error returned by the agent directory service
    #[error("Directory error: {0}")]
    Directory(#[from] crate::services::ServiceError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AgentNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::SessionNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MessageNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidAgentConfig(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Directory(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
