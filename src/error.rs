//! Typed errors and HTTP mapping.

use crate::response::error_body;
use crate::service::ValidationError;
use crate::model::MessageId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Request-level failure. Every variant carries the exact text returned in the `error` field.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Message not found for id {0}")]
    NotFound(MessageId),
    #[error("Request body too large")]
    PayloadTooLarge,
    /// `cause` is logged but never sent to the client.
    #[error("{message}")]
    Internal { message: String, cause: Option<String> },
}

impl AppError {
    pub fn invalid_body() -> Self {
        AppError::BadRequest("Invalid body".into())
    }

    pub fn invalid_id() -> Self {
        AppError::BadRequest("Invalid Id".into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            cause: None,
        }
    }

    pub fn internal_with_cause(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        AppError::Internal {
            message: message.into(),
            cause: Some(cause.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match &self {
            AppError::Internal { cause: Some(cause), .. } => {
                tracing::error!(status = status.as_u16(), error = %message, cause = %cause, "request failed");
            }
            _ if status.is_server_error() => {
                tracing::error!(status = status.as_u16(), error = %message, "request failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
            }
        }
        (status, Json(error_body(message))).into_response()
    }
}
