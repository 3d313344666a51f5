//! JSON body and `:id` path extraction.

use crate::error::AppError;
use crate::model::MessageId;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

/// JSON body decoded without requiring a `Content-Type` header.
/// Bodies over the router's limit are rejected as too large; any other read or decode
/// failure is "Invalid body".
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::invalid_body()
            }
        })?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode request body");
            AppError::invalid_body()
        })
    }
}

/// Integer message id from the `:id` path segment. Anything else is "Invalid Id".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageIdPath(pub MessageId);

#[async_trait]
impl<S> FromRequestParts<S> for MessageIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_id())?;
        raw.parse().map(MessageIdPath).map_err(|_| AppError::invalid_id())
    }
}
