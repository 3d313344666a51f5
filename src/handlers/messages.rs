//! Message CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, MessageIdPath};
use crate::model::{MessageBody, MessageId};
use crate::service::ServiceError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Storage failures are reported with the operation as prefix; the rest keep their own classification.
fn failure(context: &str, err: ServiceError) -> AppError {
    match err {
        ServiceError::Validation(e) => AppError::Validation(e),
        ServiceError::NotFound(id) => AppError::NotFound(id),
        ServiceError::Storage(e) => AppError::internal(format!("{}: {}", context, e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<MessageBody>,
) -> Result<impl IntoResponse, AppError> {
    let msg = state
        .service
        .create(&body.message)
        .await
        .map_err(|e| failure("Error saving message", e))?;
    Ok((StatusCode::CREATED, Json(msg)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let msgs = state
        .service
        .list()
        .await
        .map_err(|e| failure("Error retrieving messages", e))?;
    Ok((StatusCode::OK, Json(msgs)))
}

pub async fn read(
    State(state): State<AppState>,
    MessageIdPath(id): MessageIdPath,
) -> Result<impl IntoResponse, AppError> {
    let msg = state
        .service
        .get(id)
        .await
        .map_err(|e| failure("Error retrieving message", e))?;
    Ok((StatusCode::OK, Json(msg)))
}

pub async fn update(
    State(state): State<AppState>,
    MessageIdPath(id): MessageIdPath,
    JsonBody(body): JsonBody<MessageBody>,
) -> Result<impl IntoResponse, AppError> {
    let msg = state
        .service
        .update(id, &body.message)
        .await
        .map_err(|e| failure("Error updating message", e))?;
    Ok((StatusCode::OK, Json(msg)))
}

pub async fn delete(
    State(state): State<AppState>,
    MessageIdPath(id): MessageIdPath,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(id).await.map_err(|e| delete_failure(id, e))?;
    Ok(StatusCode::OK)
}

/// Delete hides the storage cause from the client; it is only logged.
fn delete_failure(id: MessageId, err: ServiceError) -> AppError {
    match err {
        ServiceError::Storage(cause) => {
            AppError::internal_with_cause(format!("Failed to delete message with id {}", id), cause)
        }
        other => failure("Failed to delete message", other),
    }
}
