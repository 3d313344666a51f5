//! MessageService: validates and derives before every write, then delegates to the store.

use super::validation::{is_palindrome, validate_text, ValidationError};
use crate::model::{Message, MessageId};
use crate::store::{MessageStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no record found for id {0}")]
    NotFound(MessageId),
    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Storage(other),
        }
    }
}

#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        MessageService { store }
    }

    pub async fn create(&self, text: &str) -> Result<Message, ServiceError> {
        validate_text(text)?;
        let msg = self.store.create(text, is_palindrome(text)).await?;
        tracing::info!(id = msg.id, ispalindrome = msg.is_palindrome, "message created");
        Ok(msg)
    }

    pub async fn get(&self, id: MessageId) -> Result<Message, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Full replacement of the text; the palindrome flag is recomputed and the id kept.
    pub async fn update(&self, id: MessageId, text: &str) -> Result<Message, ServiceError> {
        validate_text(text)?;
        let msg = self.store.update(id, text, is_palindrome(text)).await?;
        tracing::info!(id, ispalindrome = msg.is_palindrome, "message updated");
        Ok(msg)
    }

    pub async fn delete(&self, id: MessageId) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        tracing::info!(id, "message deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
