//! In-memory backend for tests and local runs without a database.

use super::{MessageStore, StoreError, StoreResult};
use crate::model::{Message, MessageId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe store. Ids start at 1 and are never reused, like a `serial4` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    last_id: MessageId,
    rows: BTreeMap<MessageId, Message>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create(&self, text: &str, is_palindrome: bool) -> StoreResult<Message> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let msg = Message {
            id: state.last_id,
            text: text.to_string(),
            is_palindrome,
        };
        state.rows.insert(msg.id, msg.clone());
        Ok(msg)
    }

    async fn get(&self, id: MessageId) -> StoreResult<Message> {
        let state = self.state.read().map_err(poisoned)?;
        state.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<Message>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn update(&self, id: MessageId, text: &str, is_palindrome: bool) -> StoreResult<Message> {
        let mut state = self.state.write().map_err(poisoned)?;
        let row = state.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        row.text = text.to_string();
        row.is_palindrome = is_palindrome;
        Ok(row.clone())
    }

    async fn delete(&self, id: MessageId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.state.read().map(|_| ()).map_err(poisoned)
    }
}
