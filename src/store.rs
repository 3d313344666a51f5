//! Message persistence: the storage contract, its PostgreSQL and in-memory backends,
//! and one-time pool initialization.

mod memory;
mod pool;
mod postgres;

pub use memory::InMemoryMessageStore;
pub use pool::{OnceInit, PoolCell};
pub use postgres::{connect, ensure_messages_table, PgMessageStore, MESSAGES_TABLE};

use crate::model::{Message, MessageId};
use async_trait::async_trait;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matched the identifier.
    #[error("no record found for id {0}")]
    NotFound(MessageId),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Backend failure that did not come from the database driver.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// CRUD over the messages table. Callers supply the already-derived palindrome flag.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a row and return it with its assigned id.
    async fn create(&self, text: &str, is_palindrome: bool) -> StoreResult<Message>;

    async fn get(&self, id: MessageId) -> StoreResult<Message>;

    /// All rows, ordered by id.
    async fn list(&self) -> StoreResult<Vec<Message>>;

    /// Replace text and flag. [`StoreError::NotFound`] when no row was affected.
    async fn update(&self, id: MessageId, text: &str, is_palindrome: bool) -> StoreResult<Message>;

    /// [`StoreError::NotFound`] when no row was affected.
    async fn delete(&self, id: MessageId) -> StoreResult<()>;

    /// Cheap liveness check used by `/ready`.
    async fn ping(&self) -> StoreResult<()>;
}
