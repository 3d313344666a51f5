//! Initialize-once cell for the process-wide connection pool.

use super::StoreError;
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Runs its initializer at most once. Concurrent first callers wait on the single
/// attempt; its outcome, success or failure, is replayed to every later caller.
pub struct OnceInit<T, E> {
    slot: Mutex<Option<Result<T, Arc<E>>>>,
}

pub type PoolCell = OnceInit<PgPool, StoreError>;

impl<T: Clone, E> OnceInit<T, E> {
    pub fn new() -> Self {
        OnceInit {
            slot: Mutex::new(None),
        }
    }

    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<T, Arc<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(outcome) = slot.as_ref() {
            return outcome.clone();
        }
        let outcome = init().await.map_err(Arc::new);
        *slot = Some(outcome.clone());
        outcome
    }
}

impl<T: Clone, E> Default for OnceInit<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
