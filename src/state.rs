//! Shared application state for all routes.

use crate::service::MessageService;
use crate::store::MessageStore;
use std::sync::Arc;

/// Handed to every handler through axum `State`; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub service: MessageService,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        AppState {
            service: MessageService::new(store),
        }
    }
}
