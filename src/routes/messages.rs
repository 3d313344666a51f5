//! Message CRUD routes. Updates are POSTs to the item path.

use crate::handlers::messages::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn message_routes(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(list).post(create))
        .route("/messages/:id", get(read).post(update).delete(delete_handler))
        .with_state(state)
}
