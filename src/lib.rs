//! Message API: CRUD over palindrome-tagged messages, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, DbConnection, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Message, MessageBody, MessageId};
pub use response::error_body;
pub use routes::{app, common_routes, message_routes, API_PREFIX};
pub use service::{is_palindrome, validate_text, MessageService, ServiceError, ValidationError};
pub use state::AppState;
pub use store::{connect, InMemoryMessageStore, MessageStore, PgMessageStore, PoolCell, StoreError};
