//! HTTP handlers for message CRUD.

pub mod messages;
pub use messages::*;
