//! Request extractors whose rejections use the API's error bodies.

mod message;
pub use message::{JsonBody, MessageIdPath};
