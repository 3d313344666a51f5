//! Router assembly and the middleware shared by every route.

mod common;
mod messages;

pub use common::common_routes;
pub use messages::message_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, response::IntoResponse, response::Response, Router};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Versioned prefix for the message API.
pub const API_PREFIX: &str = "/v1";

/// Upper bound on request bodies. A 100-character message is far below it.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Full application router: common routes at the root, message routes under `/v1`.
pub fn app(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .merge(common_routes(state.clone()))
            .nest(API_PREFIX, message_routes(state)),
    )
}

/// Access log per request, panics turned into JSON 500s, and the body size limit.
pub fn with_middleware(router: Router) -> Router {
    router.layer(DefaultBodyLimit::max(MAX_BODY_BYTES)).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::internal_with_cause("Internal server error", detail).into_response()
}
