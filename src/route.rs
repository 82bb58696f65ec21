use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};

use crate::{
    handler::{handler_404, json_handler},
    middleware::{process_time_middleware, server_name_middleware},
    AppState,
};

/// Builds the fixed route table: `GET /json`, with every other path and every
/// other method on `/json` falling through to the 404 handler.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_failure(
            |error: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
                tracing::error!(
                    "Error request processing (latency: {:?}): {:?}",
                    latency,
                    error
                );
            },
        );

    let middleware_stack = ServiceBuilder::new()
        .layer(trace_layer)
        .layer(axum::middleware::from_fn(server_name_middleware))
        .layer(axum::middleware::from_fn(process_time_middleware));

    Router::new()
        .route("/json", get(json_handler).fallback(handler_404))
        .fallback(handler_404)
        .with_state(app_state)
        .layer(middleware_stack)
}
