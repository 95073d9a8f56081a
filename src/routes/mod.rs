// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use crate::{error::AppError, state::SharedState};
use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let routes = Router::new()
        .route("/", get(|| async { "chatbot-responder is up. POST /chat to talk." }))
        .route("/chat", post(chat_handler))
        .route("/metrics", get(get_metrics_handler))
        .route("/health", get(|| async { "OK" }));

    with_layers(routes)
}

/// Wraps `routes` in panic recovery, HTTP tracing and CORS, innermost first.
pub fn with_layers(routes: Router<SharedState>) -> Router<SharedState> {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Turns a handler panic into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
