// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorResponse;

/// Message returned to clients for anything we don't want to explain.
pub const GENERIC_FAILURE: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(detail) => {
                error!("internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CHATBOT_PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid CHATBOT_REPLY_MODE '{0}', expected 'random' or 'first'")]
    InvalidReplyMode(String),
}
