use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::metrics_manager::MetricsData,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("rejected chat payload: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    let response = state
        .responder
        .classify_and_respond(&payload.message, payload.session_id.as_deref());

    info!(
        session_id = %response.session_id,
        intent = %response.intent,
        "chat message answered"
    );
    state.metrics.record(response.intent).await;

    Ok(Json(response))
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
