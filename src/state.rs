// src/state.rs
use std::sync::Arc;

use crate::services::metrics_manager::MetricsManager;
use crate::services::responder::Responder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: Responder,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            metrics: MetricsManager::new(),
        }
    }
}
