use std::sync::Arc;

use anyhow::Context;
use chatbot_responder::{
    config::{AppConfig, DEFAULT_LOG_FILTER},
    routes,
    state::AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let state = Arc::new(AppState::new(config.reply_mode.responder()));
    let app = routes::create_router().with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(reply_mode = ?config.reply_mode, "chatbot running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
