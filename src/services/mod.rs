pub mod intent;
pub mod metrics_manager;
pub mod picker;
pub mod responder;
pub mod templates;
