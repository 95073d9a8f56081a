// src/config.rs
use std::env;

use crate::error::ConfigError;
use crate::services::responder::Responder;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "chatbot_responder=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyMode {
    #[default]
    Random,
    First,
}

impl ReplyMode {
    pub fn responder(self) -> Responder {
        match self {
            ReplyMode::Random => Responder::random(),
            ReplyMode::First => Responder::deterministic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub reply_mode: ReplyMode,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CHATBOT_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("CHATBOT_PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let reply_mode = match lookup("CHATBOT_REPLY_MODE").as_deref().map(str::trim) {
            None | Some("") | Some("random") => ReplyMode::Random,
            Some("first") => ReplyMode::First,
            Some(other) => return Err(ConfigError::InvalidReplyMode(other.to_string())),
        };

        Ok(Self { host, port, reply_mode })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
