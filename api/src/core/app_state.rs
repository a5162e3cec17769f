use std::net::SocketAddr;

use ad_insights::QueryEngine;
use thiserror::Error;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API_ADDRESS {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },
}

/// HTTP-level settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub address: SocketAddr,
}

impl ApiConfig {
    /// Reads `API_ADDRESS`, defaulting to [`DEFAULT_API_ADDRESS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let raw = lookup("API_ADDRESS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

        let address = raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddress {
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { address })
    }
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query pipeline over the bundled dataset.
    pub engine: QueryEngine,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(engine: QueryEngine, config: ApiConfig) -> Self {
        Self { engine, config }
    }
}
