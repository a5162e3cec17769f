//! Default LLM profiles loaded from environment variables.
//!
//! The external service is optional: when `OPENAI_API_KEY` is unset or blank
//! the loader returns `Ok(None)` and the application runs its deterministic
//! paths only. Everything else is validated eagerly so a typo in the
//! environment surfaces at startup, not on the first request.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer credential (optional, enables the service)
//! - `OPENAI_BASE_URL`  = API root (default `https://api.openai.com`)
//! - `OPENAI_MODEL`     = chat model (default `gpt-3.5-turbo`)
//! - `LLM_TIMEOUT_SECS` = per-request timeout (default `30`)

use crate::{
    config::llm_model_config::{LlmModelConfig, LlmProfilesConfig},
    error_handler::{ConfigError, Result, validate_http_endpoint},
};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the three profiles from the process environment.
///
/// # Errors
/// See [`profiles_from_lookup`].
pub fn config_openai_profiles() -> Result<Option<LlmProfilesConfig>> {
    profiles_from_lookup(|name| std::env::var(name).ok())
}

/// Builds the three profiles from an arbitrary variable lookup.
///
/// Blank values are treated as unset.
///
/// # Errors
/// - [`ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` has no http(s) scheme
/// - [`ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is not a positive u64
pub fn profiles_from_lookup<F>(lookup: F) -> Result<Option<LlmProfilesConfig>>
where
    F: Fn(&'static str) -> Option<String>,
{
    let get = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

    let Some(api_key) = get("OPENAI_API_KEY") else {
        return Ok(None);
    };

    let endpoint = get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", endpoint.trim())?;

    let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let timeout_secs = match get("LLM_TIMEOUT_SECS") {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(v) if v > 0 => v,
            _ => {
                return Err(ConfigError::InvalidNumber {
                    var: "LLM_TIMEOUT_SECS",
                    reason: "expected a positive u64",
                }
                .into());
            }
        },
        None => DEFAULT_TIMEOUT_SECS,
    };

    let base = LlmModelConfig {
        model: model.trim().to_string(),
        endpoint: endpoint.trim().to_string(),
        api_key: api_key.trim().to_string(),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs,
    };

    Ok(Some(LlmProfilesConfig {
        intent: LlmModelConfig {
            max_tokens: Some(300),
            temperature: Some(0.1),
            ..base.clone()
        },
        answer: LlmModelConfig {
            max_tokens: Some(500),
            temperature: Some(0.3),
            ..base.clone()
        },
        suggestions: LlmModelConfig {
            max_tokens: Some(200),
            temperature: Some(0.7),
            ..base
        },
    }))
}
