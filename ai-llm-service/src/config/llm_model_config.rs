/// Configuration for one chat-completion invocation profile.
///
/// Connection settings (`endpoint`, `api_key`, `timeout_secs`) are normally
/// identical across profiles; sampling settings differ per purpose.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-3.5-turbo"`).
/// - `endpoint`: API root without the `/v1/...` suffix.
/// - `api_key`: Bearer credential.
/// - `max_tokens`: Maximum number of tokens to generate.
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `top_p`: Nucleus sampling cutoff.
/// - `timeout_secs`: Upper bound for a single request.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-3.5-turbo".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: "sk-...".to_string(),
///     max_tokens: Some(300),
///     temperature: Some(0.1),
///     top_p: None,
///     timeout_secs: 30,
/// };
/// assert_eq!(cfg.timeout_secs, 30);
/// ```
#[derive(Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// API root, e.g. `https://api.openai.com`.
    pub endpoint: String,

    /// Bearer token. Never logged.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LlmModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmModelConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// The three sampling profiles used by the query pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmProfilesConfig {
    /// Structured intent extraction (near-deterministic JSON).
    pub intent: LlmModelConfig,
    /// Natural-language answer over the data summary.
    pub answer: LlmModelConfig,
    /// Follow-up question suggestions.
    pub suggestions: LlmModelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = LlmModelConfig {
            model: "m".into(),
            endpoint: "http://localhost".into(),
            api_key: "sk-secret".into(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: 5,
        };
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
