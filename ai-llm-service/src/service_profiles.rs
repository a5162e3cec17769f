//! Shared LLM service with three purpose-specific profiles: `intent`,
//! `answer`, and `suggestions`.
//!
//! - Construct once at startup, wrap in `Arc`, and pass clones to dependents.
//! - All profiles share one underlying HTTP client (same endpoint and key);
//!   only sampling parameters differ.
//! - Every call is bounded by the profile timeout, independent of the
//!   transport-level timeout.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{LlmProfile, LlmServiceProfiles};
//! use ai_llm_service::config::default_config::config_openai_profiles;
//!
//! # async fn run() -> Result<(), ai_llm_service::AiLlmError> {
//! if let Some(cfg) = config_openai_profiles()? {
//!     let svc = Arc::new(LlmServiceProfiles::new(cfg)?);
//!     let txt = svc.generate(LlmProfile::Answer, "Hello", None).await?;
//!     println!("{txt}");
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tracing::warn;

use crate::{
    config::llm_model_config::LlmProfilesConfig, error_handler::AiLlmError,
    services::open_ai_service::OpenAiService,
};

/// Which sampling profile a call should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProfile {
    Intent,
    Answer,
    Suggestions,
}

impl LlmProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            LlmProfile::Intent => "intent",
            LlmProfile::Answer => "answer",
            LlmProfile::Suggestions => "suggestions",
        }
    }
}

/// Shared service holding one client per profile.
#[derive(Debug)]
pub struct LlmServiceProfiles {
    intent: OpenAiService,
    answer: OpenAiService,
    suggestions: OpenAiService,
}

impl LlmServiceProfiles {
    /// Creates the service from validated profile configs.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if the shared HTTP client cannot be built or an
    /// endpoint is invalid.
    pub fn new(cfg: LlmProfilesConfig) -> Result<Self, AiLlmError> {
        let client = OpenAiService::build_http_client(&cfg.intent)?;

        Ok(Self {
            intent: OpenAiService::with_client(client.clone(), cfg.intent)?,
            answer: OpenAiService::with_client(client.clone(), cfg.answer)?,
            suggestions: OpenAiService::with_client(client, cfg.suggestions)?,
        })
    }

    /// Generates text using the given profile.
    ///
    /// # Arguments
    /// - `profile`: which sampling settings to apply.
    /// - `prompt`: user message.
    /// - `system`: optional system instruction.
    ///
    /// # Errors
    /// Returns [`AiLlmError::Timeout`] when the profile timeout elapses, or
    /// whatever the underlying client reports.
    pub async fn generate(
        &self,
        profile: LlmProfile,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiLlmError> {
        let svc = self.service(profile);
        let limit = Duration::from_secs(svc.config().timeout_secs);

        match tokio::time::timeout(limit, svc.generate(prompt, system)).await {
            Ok(res) => res,
            Err(_) => {
                warn!(
                    profile = profile.as_str(),
                    timeout_secs = limit.as_secs(),
                    "chat completion timed out"
                );
                Err(AiLlmError::Timeout(limit))
            }
        }
    }

    /// Model name configured for `profile`.
    pub fn model(&self, profile: LlmProfile) -> &str {
        &self.service(profile).config().model
    }

    fn service(&self, profile: LlmProfile) -> &OpenAiService {
        match profile {
            LlmProfile::Intent => &self.intent,
            LlmProfile::Answer => &self.answer,
            LlmProfile::Suggestions => &self.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config::profiles_from_lookup;

    #[test]
    fn profiles_keep_their_own_sampling() {
        let cfg = profiles_from_lookup(|k| match k {
            "OPENAI_API_KEY" => Some("sk-test".into()),
            "OPENAI_MODEL" => Some("gpt-4o-mini".into()),
            _ => None,
        })
        .unwrap()
        .unwrap();

        let svc = LlmServiceProfiles::new(cfg).unwrap();
        assert_eq!(svc.model(LlmProfile::Intent), "gpt-4o-mini");
        assert_eq!(
            svc.service(LlmProfile::Intent).config().temperature,
            Some(0.1)
        );
        assert_eq!(
            svc.service(LlmProfile::Suggestions).config().temperature,
            Some(0.7)
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error_not_a_hang() {
        let cfg = profiles_from_lookup(|k| match k {
            "OPENAI_API_KEY" => Some("sk-test".into()),
            // Port 9 (discard) on loopback: connection refused on any sane host.
            "OPENAI_BASE_URL" => Some("http://127.0.0.1:9".into()),
            "LLM_TIMEOUT_SECS" => Some("2".into()),
            _ => None,
        })
        .unwrap()
        .unwrap();

        let svc = LlmServiceProfiles::new(cfg).unwrap();
        let res = svc.generate(LlmProfile::Answer, "ping", None).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn silent_server_is_cut_off_by_timeout() {
        // Accepts connections and never writes a byte back.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((sock, _)) = listener.accept().await {
                held.push(sock);
            }
        });

        let endpoint = format!("http://{addr}");
        let cfg = profiles_from_lookup(|k| match k {
            "OPENAI_API_KEY" => Some("sk-test".into()),
            "OPENAI_BASE_URL" => Some(endpoint.clone()),
            "LLM_TIMEOUT_SECS" => Some("1".into()),
            _ => None,
        })
        .unwrap()
        .unwrap();
        let svc = LlmServiceProfiles::new(cfg).unwrap();

        let started = std::time::Instant::now();
        let err = svc
            .generate(LlmProfile::Intent, "ping", None)
            .await
            .unwrap_err();
        let elapsed = started.elapsed();

        let timed_out = match &err {
            AiLlmError::Timeout(limit) => *limit == Duration::from_secs(1),
            AiLlmError::HttpTransport(e) => e.is_timeout(),
            _ => false,
        };
        assert!(timed_out, "unexpected error: {err}");
        assert!(elapsed >= Duration::from_millis(900), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(3), "{elapsed:?}");

        server.abort();
    }
}
