//! The three language-facing steps of a query, behind one interface.
//!
//! [`RuleBasedInterpreter`] is deterministic and always available.
//! [`LlmInterpreter`] asks a [`TextGenerator`] first and falls back to the
//! rule-based implementation on any error. The engine picks one at startup.

mod llm;
pub mod prompt;
mod rule_based;

use ai_llm_service::{AiLlmError, LlmProfile, LlmServiceProfiles};
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{intent::QueryIntent, model::AdRecord};

pub use llm::LlmInterpreter;
pub use rule_based::RuleBasedInterpreter;

/// Intent extraction, answer writing and suggestion writing.
///
/// Implementations never fail: every method returns a usable value.
#[async_trait]
pub trait QueryInterpreter: Send + Sync {
    /// Short name for logs and health output.
    fn name(&self) -> &'static str;

    async fn extract_intent(&self, query: &str, today: NaiveDate) -> QueryIntent;

    async fn generate_answer(
        &self,
        query: &str,
        intent: &QueryIntent,
        records: &[AdRecord],
    ) -> String;

    async fn generate_suggestions(&self, query: &str, intent: &QueryIntent) -> Vec<String>;
}

/// Outbound text generation used by [`LlmInterpreter`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: LlmProfile,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiLlmError>;
}

#[async_trait]
impl TextGenerator for LlmServiceProfiles {
    async fn generate(
        &self,
        profile: LlmProfile,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiLlmError> {
        LlmServiceProfiles::generate(self, profile, prompt, system).await
    }
}
