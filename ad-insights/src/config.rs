//! Process-wide configuration, captured once at startup.

use ai_llm_service::{LlmProfilesConfig, config::default_config::config_openai_profiles};
use chrono::NaiveDate;

use crate::error::InsightsError;

/// Everything the engine needs to know about its environment.
///
/// `llm` is the single switch between model-assisted and deterministic
/// operation; `None` is a normal mode, not an error.
#[derive(Debug, Clone, Default)]
pub struct InsightsConfig {
    pub llm: Option<LlmProfilesConfig>,
}

impl InsightsConfig {
    /// Reads the LLM profiles from the environment.
    ///
    /// # Errors
    /// Returns [`InsightsError::Llm`] when a variable is present but invalid.
    pub fn from_env() -> Result<Self, InsightsError> {
        Ok(Self {
            llm: config_openai_profiles()?,
        })
    }

    /// Configuration with the external service disabled.
    pub fn deterministic() -> Self {
        Self { llm: None }
    }

    pub fn llm_enabled(&self) -> bool {
        self.llm.is_some()
    }
}

/// Source of "today" for relative periods (`last_month`, `last_week`).
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Local calendar date of the host.
    #[default]
    System,
    /// A pinned date.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => chrono::Local::now().date_naive(),
            Clock::Fixed(d) => *d,
        }
    }
}
