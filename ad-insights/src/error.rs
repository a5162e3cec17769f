//! Typed error for the ad-insights crate.
//!
//! None of these reach an HTTP caller during a query: the interpreter maps
//! them to fallbacks. They do surface at startup (dataset, configuration).

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    /// The bundled dataset could not be decoded.
    #[error("dataset error: {0}")]
    Dataset(#[source] serde_json::Error),

    /// Configuration or transport errors from the LLM service.
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    /// The model answered, but not with a usable intent object.
    #[error("unusable intent from model: {0}")]
    IntentParse(String),

    /// The model answered with nothing.
    #[error("model returned an empty {0}")]
    EmptyModelOutput(&'static str),

    /// The query pipeline task did not complete.
    #[error("query pipeline aborted: {0}")]
    Pipeline(String),
}
