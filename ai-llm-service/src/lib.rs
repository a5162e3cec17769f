//! Outbound text generation for the ad insights backend.
//!
//! One OpenAI-compatible chat client shared by three sampling profiles
//! (intent extraction, answer writing, follow-up suggestions). Everything is
//! configured once from the environment via [`config::default_config`] and
//! then passed around as plain values.

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;

pub use config::llm_model_config::{LlmModelConfig, LlmProfilesConfig};
pub use error_handler::{AiLlmError, Result};
pub use service_profiles::{LlmProfile, LlmServiceProfiles};
