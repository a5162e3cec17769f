//! Natural-language questions over ad performance records.
//!
//! Public entry point: [`QueryEngine::process`]. One call runs the whole
//! pipeline for a single question:
//!
//! 1. extract a [`QueryIntent`] (model-assisted or keyword rules),
//! 2. filter the bundled [`Dataset`] by time range and campaign,
//! 3. write an answer and follow-up suggestions (concurrently),
//! 4. build chart series from the filtered records.
//!
//! Which interpreter is used is decided once, from [`InsightsConfig`], when
//! the engine is built. Nothing in the pipeline returns an error to the
//! caller: model failures fall back to deterministic logic, and a crashed
//! pipeline turns into an apology answer.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod format;
pub mod intent;
pub mod interpreter;
pub mod model;
pub mod respond;
pub mod stats;

pub use config::{Clock, InsightsConfig};
pub use dataset::Dataset;
pub use engine::{APOLOGY_ANSWER, QueryEngine};
pub use error::InsightsError;
pub use intent::{Comparison, Metric, QueryIntent, TimePeriod, TimeRange};
pub use interpreter::{LlmInterpreter, QueryInterpreter, RuleBasedInterpreter, TextGenerator};
pub use model::{AdRecord, ChartData, ChartDataset, QueryResult};
