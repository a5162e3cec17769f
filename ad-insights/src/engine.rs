//! One question in, one [`QueryResult`] out.

use std::{sync::Arc, time::Instant};

use ai_llm_service::LlmServiceProfiles;
use tracing::{debug, error, info};

use crate::{
    config::{Clock, InsightsConfig},
    dataset::Dataset,
    error::InsightsError,
    interpreter::{LlmInterpreter, QueryInterpreter, RuleBasedInterpreter},
    model::QueryResult,
    respond::{APOLOGY_SUGGESTIONS, build_chart_data},
    stats::filter_by_intent,
};

pub const APOLOGY_ANSWER: &str =
    "I'm sorry, I couldn't process your query. Please try rephrasing your question.";

/// Shared, read-only query pipeline. Cheap to clone.
#[derive(Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
    interpreter: Arc<dyn QueryInterpreter>,
    clock: Clock,
    llm_enabled: bool,
}

impl QueryEngine {
    /// `llm_enabled` is reported as-is by [`QueryEngine::llm_enabled`].
    pub fn new(
        dataset: Dataset,
        interpreter: Arc<dyn QueryInterpreter>,
        clock: Clock,
        llm_enabled: bool,
    ) -> Self {
        Self {
            dataset: Arc::new(dataset),
            interpreter,
            clock,
            llm_enabled,
        }
    }

    /// Picks the interpreter from `config`: model-assisted when profiles are
    /// present, keyword rules otherwise.
    ///
    /// # Errors
    /// Returns [`InsightsError::Llm`] if the HTTP client cannot be built.
    pub fn from_config(
        config: &InsightsConfig,
        dataset: Dataset,
        clock: Clock,
    ) -> Result<Self, InsightsError> {
        let interpreter: Arc<dyn QueryInterpreter> = match &config.llm {
            Some(profiles) => {
                let service = LlmServiceProfiles::new(profiles.clone())?;
                info!(
                    model = %profiles.intent.model,
                    endpoint = %profiles.intent.endpoint,
                    "model-assisted interpretation enabled"
                );
                Arc::new(LlmInterpreter::new(Arc::new(service)))
            }
            None => {
                info!("no LLM credential configured, using keyword rules");
                Arc::new(RuleBasedInterpreter)
            }
        };
        Ok(Self::new(dataset, interpreter, clock, config.llm_enabled()))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Whether answers may come from the external model.
    pub fn llm_enabled(&self) -> bool {
        self.llm_enabled
    }

    pub fn interpreter_name(&self) -> &'static str {
        self.interpreter.name()
    }

    /// Runs the full pipeline. Never fails: a crashed pipeline yields the
    /// apology answer.
    pub async fn process(&self, query: &str) -> QueryResult {
        let engine = self.clone();
        let query = query.to_string();

        match tokio::spawn(async move { engine.run(&query).await }).await {
            Ok(result) => result,
            Err(e) => {
                let err = InsightsError::Pipeline(e.to_string());
                error!(error = %err, "returning apology answer");
                apology()
            }
        }
    }

    async fn run(&self, query: &str) -> QueryResult {
        let started = Instant::now();
        let today = self.clock.today();

        let intent = self.interpreter.extract_intent(query, today).await;
        info!(
            time_period = %intent.time_period,
            metric = %intent.metric,
            comparison = %intent.comparison,
            campaign = intent.campaign.as_deref().unwrap_or("-"),
            "intent resolved"
        );

        let records = filter_by_intent(self.dataset.records(), &intent);

        let (answer, suggestions) = tokio::join!(
            self.interpreter.generate_answer(query, &intent, &records),
            self.interpreter.generate_suggestions(query, &intent),
        );
        let chart_data = build_chart_data(&records);

        debug!(
            answer_len = answer.len(),
            suggestions = suggestions.len(),
            chart_labels = chart_data.as_ref().map_or(0, |c| c.labels.len()),
            "response assembled"
        );
        info!(
            interpreter = self.interpreter.name(),
            matched = records.len(),
            latency_ms = started.elapsed().as_millis() as u64,
            "query processed"
        );

        QueryResult {
            answer,
            data: Some(records),
            chart_data,
            suggestions: Some(suggestions),
        }
    }
}

/// Generic answer used when the pipeline cannot finish.
pub fn apology() -> QueryResult {
    QueryResult {
        answer: APOLOGY_ANSWER.to_string(),
        data: None,
        chart_data: None,
        suggestions: Some(APOLOGY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()),
    }
}
