use std::sync::Arc;

use ai_llm_service::LlmProfile;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{
    QueryInterpreter, RuleBasedInterpreter, TextGenerator,
    prompt::{
        ANSWER_SYSTEM, INTENT_SYSTEM, SUGGESTIONS_SYSTEM, build_answer_prompt,
        build_intent_prompt, build_suggestions_prompt,
    },
};
use crate::{
    error::InsightsError,
    intent::{Comparison, Metric, QueryIntent, TimePeriod},
    model::AdRecord,
    respond::parse_suggestion_lines,
};

/// Model-assisted interpreter. Every step falls back to
/// [`RuleBasedInterpreter`] when the model call or its output is unusable.
pub struct LlmInterpreter {
    generator: Arc<dyn TextGenerator>,
    fallback: RuleBasedInterpreter,
}

impl LlmInterpreter {
    pub const NAME: &'static str = "llm";

    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            fallback: RuleBasedInterpreter,
        }
    }

    async fn try_extract_intent(
        &self,
        query: &str,
        today: NaiveDate,
    ) -> Result<QueryIntent, InsightsError> {
        let raw = self
            .generator
            .generate(
                LlmProfile::Intent,
                &build_intent_prompt(query),
                Some(INTENT_SYSTEM),
            )
            .await?;
        debug!(raw_len = raw.len(), "intent response received");
        parse_model_intent(&raw, today)
    }

    async fn try_generate_answer(
        &self,
        query: &str,
        intent: &QueryIntent,
        records: &[AdRecord],
    ) -> Result<String, InsightsError> {
        let raw = self
            .generator
            .generate(
                LlmProfile::Answer,
                &build_answer_prompt(query, intent, records),
                Some(ANSWER_SYSTEM),
            )
            .await?;
        let answer = raw.trim();
        if answer.is_empty() {
            return Err(InsightsError::EmptyModelOutput("answer"));
        }
        Ok(answer.to_string())
    }

    async fn try_generate_suggestions(
        &self,
        query: &str,
        intent: &QueryIntent,
    ) -> Result<Vec<String>, InsightsError> {
        let raw = self
            .generator
            .generate(
                LlmProfile::Suggestions,
                &build_suggestions_prompt(query, intent),
                Some(SUGGESTIONS_SYSTEM),
            )
            .await?;
        let lines = parse_suggestion_lines(&raw);
        if lines.is_empty() {
            return Err(InsightsError::EmptyModelOutput("suggestions"));
        }
        Ok(lines)
    }
}

#[async_trait]
impl QueryInterpreter for LlmInterpreter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn extract_intent(&self, query: &str, today: NaiveDate) -> QueryIntent {
        match self.try_extract_intent(query, today).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "intent extraction failed, using keyword rules");
                self.fallback.extract_intent(query, today).await
            }
        }
    }

    async fn generate_answer(
        &self,
        query: &str,
        intent: &QueryIntent,
        records: &[AdRecord],
    ) -> String {
        match self.try_generate_answer(query, intent, records).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "answer generation failed, using template");
                self.fallback.generate_answer(query, intent, records).await
            }
        }
    }

    async fn generate_suggestions(&self, query: &str, intent: &QueryIntent) -> Vec<String> {
        match self.try_generate_suggestions(query, intent).await {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "suggestion generation failed, using defaults");
                self.fallback.generate_suggestions(query, intent).await
            }
        }
    }
}

/// Wire shape the intent prompt asks for. Both snake and camel keys are
/// accepted for the period since models drift between them.
#[derive(Debug, Deserialize)]
struct ModelIntent {
    #[serde(default, alias = "timePeriod")]
    time_period: Option<String>,
    metric: String,
    comparison: String,
    #[serde(default)]
    campaign: Option<String>,
    #[serde(default)]
    intent: Option<String>,
}

fn parse_model_intent(raw: &str, today: NaiveDate) -> Result<QueryIntent, InsightsError> {
    let json = sanitize_json_block(raw);
    let parsed: ModelIntent =
        serde_json::from_str(&json).map_err(|e| InsightsError::IntentParse(e.to_string()))?;

    let metric = Metric::parse(&parsed.metric)
        .ok_or_else(|| InsightsError::IntentParse(format!("unknown metric {:?}", parsed.metric)))?;
    let comparison = Comparison::parse(&parsed.comparison).ok_or_else(|| {
        InsightsError::IntentParse(format!("unknown comparison {:?}", parsed.comparison))
    })?;
    let time_period = parsed
        .time_period
        .as_deref()
        .map(TimePeriod::parse_lenient)
        .unwrap_or_default();
    let campaign = parsed
        .campaign
        .filter(|c| !c.trim().eq_ignore_ascii_case("null"));

    Ok(QueryIntent::resolve(
        time_period,
        metric,
        comparison,
        campaign,
        parsed.intent,
        today,
    ))
}

/// Strips code fences and a BOM, then keeps the outermost `{...}` span.
fn sanitize_json_block(s: &str) -> String {
    let no_fence = s
        .replace("```json", "")
        .replace("```", "")
        .replace('\u{feff}', "")
        .trim()
        .to_string();

    match (no_fence.find('{'), no_fence.rfind('}')) {
        (Some(start), Some(end)) if start < end => no_fence[start..=end].to_string(),
        _ => no_fence,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ai_llm_service::AiLlmError;
    use chrono::Month;

    use super::*;
    use crate::{
        dataset::Dataset,
        respond::{NO_DATA_MESSAGE, fallback_suggestions},
    };

    /// Canned output per profile; `None` answers with a timeout error.
    struct Scripted {
        intent: Option<&'static str>,
        answer: Option<&'static str>,
        suggestions: Option<&'static str>,
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(
            &self,
            profile: LlmProfile,
            _prompt: &str,
            _system: Option<&str>,
        ) -> Result<String, AiLlmError> {
            let out = match profile {
                LlmProfile::Intent => self.intent,
                LlmProfile::Answer => self.answer,
                LlmProfile::Suggestions => self.suggestions,
            };
            out.map(str::to_string)
                .ok_or(AiLlmError::Timeout(Duration::from_secs(1)))
        }
    }

    fn interp(s: Scripted) -> LlmInterpreter {
        LlmInterpreter::new(Arc::new(s))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn sanitize_strips_fences_and_prose() {
        let raw = "Sure!\n```json\n{\"metric\": \"ctr\"}\n```\nHope that helps.";
        assert_eq!(sanitize_json_block(raw), "{\"metric\": \"ctr\"}");
        assert_eq!(sanitize_json_block("} nothing {"), "} nothing {");
    }

    #[test]
    fn model_intent_maps_to_typed_intent() {
        let raw = r#"{"time_period":"June","metric":"CTR","comparison":"best","campaign":"summer sale","intent":"Top CTR ad in June"}"#;
        let i = parse_model_intent(raw, today()).unwrap();
        assert_eq!(i.time_period, TimePeriod::Month(Month::June));
        assert_eq!(i.metric, Metric::Ctr);
        assert_eq!(i.comparison, Comparison::Best);
        assert_eq!(i.campaign.as_deref(), Some("summer sale"));
        assert_eq!(i.intent, "Top CTR ad in June");
        assert!(i.time_range.is_some());
    }

    #[test]
    fn null_campaign_and_unknown_period_are_lenient() {
        let raw = r#"{"timePeriod":"Q3","metric":"spend","comparison":"total","campaign":"null"}"#;
        let i = parse_model_intent(raw, today()).unwrap();
        assert_eq!(i.time_period, TimePeriod::AllTime);
        assert!(i.time_range.is_none());
        assert!(i.campaign.is_none());
        assert_eq!(i.intent, "User wants to know about total spend");
    }

    #[test]
    fn unknown_metric_is_a_parse_error() {
        let raw = r#"{"time_period":"june","metric":"roas","comparison":"best"}"#;
        assert!(matches!(
            parse_model_intent(raw, today()),
            Err(InsightsError::IntentParse(_))
        ));
    }

    #[tokio::test]
    async fn garbage_intent_falls_back_to_keywords() {
        let llm = interp(Scripted {
            intent: Some("I think they want June."),
            answer: None,
            suggestions: None,
        });
        let q = "Which ad performed best in June?";
        let got = llm.extract_intent(q, today()).await;
        let want = RuleBasedInterpreter.extract_intent(q, today()).await;
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn failed_answer_uses_template() {
        let llm = interp(Scripted {
            intent: None,
            answer: None,
            suggestions: None,
        });
        let i = llm.extract_intent("total spend last month", today()).await;
        assert_eq!(llm.generate_answer("q", &i, &[]).await, NO_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn blank_answer_uses_template() {
        let ds = Dataset::bundled().unwrap();
        let llm = interp(Scripted {
            intent: None,
            answer: Some("   \n"),
            suggestions: None,
        });
        let i = llm.extract_intent("best in june", today()).await;
        let answer = llm.generate_answer("best in june", &i, &ds.records()[..3]).await;
        assert!(answer.starts_with("Your best-performing ad in June"));
    }

    #[tokio::test]
    async fn model_answer_is_trimmed() {
        let llm = interp(Scripted {
            intent: None,
            answer: Some("  Swimwear Promo led June.\n"),
            suggestions: None,
        });
        let i = llm.extract_intent("june", today()).await;
        assert_eq!(
            llm.generate_answer("june", &i, &[]).await,
            "Swimwear Promo led June."
        );
    }

    #[tokio::test]
    async fn suggestions_are_parsed_or_fall_back() {
        let good = interp(Scripted {
            intent: None,
            answer: None,
            suggestions: Some("1. One?\n2. Two?\n3. Three?\n4. Four?\n5. Five?"),
        });
        let i = good.extract_intent("june", today()).await;
        assert_eq!(
            good.generate_suggestions("june", &i).await,
            vec!["One?", "Two?", "Three?", "Four?"]
        );

        let empty = interp(Scripted {
            intent: None,
            answer: None,
            suggestions: Some("\n\n"),
        });
        assert_eq!(
            empty.generate_suggestions("june", &i).await,
            fallback_suggestions(&i)
        );
    }
}
