use async_trait::async_trait;
use chrono::NaiveDate;

use super::QueryInterpreter;
use crate::{
    intent::{QueryIntent, keywords::extract_by_keywords},
    model::AdRecord,
    respond::{fallback_suggestions, template_answer},
};

/// Keyword rules and sentence templates; no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedInterpreter;

#[async_trait]
impl QueryInterpreter for RuleBasedInterpreter {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    async fn extract_intent(&self, query: &str, today: NaiveDate) -> QueryIntent {
        extract_by_keywords(query, today)
    }

    async fn generate_answer(
        &self,
        _query: &str,
        intent: &QueryIntent,
        records: &[AdRecord],
    ) -> String {
        template_answer(records, intent)
    }

    async fn generate_suggestions(&self, _query: &str, intent: &QueryIntent) -> Vec<String> {
        fallback_suggestions(intent)
    }
}
