//! Prompt builders for the three model calls.

use crate::{intent::QueryIntent, model::AdRecord, respond::data_summary};

pub const INTENT_SYSTEM: &str = "You are a helpful assistant that analyzes queries about Meta Ads performance data and extracts structured intent information.";

pub const ANSWER_SYSTEM: &str = "You are a helpful assistant that analyzes Meta Ads performance data and provides insights in natural language.";

pub const SUGGESTIONS_SYSTEM: &str = "You are a helpful assistant that suggests relevant follow-up questions about Meta Ads performance data.";

const CAMPAIGNS: &str = "Summer Sale, Black Friday, Holiday Season, Spring Collection, Tech Launch, Fitness & Wellness, Back to School";

const MONTHS: &str = "January, March, June, August, September, November, December";

/// Asks for a single JSON object describing the query.
pub fn build_intent_prompt(query: &str) -> String {
    format!(
        r#"Analyze the following query about Meta Ads data and extract the intent.

Query: {query}

Extract and return a JSON object with the following structure:
{{
  "time_period": "specific month name (e.g., 'june', 'december') or 'all_time' or 'last_month' or 'last_week'",
  "metric": "ctr" | "cpc" | "impressions" | "clicks" | "spend" | "performance",
  "comparison": "best" | "worst" | "average" | "total",
  "campaign": "campaign name if mentioned (e.g., 'black friday', 'summer sale') or null",
  "intent": "brief description of what the user wants to know"
}}

Available campaigns: {CAMPAIGNS}
Available months: {MONTHS}

Return only the JSON object, no additional text."#,
        query = query.trim(),
    )
}

/// Question, restated intent and the data summary.
pub fn build_answer_prompt(query: &str, intent: &QueryIntent, records: &[AdRecord]) -> String {
    format!(
        r#"Generate a natural language insight based on the following Meta Ads data and user query.

User Query: {query}
Query Intent: {intent}
Time Period: {period}
Filtered Data:
{summary}

Create a helpful, conversational response that:
1. Answers the user's question directly
2. Includes relevant metrics (CTR, impressions, spend, etc.)
3. Provides context about the time period and campaigns
4. Uses natural, business-friendly language
5. Is concise but informative

If no data is found, explain why and suggest alternative queries.

Response:"#,
        query = query.trim(),
        intent = intent.intent,
        period = intent.time_period.label(),
        summary = data_summary(records),
    )
}

pub fn build_suggestions_prompt(query: &str, intent: &QueryIntent) -> String {
    format!(
        r#"Based on the user's query: "{query}"
And their intent: "{intent}"

Generate 4 helpful follow-up questions that the user might want to ask next.
Make them specific and relevant to the current context.

Return only the questions, one per line, no numbering or additional text."#,
        query = query.trim(),
        intent = intent.intent,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{dataset::Dataset, intent::keywords::extract_by_keywords};

    #[test]
    fn intent_prompt_lists_vocabularies() {
        let p = build_intent_prompt("  best ad in june? ");
        assert!(p.contains("Query: best ad in june?"));
        assert!(p.contains("\"comparison\": \"best\" | \"worst\" | \"average\" | \"total\""));
        assert!(p.contains("Fitness & Wellness"));
        assert!(p.contains("Available months: January"));
    }

    #[test]
    fn answer_prompt_embeds_summary() {
        let ds = Dataset::bundled().unwrap();
        let i = extract_by_keywords("best in june", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let p = build_answer_prompt("best in june", &i, &ds.records()[..3]);
        assert!(p.contains("Query Intent: User wants to know about best performance in June"));
        assert!(p.contains("- Number of ads: 3"));
    }

    #[test]
    fn campaign_list_covers_keyword_fragments() {
        let listed = CAMPAIGNS.to_lowercase();
        for frag in crate::intent::keywords::CAMPAIGN_FRAGMENTS {
            assert!(listed.contains(frag), "{frag}");
        }
    }

    #[test]
    fn suggestions_prompt_quotes_query_and_intent() {
        let i = extract_by_keywords("total spend", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let p = build_suggestions_prompt("total spend", &i);
        assert!(p.starts_with("Based on the user's query: \"total spend\""));
        assert!(p.contains("User wants to know about total spend"));
    }
}
