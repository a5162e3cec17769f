//! Follow-up question suggestions.

use crate::intent::QueryIntent;

pub const MAX_SUGGESTIONS: usize = 4;

/// Generic follow-ups, used when nothing more specific crowds them out.
pub const DEFAULT_SUGGESTIONS: [&str; MAX_SUGGESTIONS] = [
    "Which ad had the highest CTR last month?",
    "Show me the total spend for Black Friday campaigns",
    "What was our average CPC in June?",
    "Which campaign had the most impressions?",
];

/// Returned together with the apology answer when the pipeline fails.
pub const APOLOGY_SUGGESTIONS: [&str; MAX_SUGGESTIONS] = [
    "Which ad performed best in June?",
    "Show me the highest CTR campaigns",
    "What was our total spend last month?",
    "Which campaign had the most impressions?",
];

/// Context-aware list: campaign questions first, then period questions,
/// then the generic ones, cut to [`MAX_SUGGESTIONS`].
pub fn fallback_suggestions(intent: &QueryIntent) -> Vec<String> {
    let mut out = Vec::with_capacity(MAX_SUGGESTIONS + 4);

    if let Some(campaign) = intent.campaign.as_deref() {
        out.push(format!("What was the average CTR for {campaign}?"));
        out.push(format!("How did the {campaign} campaign perform overall?"));
    }

    let period = intent.time_period;
    if !period.is_all_time() {
        out.push(format!("Show me the total spend for {}", period.label()));
        out.push(format!(
            "What was our best-performing ad {}?",
            period.describe()
        ));
    }

    out.extend(DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()));
    out.truncate(MAX_SUGGESTIONS);
    out
}

/// Splits model output into at most [`MAX_SUGGESTIONS`] questions.
///
/// Blank lines are dropped; leading list markers (`-`, `*`, `•`, `1.`, `2)`)
/// and wrapping quotes are stripped.
pub fn parse_suggestion_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_list_marker)
        .map(|l| l.trim_matches('"').trim())
        .filter(|l| !l.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
    {
        return rest.trim();
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim();
        }
    }
    line
}
