//! Keyword rules for intent extraction without a model.
//!
//! Each dimension is an ordered table of `(needle, value)` pairs; the query is
//! lower-cased and the first needle it contains wins. Table order is the
//! priority order.

use chrono::{Month, NaiveDate};

use super::{Comparison, Metric, QueryIntent, TimePeriod};

pub const TIME_PERIOD_RULES: &[(&str, TimePeriod)] = &[
    ("june", TimePeriod::Month(Month::June)),
    ("december", TimePeriod::Month(Month::December)),
    ("november", TimePeriod::Month(Month::November)),
    ("september", TimePeriod::Month(Month::September)),
    ("march", TimePeriod::Month(Month::March)),
    ("january", TimePeriod::Month(Month::January)),
    ("august", TimePeriod::Month(Month::August)),
    ("last month", TimePeriod::LastMonth),
    ("last week", TimePeriod::LastWeek),
];

pub const METRIC_RULES: &[(&str, Metric)] = &[
    ("ctr", Metric::Ctr),
    ("cpc", Metric::Cpc),
    ("impressions", Metric::Impressions),
    ("clicks", Metric::Clicks),
    ("spend", Metric::Spend),
];

pub const COMPARISON_RULES: &[(&str, Comparison)] = &[
    ("worst", Comparison::Worst),
    ("lowest", Comparison::Worst),
    ("average", Comparison::Average),
    ("total", Comparison::Total),
];

/// Lower-cased campaign fragments; the matched fragment becomes the filter.
pub const CAMPAIGN_FRAGMENTS: &[&str] = &[
    "summer sale",
    "black friday",
    "holiday season",
    "spring collection",
    "tech launch",
    "fitness",
    "back to school",
];

/// First value whose needle occurs in `haystack`.
pub fn first_match<T: Copy>(haystack: &str, rules: &[(&str, T)]) -> Option<T> {
    rules
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, v)| *v)
}

pub fn match_time_period(lower: &str) -> TimePeriod {
    first_match(lower, TIME_PERIOD_RULES).unwrap_or_default()
}

pub fn match_metric(lower: &str) -> Metric {
    first_match(lower, METRIC_RULES).unwrap_or_default()
}

pub fn match_comparison(lower: &str) -> Comparison {
    first_match(lower, COMPARISON_RULES).unwrap_or_default()
}

pub fn match_campaign(lower: &str) -> Option<&'static str> {
    CAMPAIGN_FRAGMENTS
        .iter()
        .copied()
        .find(|frag| lower.contains(frag))
}

/// Full keyword extraction for `query`.
pub fn extract_by_keywords(query: &str, today: NaiveDate) -> QueryIntent {
    let lower = query.to_lowercase();

    QueryIntent::resolve(
        match_time_period(&lower),
        match_metric(&lower),
        match_comparison(&lower),
        match_campaign(&lower).map(str::to_string),
        None,
        today,
    )
}
