//! Structured interpretation of a question.
//!
//! Both interpreters produce the same [`QueryIntent`]; the time range is
//! always derived here from the period, never taken from a model.

pub mod keywords;
pub mod time_range;

use std::fmt;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

pub use time_range::{TimeRange, resolve_time_range};

/// Month names in calendar order, used for parsing and display.
const MONTH_NAMES: [(&str, Month); 12] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
];

/// Requested time window. Wire form: `"june"`, `"last_month"`,
/// `"last_week"`, `"all_time"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TimePeriod {
    Month(Month),
    LastMonth,
    LastWeek,
    #[default]
    AllTime,
}

impl TimePeriod {
    /// Lenient parse: anything unrecognized is [`TimePeriod::AllTime`].
    pub fn parse_lenient(raw: &str) -> Self {
        let key = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "last_month" => TimePeriod::LastMonth,
            "last_week" => TimePeriod::LastWeek,
            other => MONTH_NAMES
                .iter()
                .find(|(name, _)| *name == other)
                .map(|(_, m)| TimePeriod::Month(*m))
                .unwrap_or(TimePeriod::AllTime),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TimePeriod::Month(m) => MONTH_NAMES[m.number_from_month() as usize - 1].0,
            TimePeriod::LastMonth => "last_month",
            TimePeriod::LastWeek => "last_week",
            TimePeriod::AllTime => "all_time",
        }
    }

    /// Short noun form: "June", "last month".
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Month(m) => m.name(),
            TimePeriod::LastMonth => "last month",
            TimePeriod::LastWeek => "last week",
            TimePeriod::AllTime => "all time",
        }
    }

    /// Adverbial form used inside sentences: "in June", "last month".
    pub fn describe(&self) -> String {
        match self {
            TimePeriod::Month(m) => format!("in {}", m.name()),
            TimePeriod::AllTime => "across all time".to_string(),
            other => other.label().to_string(),
        }
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self, TimePeriod::AllTime)
    }
}

impl From<TimePeriod> for String {
    fn from(p: TimePeriod) -> Self {
        p.key().to_string()
    }
}

impl From<String> for TimePeriod {
    fn from(s: String) -> Self {
        TimePeriod::parse_lenient(&s)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Metric the user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Ctr,
    Cpc,
    Impressions,
    Clicks,
    Spend,
    #[default]
    Performance,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Ctr,
        Metric::Cpc,
        Metric::Impressions,
        Metric::Clicks,
        Metric::Spend,
        Metric::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Ctr => "ctr",
            Metric::Cpc => "cpc",
            Metric::Impressions => "impressions",
            Metric::Clicks => "clicks",
            Metric::Spend => "spend",
            Metric::Performance => "performance",
        }
    }

    /// Case-insensitive parse of the wire name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to reduce the filtered records into an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    #[default]
    Best,
    Worst,
    Average,
    Total,
}

impl Comparison {
    pub const ALL: [Comparison; 4] = [
        Comparison::Best,
        Comparison::Worst,
        Comparison::Average,
        Comparison::Total,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Best => "best",
            Comparison::Worst => "worst",
            Comparison::Average => "average",
            Comparison::Total => "total",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user wants, resolved against a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIntent {
    pub time_period: TimePeriod,
    /// `None` means no time filter.
    pub time_range: Option<TimeRange>,
    pub metric: Metric,
    pub comparison: Comparison,
    /// Lower-cased or model-provided fragment matched against campaign names.
    pub campaign: Option<String>,
    /// Human-readable restatement; used in prompts and logs only.
    pub intent: String,
}

impl QueryIntent {
    /// Builds an intent, resolving the time range for `today`.
    ///
    /// A blank `campaign` is dropped. When `restatement` is `None` a default
    /// sentence is generated.
    pub fn resolve(
        time_period: TimePeriod,
        metric: Metric,
        comparison: Comparison,
        campaign: Option<String>,
        restatement: Option<String>,
        today: NaiveDate,
    ) -> Self {
        let campaign = campaign
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let intent = restatement
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| restate(time_period, metric, comparison, campaign.as_deref()));

        Self {
            time_period,
            time_range: resolve_time_range(time_period, today),
            metric,
            comparison,
            campaign,
            intent,
        }
    }
}

fn restate(
    time_period: TimePeriod,
    metric: Metric,
    comparison: Comparison,
    campaign: Option<&str>,
) -> String {
    let mut out = format!("User wants to know about {comparison} {metric}");
    if let Some(c) = campaign {
        out.push_str(" for ");
        out.push_str(c);
    }
    if !time_period.is_all_time() {
        out.push(' ');
        out.push_str(&time_period.describe());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn time_period_wire_names_round_trip() {
        for raw in ["june", "december", "last_month", "last_week", "all_time"] {
            let p = TimePeriod::parse_lenient(raw);
            assert_eq!(p.key(), raw);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{raw}\""));
        }
    }

    #[test]
    fn unknown_period_text_is_all_time() {
        assert_eq!(TimePeriod::parse_lenient("fortnight"), TimePeriod::AllTime);
        assert_eq!(TimePeriod::parse_lenient(""), TimePeriod::AllTime);
        let p: TimePeriod = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(p, TimePeriod::AllTime);
    }

    #[test]
    fn period_parse_accepts_case_and_spaces() {
        assert_eq!(TimePeriod::parse_lenient("June"), TimePeriod::Month(Month::June));
        assert_eq!(TimePeriod::parse_lenient("Last Month"), TimePeriod::LastMonth);
        assert_eq!(TimePeriod::parse_lenient("last-week"), TimePeriod::LastWeek);
    }

    #[test]
    fn describe_reads_naturally() {
        assert_eq!(TimePeriod::Month(Month::June).describe(), "in June");
        assert_eq!(TimePeriod::LastWeek.describe(), "last week");
        assert_eq!(TimePeriod::AllTime.describe(), "across all time");
    }

    #[test]
    fn metric_and_comparison_parse_case_insensitively() {
        assert_eq!(Metric::parse("CTR"), Some(Metric::Ctr));
        assert_eq!(Metric::parse("revenue"), None);
        assert_eq!(Comparison::parse(" Worst "), Some(Comparison::Worst));
        assert_eq!(Comparison::parse("median"), None);
    }

    #[test]
    fn resolve_fills_range_and_restatement() {
        let i = QueryIntent::resolve(
            TimePeriod::Month(Month::June),
            Metric::Ctr,
            Comparison::Best,
            Some("  summer sale ".into()),
            None,
            today(),
        );
        assert_eq!(i.campaign.as_deref(), Some("summer sale"));
        assert!(i.time_range.is_some());
        assert_eq!(i.intent, "User wants to know about best ctr for summer sale in June");
    }

    #[test]
    fn blank_campaign_and_restatement_are_dropped() {
        let i = QueryIntent::resolve(
            TimePeriod::AllTime,
            Metric::Performance,
            Comparison::Total,
            Some("   ".into()),
            Some("".into()),
            today(),
        );
        assert_eq!(i.campaign, None);
        assert_eq!(i.time_range, None);
        assert_eq!(i.intent, "User wants to know about total performance");
    }
}
