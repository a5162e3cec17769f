//! Template answer used without a model, or when the model fails.

use crate::{
    format::{format_amount, format_percent, group_thousands},
    intent::{Comparison, QueryIntent},
    model::AdRecord,
    stats::compute_stats,
};

pub const NO_DATA_MESSAGE: &str =
    "No data found for your query. Please try a different time period or campaign.";

/// One sentence answering `intent` over `records`.
pub fn template_answer(records: &[AdRecord], intent: &QueryIntent) -> String {
    let Some(stats) = compute_stats(records) else {
        return NO_DATA_MESSAGE.to_string();
    };
    let period = intent.time_period.describe();

    match intent.comparison {
        Comparison::Best => ad_sentence("best-performing", &period, stats.best),
        Comparison::Worst => ad_sentence("lowest-performing", &period, stats.worst),
        Comparison::Average | Comparison::Total => format!(
            "I found {} ads matching your criteria {period}. Total impressions: {}, total clicks: {}, total spend: ${}, average CTR: {}.",
            stats.count,
            group_thousands(stats.total_impressions),
            group_thousands(stats.total_clicks),
            format_amount(stats.total_spend),
            format_percent(stats.avg_ctr),
        ),
    }
}

fn ad_sentence(kind: &str, period: &str, ad: &AdRecord) -> String {
    format!(
        "Your {kind} ad {period} was \"{}\" with a CTR of {:.1}%, {} impressions, and a total spend of ${}.",
        ad.ad_name,
        ad.ctr,
        group_thousands(ad.impressions),
        format_amount(ad.spend),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        dataset::Dataset,
        intent::{Metric, TimePeriod},
        stats::filter_by_intent,
    };

    fn intent(q: &str) -> QueryIntent {
        crate::intent::keywords::extract_by_keywords(q, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn empty_set_gets_no_data_message() {
        for c in Comparison::ALL {
            let i = QueryIntent::resolve(
                TimePeriod::AllTime,
                Metric::Performance,
                c,
                None,
                None,
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            );
            assert_eq!(template_answer(&[], &i), NO_DATA_MESSAGE);
        }
    }

    #[test]
    fn best_names_the_top_ctr_ad() {
        let ds = Dataset::bundled().unwrap();
        let i = intent("Which ad performed best in June?");
        let rows = filter_by_intent(ds.records(), &i);
        assert_eq!(
            template_answer(&rows, &i),
            "Your best-performing ad in June was \"Swimwear Promo\" with a CTR of 5.0%, 12,000 impressions, and a total spend of $1,800."
        );
    }

    #[test]
    fn worst_names_the_bottom_ctr_ad() {
        let ds = Dataset::bundled().unwrap();
        let i = intent("worst ad in june");
        let rows = filter_by_intent(ds.records(), &i);
        let answer = template_answer(&rows, &i);
        assert!(answer.starts_with("Your lowest-performing ad in June was \"Beach Collection Banner\""));
        assert!(answer.contains("CTR of 3.0%"));
        assert!(answer.contains("15,000 impressions"));
        assert!(answer.contains("$2,250."));
    }

    #[test]
    fn total_and_average_report_aggregates() {
        let ds = Dataset::bundled().unwrap();
        let i = intent("total spend for black friday");
        let rows = filter_by_intent(ds.records(), &i);
        assert_eq!(
            template_answer(&rows, &i),
            "I found 3 ads matching your criteria across all time. Total impressions: 65,000, total clicks: 2,850, total spend: $11,400, average CTR: 4.4%."
        );

        let i = intent("average ctr in june");
        let rows = filter_by_intent(ds.records(), &i);
        assert!(template_answer(&rows, &i).starts_with("I found 3 ads matching your criteria in June."));
    }

    #[test]
    fn zero_impressions_do_not_divide_by_zero() {
        let ds = Dataset::bundled().unwrap();
        let mut r = ds.records()[0].clone();
        r.impressions = 0;
        r.clicks = 0;
        let i = intent("total");
        let answer = template_answer(std::slice::from_ref(&r), &i);
        assert!(answer.ends_with("average CTR: n/a."));
    }
}
