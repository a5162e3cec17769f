//! Compact text rendering of a record set, fed to the answer prompt.

use std::fmt::Write;

use crate::{
    format::{format_amount, format_percent, group_thousands},
    model::AdRecord,
    stats::compute_stats,
};

pub const EMPTY_SUMMARY: &str = "No data found for the specified criteria.";

/// Aggregate lines followed by one line per record.
pub fn data_summary(records: &[AdRecord]) -> String {
    let Some(s) = compute_stats(records) else {
        return EMPTY_SUMMARY.to_string();
    };

    let avg_cpc = s
        .avg_cpc
        .filter(|v| v.is_finite())
        .map_or_else(|| "n/a".to_string(), |v| format!("${v:.2}"));

    let mut out = String::new();
    out.push_str("Data Summary:\n");
    let _ = writeln!(out, "- Number of ads: {}", s.count);
    let _ = writeln!(out, "- Total impressions: {}", group_thousands(s.total_impressions));
    let _ = writeln!(out, "- Total clicks: {}", group_thousands(s.total_clicks));
    let _ = writeln!(out, "- Total spend: ${}", format_amount(s.total_spend));
    let _ = writeln!(out, "- Average CTR: {}", format_percent(s.avg_ctr));
    let _ = writeln!(out, "- Average CPC: {avg_cpc}");
    let _ = writeln!(
        out,
        "- Best performing ad: {} (CTR: {:.1}%)",
        s.best.ad_name, s.best.ctr
    );
    let _ = writeln!(
        out,
        "- Worst performing ad: {} (CTR: {:.1}%)",
        s.worst.ad_name, s.worst.ctr
    );

    out.push_str("\nIndividual ads:\n");
    for r in records {
        let _ = writeln!(
            out,
            "- {} ({}) on {}: {} impressions, {} clicks, {:.1}% CTR, ${} spend",
            r.ad_name,
            r.campaign_name,
            r.date,
            group_thousands(r.impressions),
            group_thousands(r.clicks),
            r.ctr,
            format_amount(r.spend),
        );
    }

    out
}
