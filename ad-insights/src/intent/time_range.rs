//! Time period → inclusive date range.
//!
//! Named months resolve against the dataset year, not the current year.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::TimePeriod;

/// Year of the bundled dataset; named months always mean this year.
pub const DATASET_YEAR: i32 = 2024;

/// Inclusive `[start, end]` calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolves `period` relative to `today`. `None` means "no time filter".
pub fn resolve_time_range(period: TimePeriod, today: NaiveDate) -> Option<TimeRange> {
    match period {
        TimePeriod::Month(m) => month_bounds(DATASET_YEAR, m.number_from_month()),
        TimePeriod::LastMonth => {
            let end = today.with_day(1)?.pred_opt()?;
            let start = end.with_day(1)?;
            Some(TimeRange { start, end })
        }
        TimePeriod::LastWeek => {
            // Monday..=Sunday of the week containing `today`.
            let back = u64::from(today.weekday().num_days_from_monday());
            let start = today.checked_sub_days(Days::new(back))?;
            let end = start.checked_add_days(Days::new(6))?;
            Some(TimeRange { start, end })
        }
        TimePeriod::AllTime => None,
    }
}

fn month_bounds(year: i32, month: u32) -> Option<TimeRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(TimeRange {
        start,
        end: next.pred_opt()?,
    })
}
