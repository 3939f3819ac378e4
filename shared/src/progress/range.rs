//! Query windows for each time range

use super::types::TimeRange;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lookback for the daily range: a 7-day window ending yesterday
const DAILY_LOOKBACK_DAYS: i64 = 6;

/// Lookback for the weekly range
const WEEKLY_LOOKBACK_DAYS: i64 = 28;

/// Inclusive calendar-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Derive the window for a range as of `today`.
    ///
    /// Non-custom ranges end yesterday, since today's log is still being
    /// filled in, and never start before the user began tracking.
    pub fn derive(range: TimeRange, today: NaiveDate, tracking_start: Option<NaiveDate>) -> Self {
        let end = today - Duration::days(1);
        let start = match range {
            TimeRange::Daily => end - Duration::days(DAILY_LOOKBACK_DAYS),
            TimeRange::Weekly => end - Duration::days(WEEKLY_LOOKBACK_DAYS),
            TimeRange::Monthly => first_of_month_year_before(end),
            TimeRange::Custom { start, end } => {
                return if start <= end {
                    Self::new(start, end)
                } else {
                    Self::new(end, start)
                };
            }
        };

        let start = match tracking_start {
            Some(began) if began > start => began,
            _ => start,
        };

        Self { start, end }
    }

    /// A clamped window can start after it ends (tracking began today)
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered
    pub fn day_count(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Every day in the window, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start
            .iter_days()
            .take_while(move |day| *day <= self.end)
    }
}

fn first_of_month_year_before(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() - 1, date.month(), 1).unwrap_or(date)
}

/// First day of the month containing `date`
pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`
pub(crate) fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}
