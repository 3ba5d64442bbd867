//! Calendar-day helpers for dates crossing the engine boundary.
//!
//! All dates are timezone-naive whole days. At the boundary they travel as
//! zero-padded `YYYY-MM-DD` strings.

use crate::constants::STORAGE_DATE_FORMAT;
use crate::error::{TimelineError, TimelineResult};
use chrono::{NaiveDate, TimeDelta};

/// Format a date as `YYYY-MM-DD`.
pub fn format_for_storage(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(input: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), STORAGE_DATE_FORMAT).map_err(|_| TimelineError::InvalidDate {
        input: input.to_string(),
    })
}

/// Signed number of days from `from` to `to`.
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Shift a date by a (possibly negative) number of days.
///
/// Saturates at the calendar limits instead of panicking.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Whole days covered by an item, never negative.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end).max(0)
}

/// "1 day", "3 days"
pub fn format_duration(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Short display form, e.g. "Fri, Jan 15".
pub fn format_for_display(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Display form with the year, e.g. "Fri, Jan 15, 2021".
pub fn format_for_display_with_year(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
