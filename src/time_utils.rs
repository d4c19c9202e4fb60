// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time bucketing and formatting.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Format a date as the calendar's day key, e.g. "05 Mar".
///
/// The day is zero-padded to two digits and the month is the English
/// three-letter abbreviation. Day keys are unique within a year.
pub fn day_key(date: NaiveDate) -> String {
    format!(
        "{:02} {}",
        date.day(),
        month_abbrev(date.month()).unwrap_or("")
    )
}

/// English three-letter abbreviation for a 1-based month, or `None` if
/// the month is out of range.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Weekday row index with a Monday-first week: Monday=0 .. Sunday=6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Convert epoch milliseconds to a UTC timestamp.
///
/// Out-of-range values fall back to the epoch, matching the skip-safe
/// default used when an activity event carries no timestamp.
pub fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
