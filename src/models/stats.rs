//! Contribution aggregates for the calendar and its header.
//!
//! These aggregates are computed in one pass over the snapshot's activity
//! events, so rendering a year is O(days) lookups instead of re-scanning
//! the event list.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ActivityEvent;
use crate::time_utils::{datetime_from_millis, day_key};

/// Per-year contribution counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearStats {
    /// Contribution count per day key ("DD MMM" format)
    pub days: HashMap<String, u32>,
    /// Sum of this year's day counts
    pub total_contributions: u32,
    /// Number of distinct days with at least one contribution
    pub active_days: u32,
}

impl YearStats {
    /// Contribution count for a day key, 0 when the day has none.
    pub fn count_for(&self, key: &str) -> u32 {
        self.days.get(key).copied().unwrap_or(0)
    }
}

/// All-years contribution aggregates.
///
/// Year buckets and the global totals live in separate fields, so day
/// keys never share a key space with aggregate entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionStats {
    /// Per-year buckets keyed by calendar year
    pub per_year: HashMap<i32, YearStats>,
    /// Sum of contributions across all years
    pub total_contributions: u64,
    /// Sum of active days across all years
    pub total_active_days: u32,
}

impl ContributionStats {
    /// Aggregate a snapshot's activity events.
    ///
    /// Order of the input is irrelevant; each call produces a fresh
    /// aggregate.
    pub fn from_events(events: &[ActivityEvent]) -> Self {
        let mut stats = Self::default();
        for event in events {
            stats.record_event(event);
        }

        tracing::debug!(
            years = stats.per_year.len(),
            total = stats.total_contributions,
            active_days = stats.total_active_days,
            "Aggregated contribution events"
        );
        stats
    }

    /// Fold one event into the aggregate.
    ///
    /// Events without a usable timestamp land in the epoch bucket rather
    /// than being dropped, so totals always match the event count.
    pub fn record_event(&mut self, event: &ActivityEvent) {
        let when = datetime_from_millis(event.timestamp.unwrap_or(0));
        let date = when.date_naive();

        let year = self.per_year.entry(date.year()).or_default();
        let count = year.days.entry(day_key(date)).or_insert(0);
        if *count == 0 {
            year.active_days += 1;
            self.total_active_days += 1;
        }
        *count += 1;
        year.total_contributions += 1;
        self.total_contributions += 1;
    }

    /// The bucket for a year, if any contribution fell in it.
    pub fn year(&self, year: i32) -> Option<&YearStats> {
        self.per_year.get(&year)
    }

    /// Contribution count for a (year, day key) pair, 0 when absent.
    pub fn count_on(&self, year: i32, key: &str) -> u32 {
        self.year(year).map_or(0, |y| y.count_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_at(millis: &[i64]) -> Vec<ActivityEvent> {
        millis.iter().map(|&ms| ActivityEvent::at(ms)).collect()
    }

    // 2024-03-05 12:00:00 UTC
    const MAR_5_2024: i64 = 1709640000000;
    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_single_event() {
        let stats = ContributionStats::from_events(&events_at(&[MAR_5_2024]));

        assert_eq!(stats.total_contributions, 1);
        assert_eq!(stats.total_active_days, 1);
        assert_eq!(stats.count_on(2024, "05 Mar"), 1);

        let year = stats.year(2024).expect("2024 bucket");
        assert_eq!(year.total_contributions, 1);
        assert_eq!(year.active_days, 1);
    }

    #[test]
    fn test_same_day_events_share_a_bucket() {
        let stats =
            ContributionStats::from_events(&events_at(&[MAR_5_2024, MAR_5_2024 + 3_600_000]));

        assert_eq!(stats.count_on(2024, "05 Mar"), 2);
        assert_eq!(stats.year(2024).unwrap().active_days, 1);
        assert_eq!(stats.total_active_days, 1);
        assert_eq!(stats.total_contributions, 2);
    }

    #[test]
    fn test_active_days_counts_distinct_days() {
        let stats = ContributionStats::from_events(&events_at(&[
            MAR_5_2024,
            MAR_5_2024 + DAY_MS,
            MAR_5_2024 + 2 * DAY_MS,
            MAR_5_2024 + 2 * DAY_MS,
        ]));

        let year = stats.year(2024).expect("2024 bucket");
        assert_eq!(year.days.len(), 3);
        assert_eq!(year.active_days, 3);
        assert_eq!(year.total_contributions, 4);
    }

    #[test]
    fn test_events_split_across_years() {
        // 2023-12-31 23:00 UTC and one day later (2024-01-01 23:00 UTC)
        let nye = 1704063600000;
        let stats = ContributionStats::from_events(&events_at(&[nye, nye + DAY_MS]));

        assert_eq!(stats.count_on(2023, "31 Dec"), 1);
        assert_eq!(stats.count_on(2024, "01 Jan"), 1);
        assert_eq!(stats.total_contributions, 2);
        assert_eq!(stats.total_active_days, 2);
    }

    #[test]
    fn test_totals_are_sums_of_year_buckets() {
        let stats = ContributionStats::from_events(&events_at(&[
            MAR_5_2024,
            MAR_5_2024 + DAY_MS,
            MAR_5_2024 - 366 * DAY_MS,
            MAR_5_2024 - 365 * 2 * DAY_MS,
        ]));

        let contributions: u64 = stats
            .per_year
            .values()
            .map(|y| u64::from(y.total_contributions))
            .sum();
        let active: u32 = stats.per_year.values().map(|y| y.active_days).sum();

        assert_eq!(stats.total_contributions, contributions);
        assert_eq!(stats.total_active_days, active);
    }

    #[test]
    fn test_order_is_irrelevant() {
        let forward = events_at(&[MAR_5_2024, MAR_5_2024 + DAY_MS, MAR_5_2024 + 2 * DAY_MS]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = ContributionStats::from_events(&forward);
        let b = ContributionStats::from_events(&backward);

        assert_eq!(a.total_contributions, b.total_contributions);
        assert_eq!(a.total_active_days, b.total_active_days);
        assert_eq!(
            a.year(2024).unwrap().days,
            b.year(2024).unwrap().days
        );
    }

    #[test]
    fn test_missing_timestamp_lands_in_epoch_bucket() {
        let stats = ContributionStats::from_events(&[ActivityEvent::default()]);

        assert_eq!(stats.count_on(1970, "01 Jan"), 1);
        assert_eq!(stats.total_contributions, 1);
    }

    #[test]
    fn test_empty_events() {
        let stats = ContributionStats::from_events(&[]);

        assert!(stats.per_year.is_empty());
        assert_eq!(stats.total_contributions, 0);
        assert_eq!(stats.total_active_days, 0);
        assert_eq!(stats.count_on(2024, "05 Mar"), 0);
    }
}
