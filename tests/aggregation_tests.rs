// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use contribution_calendar::{CalendarView, ContributionStats, ProfileSnapshot};

mod common;
use common::{day_millis, init_tracing};

#[test]
fn test_snapshot_json_to_header_totals() {
    init_tracing();

    let snapshot = ProfileSnapshot::from_json(&format!(
        r#"{{
            "addedAt": {},
            "maxStreak": 7,
            "results": [
                {{ "timestamp": {} }},
                {{ "timestamp": {} }},
                {{ "timestamp": {} }},
                {{ "timestamp": {} }}
            ]
        }}"#,
        day_millis(2022, 6, 1),
        day_millis(2024, 3, 5),
        day_millis(2024, 3, 5),
        day_millis(2024, 3, 6),
        day_millis(2023, 11, 20),
    ))
    .expect("snapshot should parse");

    let view = CalendarView::from_snapshot(&snapshot, 2024);
    let header = view.header();

    assert_eq!(header.total_contributions_all_time, 4);
    assert_eq!(header.contributions_this_year, 3);
    assert_eq!(header.active_days_this_year, 2);
    assert_eq!(header.total_active_days_all_time, 3);
    assert_eq!(header.max_streak, 7);
}

#[test]
fn test_empty_snapshot_defaults() {
    let snapshot = ProfileSnapshot::from_json("{}").expect("empty snapshot should parse");
    let view = CalendarView::from_snapshot(&snapshot, 2024);

    assert_eq!(view.header(), Default::default());
    assert_eq!(view.joining_date(), None);
    assert_eq!(view.years(), vec![2024]);
}

#[test]
fn test_totals_match_year_bucket_sums() {
    // One event per week across three years
    let mut events = Vec::new();
    for year in 2022..=2024 {
        for week in 0..52 {
            events.push(contribution_calendar::ActivityEvent::at(
                day_millis(year, 1, 1) + i64::from(week) * 7 * 86_400_000,
            ));
        }
    }

    let stats = ContributionStats::from_events(&events);

    let contributions: u64 = stats
        .per_year
        .values()
        .map(|y| u64::from(y.total_contributions))
        .sum();
    let active_days: u32 = stats.per_year.values().map(|y| y.active_days).sum();

    assert_eq!(stats.total_contributions, contributions);
    assert_eq!(stats.total_contributions, events.len() as u64);
    assert_eq!(stats.total_active_days, active_days);
}

#[test]
fn test_active_days_ignores_repeat_days() {
    let millis = day_millis(2024, 3, 5);
    let events: Vec<_> = (0..10)
        .map(|i| contribution_calendar::ActivityEvent::at(millis + i * 60_000))
        .collect();

    let stats = ContributionStats::from_events(&events);
    let year = stats.year(2024).expect("2024 bucket");

    assert_eq!(year.total_contributions, 10);
    assert_eq!(year.active_days, 1);
    assert_eq!(stats.total_active_days, 1);
}

#[test]
fn test_events_without_timestamps_still_count() {
    let snapshot = ProfileSnapshot::from_json(r#"{ "results": [{}, {}] }"#)
        .expect("snapshot should parse");

    let stats = ContributionStats::from_events(snapshot.events());

    assert_eq!(stats.total_contributions, 2);
    assert_eq!(stats.count_on(1970, "01 Jan"), 2);
}
