// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar view state and render output.
//!
//! `CalendarView` owns everything the calendar needs between renders:
//! the aggregated contribution stats, the joining date, the max streak
//! and the selected year. A new snapshot replaces the whole view; there
//! is no incremental update path.

use chrono::{Datelike, NaiveDate};

use crate::models::{CalendarRender, ContributionStats, HeaderSummary, ProfileSnapshot};
use crate::services::grid::build_month_grid;
use crate::time_utils::datetime_from_millis;

/// View state for one profile's contribution calendar.
#[derive(Debug, Clone)]
pub struct CalendarView {
    stats: ContributionStats,
    joining_date: Option<NaiveDate>,
    max_streak: u32,
    selected_year: i32,
    current_year: i32,
}

impl CalendarView {
    /// Skeleton view used before any snapshot has loaded.
    pub fn empty(current_year: i32) -> Self {
        Self {
            stats: ContributionStats::default(),
            joining_date: None,
            max_streak: 0,
            selected_year: current_year,
            current_year,
        }
    }

    /// Build the view from a loaded profile snapshot.
    ///
    /// `current_year` is passed in rather than read from the clock so
    /// the view is a pure function of its inputs. The selection starts
    /// on the current year.
    pub fn from_snapshot(snapshot: &ProfileSnapshot, current_year: i32) -> Self {
        let stats = ContributionStats::from_events(snapshot.events());

        // addedAt of 0 is the collaborator's "unknown" sentinel; mapping
        // it to a real 1970 date would mark a phantom joining day.
        let joining_date = snapshot
            .added_at
            .filter(|&millis| millis != 0)
            .map(|millis| datetime_from_millis(millis).date_naive());

        tracing::info!(
            total = stats.total_contributions,
            active_days = stats.total_active_days,
            joining_date = ?joining_date,
            "Calendar view rebuilt from snapshot"
        );

        Self {
            stats,
            joining_date,
            max_streak: snapshot.max_streak.unwrap_or(0),
            selected_year: current_year,
            current_year,
        }
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    pub fn joining_date(&self) -> Option<NaiveDate> {
        self.joining_date
    }

    pub fn stats(&self) -> &ContributionStats {
        &self.stats
    }

    /// Year-dropdown entries, newest first, from the joining year
    /// through the current year. An unknown joining date yields just the
    /// current year.
    pub fn years(&self) -> Vec<i32> {
        let first = self
            .joining_date
            .map_or(self.current_year, |date| date.year())
            .min(self.current_year);
        (first..=self.current_year).rev().collect()
    }

    /// Select a year and return its fresh render.
    pub fn select_year(&mut self, year: i32) -> CalendarRender {
        tracing::debug!(year, "Calendar year selected");
        self.selected_year = year;
        self.render()
    }

    /// Render the selected year: header summary plus twelve month grids.
    pub fn render(&self) -> CalendarRender {
        self.render_grids(false)
    }

    /// Render a skeleton of the selected year: placeholder grids and a
    /// zeroed header, painted before profile data arrives.
    pub fn render_preload(&self) -> CalendarRender {
        self.render_grids(true)
    }

    /// Header totals for the selected year.
    pub fn header(&self) -> HeaderSummary {
        let year = self.stats.year(self.selected_year);
        HeaderSummary {
            total_contributions_all_time: self.stats.total_contributions,
            contributions_this_year: year.map_or(0, |y| y.total_contributions),
            active_days_this_year: year.map_or(0, |y| y.active_days),
            total_active_days_all_time: self.stats.total_active_days,
            max_streak: self.max_streak,
        }
    }

    fn render_grids(&self, preload: bool) -> CalendarRender {
        let months = (1..=12)
            .map(|month| {
                build_month_grid(
                    self.selected_year,
                    month,
                    &self.stats,
                    self.joining_date,
                    preload,
                )
            })
            .collect();

        CalendarRender {
            year: self.selected_year,
            header: if preload {
                HeaderSummary::default()
            } else {
                self.header()
            },
            months,
        }
    }
}
