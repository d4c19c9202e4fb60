// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month-grid construction.
//!
//! Lays one calendar month out as seven Monday-first weekday rows:
//! leading blanks up to the first date's weekday, one cell per date,
//! trailing blanks to complete the rectangle. Cells carry the shading
//! level, tooltip text and tooltip placement zone the rendering layer
//! needs; a `preload` grid carries skeleton cells instead so the page
//! can paint before profile data arrives.

use chrono::{Datelike, NaiveDate};

use crate::models::{ContributionStats, DayCell, DaySlot, MonthGrid, TooltipZone};
use crate::time_utils::{day_key, month_abbrev, weekday_index};

/// Weekday rows Mon-Wed take the down-opening tooltip zones.
const TOP_ROWS: usize = 3;

/// Level forced onto the joining-date cell.
const JOINING_DAY_LEVEL: u32 = 4;

/// Build the grid for one month.
///
/// `month` is 1-based. An out-of-range month yields an empty grid rather
/// than an error; valid ranges are the caller's contract. With `preload`
/// set, cells are skeleton placeholders (level 0, no tooltip).
pub fn build_month_grid(
    year: i32,
    month: u32,
    stats: &ContributionStats,
    joining_date: Option<NaiveDate>,
    preload: bool,
) -> MonthGrid {
    let (Some(first), Some(label)) = (NaiveDate::from_ymd_opt(year, month, 1), month_abbrev(month))
    else {
        return MonthGrid::empty(year, month);
    };

    let mut grid = MonthGrid {
        year,
        month,
        label,
        rows: Default::default(),
    };

    // Blanks from Monday up to the first date's weekday:
    // * * * 1 2 3 4
    for row in 0..weekday_index(first) {
        grid.rows[row].push(DaySlot::Blank);
    }

    let mut date = first;
    while date.month() == month {
        let row = weekday_index(date);
        let cell = if preload {
            placeholder_cell(month, row)
        } else {
            day_cell(date, stats, joining_date, row)
        };
        grid.rows[row].push(DaySlot::Day(cell));

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    // Blanks after the last date to square off the final week:
    // 29 30 31 * * * *
    let next_row = weekday_index(date);
    if date.month() != month && next_row != 0 {
        for row in next_row..7 {
            grid.rows[row].push(DaySlot::Blank);
        }
    }

    grid
}

fn day_cell(
    date: NaiveDate,
    stats: &ContributionStats,
    joining_date: Option<NaiveDate>,
    row: usize,
) -> DayCell {
    let count = stats.count_on(date.year(), &day_key(date));
    let is_joining_day = joining_date == Some(date);
    let level = if is_joining_day {
        JOINING_DAY_LEVEL
    } else {
        level_for_count(count)
    };

    DayCell {
        level,
        count,
        is_joining_day,
        tooltip_text: tooltip_text(date, count, is_joining_day),
        tooltip_zone: tooltip_zone(date.month(), row),
    }
}

/// Skeleton cell painted before real data loads. The placement zone is
/// position-derived, so it is still computed.
fn placeholder_cell(month: u32, row: usize) -> DayCell {
    DayCell {
        level: 0,
        count: 0,
        is_joining_day: false,
        tooltip_text: String::new(),
        tooltip_zone: tooltip_zone(month, row),
    }
}

/// Shading level for a day's contribution count: ceil(count / 4).
///
/// Counts above 16 push the level past 4; the shade alpha saturates at
/// 1.0 so those cells render like level 4.
pub fn level_for_count(count: u32) -> u32 {
    count.div_ceil(4)
}

/// Placement zone from the month's position in the year and the cell's
/// weekday row.
///
/// January/February cells sit at the left page edge and take the
/// right-opening zones; November/December the left-opening ones. Top
/// rows open downward, the rest upward.
pub fn tooltip_zone(month: u32, row: usize) -> TooltipZone {
    let top = row < TOP_ROWS;
    match month {
        1 | 2 => {
            if top {
                TooltipZone::DownRight
            } else {
                TooltipZone::UpRight
            }
        }
        11 | 12 => {
            if top {
                TooltipZone::DownLeft
            } else {
                TooltipZone::UpLeft
            }
        }
        _ => {
            if top {
                TooltipZone::Down
            } else {
                TooltipZone::Up
            }
        }
    }
}

/// Hover text for a cell, e.g. "3 contributions on Mar 5, 2024".
///
/// The joining date instead reads "Joined Mar 5, 2024" with the
/// contribution count on a second line.
fn tooltip_text(date: NaiveDate, count: u32, is_joining_day: bool) -> String {
    let label = month_abbrev(date.month()).unwrap_or("");
    let phrase = contribution_phrase(count);
    if is_joining_day {
        format!(
            "Joined {} {}, {}\n{}",
            label,
            date.day(),
            date.year(),
            phrase
        )
    } else {
        format!("{} on {} {}, {}", phrase, label, date.day(), date.year())
    }
}

/// "1 contribution" / "n contributions"; zero pluralizes.
fn contribution_phrase(count: u32) -> String {
    if count == 1 {
        format!("{count} contribution")
    } else {
        format!("{count} contributions")
    }
}
