// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Render-ready calendar value types handed to the rendering layer.

use serde::Serialize;

/// Diagonal a hover tooltip opens toward, encoded 1-6.
///
/// The down-opening zones (2, 3, 4) are assigned to the top weekday rows
/// and the up-opening zones (1, 6, 5) to the bottom rows; the left/right
/// variants keep tooltips on January/February and November/December cells
/// from clipping at the page edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum TooltipZone {
    UpRight = 1,
    DownRight = 2,
    Down = 3,
    DownLeft = 4,
    UpLeft = 5,
    Up = 6,
}

impl TooltipZone {
    /// Numeric zone code (1-6) for the rendering layer's override scheme.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this zone opens downward (top-row placement).
    pub fn opens_down(self) -> bool {
        matches!(
            self,
            TooltipZone::DownRight | TooltipZone::Down | TooltipZone::DownLeft
        )
    }

    /// Flip to an edge-safe zone when the cell sits within `margin_px`
    /// of either viewport edge, keeping the vertical direction.
    ///
    /// Cells near the left edge take the right-opening zones (2/1) and
    /// cells near the right edge the left-opening zones (4/5); everything
    /// else keeps its statically computed zone.
    pub fn edge_adjusted(self, cell_x: u32, viewport_width: u32, margin_px: u32) -> TooltipZone {
        if cell_x < margin_px {
            if self.opens_down() {
                TooltipZone::DownRight
            } else {
                TooltipZone::UpRight
            }
        } else if cell_x + margin_px > viewport_width {
            if self.opens_down() {
                TooltipZone::DownLeft
            } else {
                TooltipZone::UpLeft
            }
        } else {
            self
        }
    }
}

/// One calendar date's rendering attributes. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Shading level, ceil(count / 4). Nominally 0-4; counts above 16
    /// push it higher, which the shade formula saturates away.
    pub level: u32,
    /// Contributions recorded on this date
    pub count: u32,
    /// Whether this date is the account's joining date
    pub is_joining_day: bool,
    /// Hover tooltip text, empty for preload placeholders
    pub tooltip_text: String,
    /// Placement zone for the hover tooltip
    pub tooltip_zone: TooltipZone,
}

/// One grid position: a real date or alignment padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DaySlot {
    Blank,
    Day(DayCell),
}

impl DaySlot {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            DaySlot::Day(cell) => Some(cell),
            DaySlot::Blank => None,
        }
    }
}

/// A month rendered as seven Monday-first weekday rows.
///
/// Every row holds one slot per week column, so the total slot count is
/// always a multiple of seven. Built fresh per (year, month) pair and
/// discarded on re-render.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
    /// Display label, "Jan".."Dec" (empty for an out-of-range month)
    pub label: &'static str,
    /// Monday..Sunday rows of day slots
    pub rows: [Vec<DaySlot>; 7],
}

impl MonthGrid {
    pub(crate) fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            label: "",
            rows: Default::default(),
        }
    }

    /// Number of week columns in the grid.
    pub fn weeks(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total slots across all rows (blanks included).
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Iterate the real day cells in date order.
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        // Column-major walk matches date order in a Monday-first grid
        let weeks = self.weeks();
        (0..weeks).flat_map(move |week| {
            self.rows
                .iter()
                .filter_map(move |row| row.get(week).and_then(DaySlot::as_day))
        })
    }
}

/// Totals shown above the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    pub total_contributions_all_time: u64,
    pub contributions_this_year: u32,
    pub active_days_this_year: u32,
    pub total_active_days_all_time: u32,
    pub max_streak: u32,
}

/// One full year of render data: header plus twelve month grids.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarRender {
    pub year: i32,
    pub header: HeaderSummary,
    pub months: Vec<MonthGrid>,
}
