// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Contribution-Calendar: render data for a yearly activity calendar
//!
//! This crate turns a profile's activity snapshot into everything a
//! profile page needs to draw a GitHub-style contribution calendar:
//! per-year aggregates, Monday-first month grids with shading levels
//! and tooltip placement, and a header summary of totals and streaks.
//! Rendering itself (DOM, HTML, CSS) stays with the caller.

pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod view;

pub use config::RenderOptions;
pub use error::{CalendarError, Result};
pub use models::{
    ActivityEvent, CalendarRender, ContributionStats, DayCell, DaySlot, HeaderSummary, MonthGrid,
    ProfileSnapshot, TooltipZone, YearStats,
};
pub use view::CalendarView;
