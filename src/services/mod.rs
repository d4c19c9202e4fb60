// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - calendar computation layer.

pub mod grid;

pub use grid::{build_month_grid, level_for_count, tooltip_zone};
