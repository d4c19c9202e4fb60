//! Render options loaded from environment variables.
//!
//! The calendar itself is pure; these options only affect how the
//! rendering layer shades cells and places tooltips.

use std::env;

use crate::color::Rgba;

/// Options the rendering layer applies to calendar output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base color the level alpha ramp is applied over
    pub base_color: Rgba,
    /// Distance from a viewport edge (px) inside which tooltip zones
    /// flip to their edge-safe variants
    pub edge_margin_px: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_color: crate::color::WHITE,
            edge_margin_px: 250,
        }
    }
}

impl RenderOptions {
    /// Load options from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            base_color: env::var("CALENDAR_BASE_COLOR")
                .map(|value| Rgba::parse(&value))
                .unwrap_or(defaults.base_color),
            edge_margin_px: env::var("CALENDAR_EDGE_MARGIN_PX")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.edge_margin_px),
        }
    }
}
