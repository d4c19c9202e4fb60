// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cell shading over a caller-supplied base color.
//!
//! Shading is opacity-only: the level maps linearly to an alpha over the
//! base color. There is no color mixing or theme logic here.

use serde::Serialize;

/// An RGBA color as handed back to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

pub const WHITE: Rgba = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 1.0,
};

impl Rgba {
    /// Parse a CSS `rgb(r, g, b)` or `rgba(r, g, b, a)` value.
    ///
    /// Anything unparseable falls back to opaque white, matching the
    /// renderer's behavior when the sampled style is unavailable.
    pub fn parse(value: &str) -> Rgba {
        parse_channels(value).unwrap_or(WHITE)
    }

    /// CSS representation, e.g. "rgba(98, 114, 164, 0.5)".
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn parse_channels(value: &str) -> Option<Rgba> {
    let value = value.trim();
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let a = match parts.next() {
        Some(alpha) => alpha.parse().ok()?,
        None => 1.0,
    };
    if parts.next().is_some() {
        return None;
    }

    Some(Rgba { r, g, b, a })
}

/// The background for a cell at the given shading level.
///
/// Levels 1-4 map to alpha 0.25/0.5/0.75/1.0 over the base color; higher
/// levels saturate at 1.0. Level 0 gets no background override at all.
pub fn shade_for_level(base: Rgba, level: u32) -> Option<Rgba> {
    if level == 0 {
        return None;
    }
    Some(Rgba {
        a: (level as f32 * 0.25).min(1.0),
        ..base
    })
}
