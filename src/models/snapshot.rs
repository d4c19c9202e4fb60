// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile snapshot model supplied by the profile-loading collaborator.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One completed unit of activity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Completion time (epoch milliseconds). Missing timestamps bucket
    /// to the epoch during aggregation.
    pub timestamp: Option<i64>,
}

impl ActivityEvent {
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }
}

/// Already-loaded profile data as handed over by the profile page.
///
/// Every field is optional; absent fields default safely (unknown
/// joining date, streak 0, no results).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    /// Account creation time (epoch milliseconds). 0 means unknown.
    pub added_at: Option<i64>,
    /// Longest run of consecutive active days
    pub max_streak: Option<u32>,
    /// Completed activity events, order irrelevant
    pub results: Option<Vec<ActivityEvent>>,
}

impl ProfileSnapshot {
    /// Parse a snapshot from the collaborator's JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The activity events, empty when the snapshot carries none.
    pub fn events(&self) -> &[ActivityEvent] {
        self.results.as_deref().unwrap_or(&[])
    }
}
