// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Library error types.
//!
//! The aggregation and grid-building core never fails: missing inputs
//! default safely and invalid year/month ranges are a caller contract
//! violation, not a runtime error. The only fallible boundary is
//! decoding the collaborator's snapshot payload.

/// Calendar library error type.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid profile snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Result type alias for the crate's fallible boundaries.
pub type Result<T> = std::result::Result<T, CalendarError>;
