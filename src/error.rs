// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the natural clock.

use thiserror::Error;

/// Errors surfaced by the natural-time engine and its collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoraError {
    /// A bounded lookup was asked about an instant outside `[start, end)`.
    ///
    /// Signals a caller logic error (e.g. a bedtime computed against the
    /// wrong day); it is never retried.
    #[error("time point {point} is outside of {start}..{end} (end excluded)")]
    OutOfRangeInstant {
        point: String,
        start: String,
        end: String,
    },

    /// The ephemeris provider failed or returned malformed data.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),

    #[error("invalid position: latitude {latitude}, longitude {longitude}")]
    InvalidPosition { latitude: f64, longitude: f64 },

    /// No position source could produce a position.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("config error: {0}")]
    Config(String),
}

impl HoraError {
    pub(crate) fn out_of_range(point: String, start: String, end: String) -> Self {
        HoraError::OutOfRangeInstant { point, start, end }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HoraError>;
