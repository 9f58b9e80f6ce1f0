// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone-aware instants.
//!
//! Every instant the engine handles is a `chrono::DateTime<Tz>` carrying the
//! viewer's zone, because calendar-date boundaries (which day's sunrise is
//! "today's") depend on it.  [`TimeInstant`] gathers the handful of
//! operations the natural clock needs on top of chrono:
//!
//! - real-valued millisecond differences (natural seconds are fractional),
//! - the civil date in the instant's own zone,
//! - calendar-day shifts that keep the wall-clock time,
//! - millisecond offsets.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time usable with
/// [`Interval`](crate::Interval).
pub trait TimeInstant: Clone + PartialOrd + Sized {
    /// Calendar date of this instant in its own zone.
    fn civil_date(&self) -> NaiveDate;

    /// Signed milliseconds from `self` to `later` (negative if `later` is earlier).
    fn millis_until(&self, later: &Self) -> f64;

    /// Same wall-clock time `days` calendar days away.
    ///
    /// When that wall-clock time does not exist on the target date (a DST
    /// gap), the instant is shifted by `days × 24 h` instead.  Ambiguous
    /// wall-clock times resolve to the earlier instant.  Returns `None` if
    /// the result is not representable.
    fn shift_days(&self, days: i64) -> Option<Self>;

    /// Shift by a real-valued number of milliseconds (rounded to the nanosecond).
    fn add_millis(&self, millis: f64) -> Option<Self>;
}

// ═══════════════════════════════════════════════════════════════════════════
// chrono implementation
// ═══════════════════════════════════════════════════════════════════════════

/// Milliseconds in a chrono delta, keeping sub-millisecond precision.
pub(crate) fn delta_millis(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e6,
        // Deltas beyond ±292 years do not fit in i64 nanoseconds.
        None => delta.num_milliseconds() as f64,
    }
}

impl<Tz: TimeZone> TimeInstant for DateTime<Tz> {
    #[inline]
    fn civil_date(&self) -> NaiveDate {
        self.date_naive()
    }

    #[inline]
    fn millis_until(&self, later: &Self) -> f64 {
        delta_millis(later.clone().signed_duration_since(self))
    }

    fn shift_days(&self, days: i64) -> Option<Self> {
        let step = TimeDelta::try_days(days)?;
        let target = self.naive_local().checked_add_signed(step)?;
        match self.timezone().from_local_datetime(&target).earliest() {
            Some(shifted) => Some(shifted),
            None => self.clone().checked_add_signed(step),
        }
    }

    fn add_millis(&self, millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let nanos = (millis * 1e6).round();
        if nanos.abs() >= i64::MAX as f64 {
            return None;
        }
        self.clone()
            .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
