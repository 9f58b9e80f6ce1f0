// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time interval and the proportional (natural-hour) clock over it.
//!
//! This module provides:
//! - [`Interval<T>`]: a half-open span `[start, end)` over any [`TimeInstant`]
//! - [`IntervalReading`]: where a point falls inside an interval when the
//!   interval is divided into 12 natural hours of 60 minutes of 60 seconds

use crate::instant::TimeInstant;
use qtty::Seconds;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Natural seconds in any interval: 12 hours × 60 minutes × 60 seconds.
pub const NATURAL_SECONDS_PER_INTERVAL: f64 = 43_200.0;

/// Natural hours in a day or in a night.
pub const NATURAL_HOURS: u32 = 12;

/// Represents an interval between two instants.
///
/// An `Interval` is defined by a start and end time instant of type `T`.
/// Membership is half-open: `start` belongs to the interval, `end` does not.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hora_solis::Interval;
///
/// let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
/// let day = Interval::new(start, end);
///
/// let reading = day.reading(&Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap());
/// assert_eq!((reading.hour, reading.minute, reading.second), (6, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Proportional position of an instant inside an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalReading {
    /// Natural hour, `0..=11`.
    pub hour: u32,
    /// Natural minute, `0..=59`.
    pub minute: u32,
    /// Natural second, `0..=59`.
    pub second: u32,
    /// Length of one natural second of this interval, in milliseconds.
    pub natural_second_ms: f64,
    /// Milliseconds until the next natural second starts, in `(0, natural_second_ms]`.
    pub delay_to_next_second_ms: f64,
}

impl IntervalReading {
    /// Length of one natural second as a typed quantity.
    pub fn natural_second(&self) -> Seconds {
        Seconds::new(self.natural_second_ms / 1000.0)
    }

    /// Time until the next natural second, for schedulers.
    pub fn delay_to_next_second(&self) -> Duration {
        Duration::from_secs_f64(self.delay_to_next_second_ms / 1000.0)
    }
}

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Length of the interval in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.start.millis_until(&self.end)
    }

    /// Length of the interval as a typed quantity.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use hora_solis::Interval;
    /// use qtty::Seconds;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    /// assert_eq!(Interval::new(start, end).duration(), Seconds::new(3600.0));
    /// ```
    pub fn duration(&self) -> Seconds {
        Seconds::new(self.duration_ms() / 1000.0)
    }

    /// Whether `point` lies in `[start, end)`.
    pub fn contains(&self, point: &T) -> bool {
        *point >= self.start && *point < self.end
    }

    /// Natural hour, minute and second of `point` within this interval.
    ///
    /// The interval always counts as 12 natural hours, whatever its
    /// wall-clock length.  `point` is expected in `[start, end]`; the
    /// returned fields are kept inside their ranges even for the closing
    /// boundary, where floating-point rounding could otherwise produce
    /// hour 12 or second 60.
    pub fn reading(&self, point: &T) -> IntervalReading {
        let total = self.duration_ms();

        let second_ms = total / NATURAL_SECONDS_PER_INTERVAL;
        let minute_ms = 60.0 * second_ms;
        let hour_ms = 3600.0 * second_ms;

        let elapsed = self.start.millis_until(point);

        let hour = (elapsed / hour_ms)
            .floor()
            .clamp(0.0, f64::from(NATURAL_HOURS - 1));
        let whole_hours = hour * hour_ms;

        let minute = ((elapsed - whole_hours) / minute_ms).floor().clamp(0.0, 59.0);
        let whole_minutes = minute * minute_ms;

        let second = ((elapsed - whole_hours - whole_minutes) / second_ms)
            .floor()
            .clamp(0.0, 59.0);

        let counted = whole_hours + whole_minutes + second * second_ms;
        let delay = (second_ms - (elapsed - counted))
            .min(second_ms)
            .max(f64::MIN_POSITIVE);

        IntervalReading {
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
            natural_second_ms: second_ms,
            delay_to_next_second_ms: delay,
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, h, m, s).unwrap()
    }

    fn ten_hour_day() -> Interval<DateTime<Utc>> {
        Interval::new(at(8, 0, 0), at(18, 0, 0))
    }

    #[test]
    fn test_interval_creation() {
        let day = ten_hour_day();
        assert_eq!(day.start, at(8, 0, 0));
        assert_eq!(day.end, at(18, 0, 0));
        assert_eq!(day.duration_ms(), 36_000_000.0);
        assert_eq!(day.duration(), Seconds::new(36_000.0));
    }

    #[test]
    fn test_interval_contains_is_half_open() {
        let day = ten_hour_day();
        assert!(day.contains(&at(8, 0, 0)));
        assert!(day.contains(&at(17, 59, 59)));
        assert!(!day.contains(&at(18, 0, 0)));
        assert!(!day.contains(&at(7, 59, 59)));
    }

    #[test]
    fn test_interval_display() {
        let display = format!("{}", ten_hour_day());
        assert!(display.contains("08:00:00"));
        assert!(display.contains("18:00:00"));
        assert!(display.contains(" to "));
    }

    #[test]
    fn reading_at_start_is_zero() {
        let r = ten_hour_day().reading(&at(8, 0, 0));
        assert_eq!((r.hour, r.minute, r.second), (0, 0, 0));
        assert!((r.delay_to_next_second_ms - r.natural_second_ms).abs() < 1e-9);
    }

    #[test]
    fn reading_at_half_point_of_ten_hour_day() {
        let r = ten_hour_day().reading(&at(13, 0, 0));

        assert!((r.natural_second_ms - 833.333_333).abs() < 1e-3);
        assert_eq!((r.hour, r.minute, r.second), (6, 0, 0));
    }

    #[test]
    fn reading_just_before_end_is_last_second() {
        let day = ten_hour_day();
        let r = day.reading(&(at(18, 0, 0) - TimeDelta::milliseconds(1)));

        assert_eq!((r.hour, r.minute, r.second), (11, 59, 59));
        assert!((r.delay_to_next_second_ms - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reading_at_end_stays_in_range() {
        let r = ten_hour_day().reading(&at(18, 0, 0));

        assert_eq!((r.hour, r.minute, r.second), (11, 59, 59));
        assert!(r.delay_to_next_second_ms > 0.0);
        assert!(r.delay_to_next_second_ms <= r.natural_second_ms);
    }

    #[test]
    fn delay_accumulates_fractional_slack() {
        // 12 h interval: natural second == modern second.
        let half_day = Interval::new(at(6, 0, 0), at(18, 0, 0));
        let r = half_day.reading(&(at(6, 0, 1) + TimeDelta::milliseconds(250)));

        assert_eq!((r.hour, r.minute, r.second), (0, 0, 1));
        assert!((r.natural_second_ms - 1000.0).abs() < 1e-9);
        assert!((r.delay_to_next_second_ms - 750.0).abs() < 1e-6);
        assert_eq!(r.delay_to_next_second(), Duration::from_millis(750));
        assert_eq!(r.natural_second(), Seconds::new(1.0));
    }
}
