// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! One natural day+night cycle: sunrise, sunset and the next sunrise.

use crate::error::{HoraError, Result};
use crate::interval::{Interval, IntervalReading};
use chrono::{DateTime, TimeZone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Natural hours in one night watch.
pub const HOURS_PER_VIGILIA: u32 = 3;

/// Night watch (`0..=3`) containing night hour `hour`.
#[inline]
pub fn vigilia_of(hour: u32) -> u32 {
    hour / HOURS_PER_VIGILIA
}

/// The triple framing the natural day that contains a given instant.
///
/// Invariant: `sunrise < sunset < next_sunrise`.  The bracket covers the
/// half-open span `[sunrise, next_sunrise)`: daytime is `[sunrise, sunset)`
/// and night is `[sunset, next_sunrise)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket<Tz: TimeZone> {
    sunrise: DateTime<Tz>,
    sunset: DateTime<Tz>,
    next_sunrise: DateTime<Tz>,
}

/// Natural time of an arbitrary instant within a [`Bracket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundedReading {
    pub is_day: bool,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Night watch, `None` during the day.
    pub vigilia: Option<u32>,
}

impl<Tz: TimeZone> Bracket<Tz> {
    /// Builds a bracket, or `None` unless `sunrise < sunset < next_sunrise`.
    pub fn try_new(
        sunrise: DateTime<Tz>,
        sunset: DateTime<Tz>,
        next_sunrise: DateTime<Tz>,
    ) -> Option<Self> {
        if sunrise < sunset && sunset < next_sunrise {
            Some(Self {
                sunrise,
                sunset,
                next_sunrise,
            })
        } else {
            None
        }
    }

    /// Builds a bracket from instants already known to be ordered.
    ///
    /// # Panics
    ///
    /// Panics unless `sunrise < sunset < next_sunrise`.
    pub fn new(sunrise: DateTime<Tz>, sunset: DateTime<Tz>, next_sunrise: DateTime<Tz>) -> Self {
        assert!(
            sunrise < sunset && sunset < next_sunrise,
            "bracket requires sunrise < sunset < next sunrise"
        );
        Self {
            sunrise,
            sunset,
            next_sunrise,
        }
    }

    pub fn sunrise(&self) -> &DateTime<Tz> {
        &self.sunrise
    }

    pub fn sunset(&self) -> &DateTime<Tz> {
        &self.sunset
    }

    pub fn next_sunrise(&self) -> &DateTime<Tz> {
        &self.next_sunrise
    }

    /// Daytime `[sunrise, sunset)`.
    pub fn day(&self) -> Interval<DateTime<Tz>> {
        Interval::new(self.sunrise.clone(), self.sunset.clone())
    }

    /// Night `[sunset, next_sunrise)`.
    pub fn night(&self) -> Interval<DateTime<Tz>> {
        Interval::new(self.sunset.clone(), self.next_sunrise.clone())
    }

    pub fn day_duration_ms(&self) -> f64 {
        self.day().duration_ms()
    }

    pub fn night_duration_ms(&self) -> f64 {
        self.night().duration_ms()
    }

    /// Whether `point` lies in `[sunrise, next_sunrise)`.
    pub fn contains(&self, point: &DateTime<Tz>) -> bool {
        *point >= self.sunrise && *point < self.next_sunrise
    }

    /// Day/night phase of `point` and its reading in that phase's interval.
    ///
    /// No range check: callers guarantee `point` is inside the bracket.
    pub(crate) fn locate(&self, point: &DateTime<Tz>) -> (bool, IntervalReading) {
        let is_day = *point < self.sunset;
        let interval = if is_day { self.day() } else { self.night() };
        (is_day, interval.reading(point))
    }

    /// Natural time of `point`, evaluated against this bracket.
    ///
    /// Fails with [`HoraError::OutOfRangeInstant`] if `point < sunrise` or
    /// `point >= next_sunrise`.
    pub fn time_within(&self, point: &DateTime<Tz>) -> Result<BoundedReading> {
        if !self.contains(point) {
            return Err(HoraError::out_of_range(
                format!("{point:?}"),
                format!("{:?}", self.sunrise),
                format!("{:?}", self.next_sunrise),
            ));
        }
        let (is_day, reading) = self.locate(point);
        Ok(BoundedReading {
            is_day,
            hour: reading.hour,
            minute: reading.minute,
            second: reading.second,
            vigilia: (!is_day).then(|| vigilia_of(reading.hour)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, h, m, 0).unwrap()
    }

    /// Day 06:00–18:00, night 18:00–06:00: both natural hours last one hour.
    fn equinox() -> Bracket<Utc> {
        Bracket::new(at(1, 6, 0), at(1, 18, 0), at(2, 6, 0))
    }

    #[test]
    fn vigilia_groups_three_hours() {
        assert_eq!(vigilia_of(0), 0);
        assert_eq!(vigilia_of(2), 0);
        assert_eq!(vigilia_of(3), 1);
        assert_eq!(vigilia_of(7), 2);
        assert_eq!(vigilia_of(11), 3);
    }

    #[test]
    fn try_new_checks_ordering() {
        assert!(Bracket::try_new(at(1, 6, 0), at(1, 18, 0), at(2, 6, 0)).is_some());
        assert!(Bracket::try_new(at(1, 18, 0), at(1, 6, 0), at(2, 6, 0)).is_none());
        assert!(Bracket::try_new(at(1, 6, 0), at(1, 6, 0), at(2, 6, 0)).is_none());
        assert!(Bracket::try_new(at(1, 6, 0), at(2, 7, 0), at(2, 6, 0)).is_none());
    }

    #[test]
    #[should_panic(expected = "sunrise < sunset")]
    fn new_panics_on_disorder() {
        let _ = Bracket::new(at(1, 18, 0), at(1, 6, 0), at(2, 6, 0));
    }

    #[test]
    fn durations() {
        let b = Bracket::new(at(1, 5, 0), at(1, 21, 0), at(2, 5, 0));
        assert_eq!(b.day_duration_ms(), 16.0 * 3_600_000.0);
        assert_eq!(b.night_duration_ms(), 8.0 * 3_600_000.0);
    }

    #[test]
    fn time_within_day_and_night() {
        let b = equinox();

        let noon = b.time_within(&at(1, 12, 30)).unwrap();
        assert_eq!(
            noon,
            BoundedReading {
                is_day: true,
                hour: 6,
                minute: 30,
                second: 0,
                vigilia: None
            }
        );

        let late = b.time_within(&at(2, 1, 15)).unwrap();
        assert!(!late.is_day);
        assert_eq!((late.hour, late.minute), (7, 15));
        assert_eq!(late.vigilia, Some(2));
    }

    #[test]
    fn time_within_sunset_starts_the_night() {
        let r = equinox().time_within(&at(1, 18, 0)).unwrap();
        assert!(!r.is_day);
        assert_eq!((r.hour, r.minute, r.second), (0, 0, 0));
        assert_eq!(r.vigilia, Some(0));
    }

    #[test]
    fn time_within_rejects_points_outside() {
        let b = equinox();

        assert!(b.time_within(&at(1, 6, 0)).is_ok());
        assert!(b
            .time_within(&(at(2, 6, 0) - TimeDelta::milliseconds(1)))
            .is_ok());
        assert!(matches!(
            b.time_within(&at(2, 6, 0)),
            Err(HoraError::OutOfRangeInstant { .. })
        ));
        assert!(matches!(
            b.time_within(&at(1, 5, 59)),
            Err(HoraError::OutOfRangeInstant { .. })
        ));
    }
}
