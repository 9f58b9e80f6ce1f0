// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The natural-day engine.
//!
//! [`NaturalDayEngine::compute_snapshot`] turns a position and an instant into
//! an immutable [`NaturalDaySnapshot`]:
//!
//! ```text
//! (position, now) → SolarEventResolver → Bracket | Polar
//!                                        │
//!                                        ├─ now < sunset → day interval   ┐
//!                                        └─ otherwise    → night interval ┴→ IntervalReading
//! ```
//!
//! The engine keeps no state between calls: two snapshots for the same
//! inputs are identical, and the caller decides when to ask again using
//! [`NaturalDaySnapshot::poll_delay`].

use crate::bracket::{vigilia_of, BoundedReading, Bracket};
use crate::ephemeris::EphemerisProvider;
use crate::error::{HoraError, Result};
use crate::position::Position;
use crate::resolver::{SolarEventResolver, SolarOutcome};
use crate::speed::ClockSpeed;
use chrono::{DateTime, TimeDelta, TimeZone};
use std::time::Duration;

/// Re-poll interval while there is no sunrise or sunset.
pub const POLAR_POLL_DELAY_MS: f64 = 5_000.0;

/// Default bedtime: 8 hours 20 minutes before the next sunrise.
pub const DEFAULT_BEDTIME_BEFORE_SUNRISE: Duration = Duration::from_secs(8 * 3600 + 20 * 60);

/// Engine tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Delay returned with polar snapshots, in milliseconds.
    pub polar_poll_delay_ms: f64,
    /// How long before the next sunrise bedtime falls.
    pub bedtime_before_sunrise: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            polar_poll_delay_ms: POLAR_POLL_DELAY_MS,
            bedtime_before_sunrise: DEFAULT_BEDTIME_BEFORE_SUNRISE,
        }
    }
}

/// Where an instant falls in its natural day.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalDay<Tz: TimeZone> {
    pub bracket: Bracket<Tz>,
    pub is_day: bool,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Length of a natural second of the current day or night, in milliseconds.
    pub natural_second_ms: f64,
    /// Milliseconds until the next natural second.
    pub poll_delay_ms: f64,
    pub day_duration_ms: f64,
    pub night_duration_ms: f64,
    /// Night watch `0..=3`, `None` during the day.
    pub vigilia: Option<u32>,
}

/// Output of one engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum NaturalDaySnapshot<Tz: TimeZone> {
    /// No sunrise/sunset transition: nothing to track until `poll_delay_ms`.
    Polar { poll_delay_ms: f64 },
    Tracking(NaturalDay<Tz>),
}

impl<Tz: TimeZone> NaturalDaySnapshot<Tz> {
    pub fn is_polar(&self) -> bool {
        matches!(self, NaturalDaySnapshot::Polar { .. })
    }

    pub fn natural_day(&self) -> Option<&NaturalDay<Tz>> {
        match self {
            NaturalDaySnapshot::Tracking(day) => Some(day),
            NaturalDaySnapshot::Polar { .. } => None,
        }
    }

    /// When the next snapshot is due, in milliseconds.
    pub fn poll_delay_ms(&self) -> f64 {
        match self {
            NaturalDaySnapshot::Polar { poll_delay_ms } => *poll_delay_ms,
            NaturalDaySnapshot::Tracking(day) => day.poll_delay_ms,
        }
    }

    /// When the next snapshot is due.
    pub fn poll_delay(&self) -> Duration {
        Duration::from_secs_f64(self.poll_delay_ms().max(0.0) / 1000.0)
    }
}

impl<Tz: TimeZone> NaturalDay<Tz> {
    pub fn sunrise(&self) -> &DateTime<Tz> {
        self.bracket.sunrise()
    }

    pub fn sunset(&self) -> &DateTime<Tz> {
        self.bracket.sunset()
    }

    pub fn next_sunrise(&self) -> &DateTime<Tz> {
        self.bracket.next_sunrise()
    }

    /// Natural time of another instant of the same day/night span.
    ///
    /// Fails with [`HoraError::OutOfRangeInstant`] outside
    /// `[sunrise, next_sunrise)`.
    pub fn time_within(&self, point: &DateTime<Tz>) -> Result<BoundedReading> {
        self.bracket.time_within(point)
    }

    /// Speed of this span's natural second against a modern one.
    pub fn clock_speed(&self) -> ClockSpeed {
        ClockSpeed::describe(self.natural_second_ms)
    }

    /// Fraction of the full cycle that is daylight, in `[0, 1]`.
    pub fn day_share(&self) -> f64 {
        let total = self.day_duration_ms + self.night_duration_ms;
        (self.day_duration_ms / total).clamp(0.0, 1.0)
    }

    /// Recommended bedtime: `before_sunrise` ahead of the next sunrise.
    ///
    /// See [`EngineConfig::bedtime_before_sunrise`] for the usual value.
    pub fn bedtime(&self, before_sunrise: Duration) -> Result<DateTime<Tz>> {
        let span = TimeDelta::from_std(before_sunrise)
            .map_err(|e| HoraError::Config(format!("bedtime offset {before_sunrise:?}: {e}")))?;
        self.next_sunrise()
            .clone()
            .checked_sub_signed(span)
            .ok_or_else(|| {
                HoraError::Config(format!("bedtime offset {before_sunrise:?} out of range"))
            })
    }

    /// Bedtime expressed in natural time.
    ///
    /// Fails with [`HoraError::OutOfRangeInstant`] when the bedtime offset
    /// reaches back beyond this span's sunrise.
    pub fn natural_bedtime(&self, before_sunrise: Duration) -> Result<BoundedReading> {
        self.time_within(&self.bedtime(before_sunrise)?)
    }
}

/// Stateless orchestrator from `(position, now)` to a snapshot.
#[derive(Debug, Clone)]
pub struct NaturalDayEngine<P> {
    resolver: SolarEventResolver<P>,
    config: EngineConfig,
}

impl<P> NaturalDayEngine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    pub fn with_config(provider: P, config: EngineConfig) -> Self {
        Self {
            resolver: SolarEventResolver::new(provider),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &SolarEventResolver<P> {
        &self.resolver
    }

    /// Computes where `now` falls in the natural day at `position`.
    ///
    /// Ephemeris failures propagate unchanged.
    pub fn compute_snapshot<Tz>(
        &self,
        position: &Position,
        now: &DateTime<Tz>,
    ) -> Result<NaturalDaySnapshot<Tz>>
    where
        Tz: TimeZone,
        P: EphemerisProvider<Tz>,
    {
        let bracket = match self.resolver.resolve(position, now)? {
            SolarOutcome::PolarPhenomenon => {
                return Ok(NaturalDaySnapshot::Polar {
                    poll_delay_ms: self.config.polar_poll_delay_ms,
                })
            }
            SolarOutcome::Bracket(bracket) => bracket,
        };

        let (is_day, reading) = bracket.locate(now);
        let vigilia = (!is_day).then(|| vigilia_of(reading.hour));

        tracing::trace!(
            is_day,
            hour = reading.hour,
            minute = reading.minute,
            second = reading.second,
            natural_second_ms = reading.natural_second_ms,
            "natural time computed"
        );

        Ok(NaturalDaySnapshot::Tracking(NaturalDay {
            day_duration_ms: bracket.day_duration_ms(),
            night_duration_ms: bracket.night_duration_ms(),
            bracket,
            is_day,
            hour: reading.hour,
            minute: reading.minute,
            second: reading.second,
            natural_second_ms: reading.natural_second_ms,
            poll_delay_ms: reading.delay_to_next_second_ms,
            vigilia,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{SolarEvent, SolarEvents};
    use crate::speed::Pace;
    use chrono::{Datelike, Utc};

    fn at(d: u32, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, h, m, s).unwrap()
    }

    fn here() -> Position {
        Position::new(41.9, 12.5).unwrap()
    }

    /// Sunrise 08:00, sunset 18:00, every day.
    fn ten_hour_days(_: &Position, on: &DateTime<Utc>) -> Result<SolarEvents<Utc>> {
        Ok(SolarEvents {
            sunrise: SolarEvent::At(at(on.day(), 8, 0, 0)),
            sunset: SolarEvent::At(at(on.day(), 18, 0, 0)),
        })
    }

    fn always_polar(_: &Position, on: &DateTime<Utc>) -> Result<SolarEvents<Utc>> {
        Ok(SolarEvents {
            sunrise: SolarEvent::DateOnly(on.date_naive()),
            sunset: SolarEvent::DateOnly(on.date_naive()),
        })
    }

    fn tracking(snapshot: NaturalDaySnapshot<Utc>) -> NaturalDay<Utc> {
        match snapshot {
            NaturalDaySnapshot::Tracking(day) => day,
            NaturalDaySnapshot::Polar { .. } => panic!("unexpected polar snapshot"),
        }
    }

    #[test]
    fn polar_snapshot_polls_every_five_seconds() {
        let engine = NaturalDayEngine::new(always_polar);
        let snapshot = engine.compute_snapshot(&here(), &at(10, 12, 0, 0)).unwrap();

        assert!(snapshot.is_polar());
        assert!(snapshot.natural_day().is_none());
        assert_eq!(snapshot.poll_delay_ms(), 5000.0);
        assert_eq!(snapshot.poll_delay(), Duration::from_secs(5));
    }

    #[test]
    fn daytime_reading_at_half_point() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let day = tracking(engine.compute_snapshot(&here(), &at(10, 13, 0, 0)).unwrap());

        assert!(day.is_day);
        assert_eq!((day.hour, day.minute, day.second), (6, 0, 0));
        assert_eq!(day.vigilia, None);
        assert!((day.natural_second_ms - 833.333_333).abs() < 1e-3);
        assert_eq!(day.day_duration_ms, 36_000_000.0);
        assert_eq!(day.night_duration_ms, 50_400_000.0);
        assert_eq!(*day.sunrise(), at(10, 8, 0, 0));
        assert_eq!(*day.sunset(), at(10, 18, 0, 0));
        assert_eq!(*day.next_sunrise(), at(11, 8, 0, 0));
    }

    #[test]
    fn sunrise_is_the_zero_hour() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let day = tracking(engine.compute_snapshot(&here(), &at(10, 8, 0, 0)).unwrap());

        assert!(day.is_day);
        assert_eq!((day.hour, day.minute, day.second), (0, 0, 0));
    }

    #[test]
    fn night_reading_and_vigilia() {
        // Night lasts 14 h, so a natural hour is 70 minutes.
        // 04:10 is 10 h 10 min = 610 min after sunset: 8 natural hours + 50 min.
        let engine = NaturalDayEngine::new(ten_hour_days);
        let night = tracking(engine.compute_snapshot(&here(), &at(11, 4, 10, 0)).unwrap());

        assert!(!night.is_day);
        assert_eq!(night.hour, 8);
        assert_eq!(night.vigilia, Some(2));
        assert_eq!(*night.sunset(), at(10, 18, 0, 0));
        assert!((night.natural_second_ms - 50_400_000.0 / 43_200.0).abs() < 1e-9);
    }

    #[test]
    fn last_instant_of_the_night_is_the_last_second() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let now = at(11, 8, 0, 0) - TimeDelta::milliseconds(1);
        let night = tracking(engine.compute_snapshot(&here(), &now).unwrap());

        assert!(!night.is_day);
        assert_eq!((night.hour, night.minute, night.second), (11, 59, 59));
        assert_eq!(night.vigilia, Some(3));
    }

    #[test]
    fn poll_delay_stays_within_one_natural_second() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let snapshot = engine.compute_snapshot(&here(), &at(10, 9, 17, 3)).unwrap();
        let day = snapshot.natural_day().unwrap();

        assert!(day.poll_delay_ms > 0.0);
        assert!(day.poll_delay_ms <= day.natural_second_ms);
        assert_eq!(snapshot.poll_delay_ms(), day.poll_delay_ms);
    }

    #[test]
    fn bedtime_is_eight_hours_twenty_before_sunrise() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let day = tracking(engine.compute_snapshot(&here(), &at(10, 13, 0, 0)).unwrap());

        let offset = engine.config().bedtime_before_sunrise;
        assert_eq!(day.bedtime(offset).unwrap(), at(10, 23, 40, 0));

        // 23:40 is 5 h 40 min into a 14 h night: 340 / 70 = 4 natural hours + 60 min.
        let natural = day.natural_bedtime(offset).unwrap();
        assert!(!natural.is_day);
        assert_eq!(natural.hour, 4);
        assert_eq!(natural.vigilia, Some(1));
    }

    #[test]
    fn bedtime_before_previous_sunrise_is_out_of_range() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let day = tracking(engine.compute_snapshot(&here(), &at(10, 13, 0, 0)).unwrap());

        assert!(matches!(
            day.natural_bedtime(Duration::from_secs(30 * 3600)),
            Err(HoraError::OutOfRangeInstant { .. })
        ));
    }

    #[test]
    fn clock_speed_and_day_share() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let day = tracking(engine.compute_snapshot(&here(), &at(10, 13, 0, 0)).unwrap());

        let speed = day.clock_speed();
        assert_eq!(speed.pace, Pace::Faster);
        assert_eq!(speed.percent, 17);
        assert_eq!(speed.fraction.name, "sextans");
        assert!((day.day_share() - 10.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn snapshots_are_reproducible() {
        let engine = NaturalDayEngine::new(ten_hour_days);
        let now = at(10, 21, 12, 44);

        let a = engine.compute_snapshot(&here(), &now).unwrap();
        let b = engine.compute_snapshot(&here(), &now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn provider_failure_propagates() {
        let engine = NaturalDayEngine::new(
            |_: &Position, _: &DateTime<Utc>| -> Result<SolarEvents<Utc>> {
                Err(HoraError::EphemerisUnavailable("no data".into()))
            },
        );
        assert_eq!(
            engine.compute_snapshot(&here(), &at(10, 12, 0, 0)),
            Err(HoraError::EphemerisUnavailable("no data".into()))
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn base() -> DateTime<Utc> {
            at(10, 0, 0, 0)
        }

        /// Stub whose daylight length is `day_mins` minutes, centred on 13:00.
        fn engine_with_day(
            day_mins: i64,
        ) -> NaturalDayEngine<impl Fn(&Position, &DateTime<Utc>) -> Result<SolarEvents<Utc>>> {
            NaturalDayEngine::new(
                move |_: &Position, on: &DateTime<Utc>| -> Result<SolarEvents<Utc>> {
                    let noon = at(on.day(), 13, 0, 0);
                    Ok(SolarEvents {
                        sunrise: SolarEvent::At(noon - TimeDelta::minutes(day_mins / 2)),
                        sunset: SolarEvent::At(noon + TimeDelta::minutes(day_mins / 2)),
                    })
                },
            )
        }

        proptest! {
            #[test]
            fn readings_stay_in_range(day_mins in 120i64..1300, offset_s in 0i64..86_400) {
                let engine = engine_with_day(day_mins);
                let now = base() + TimeDelta::seconds(offset_s);
                let day = tracking(engine.compute_snapshot(&here(), &now).unwrap());

                prop_assert!(day.hour < 12);
                prop_assert!(day.minute < 60);
                prop_assert!(day.second < 60);
                prop_assert!(day.poll_delay_ms > 0.0);
                prop_assert!(day.poll_delay_ms <= day.natural_second_ms);
                prop_assert!(day.bracket.contains(&now));
                prop_assert_eq!(day.vigilia.is_some(), !day.is_day);
                if let Some(watch) = day.vigilia {
                    prop_assert!(watch < 4);
                }
            }

            #[test]
            fn time_only_moves_forward_within_a_phase(
                day_mins in 120i64..1300,
                offset_s in 0i64..86_000,
                step_s in 1i64..400,
            ) {
                let engine = engine_with_day(day_mins);
                let earlier = base() + TimeDelta::seconds(offset_s);
                let later = earlier + TimeDelta::seconds(step_s);
                let a = tracking(engine.compute_snapshot(&here(), &earlier).unwrap());
                let b = tracking(engine.compute_snapshot(&here(), &later).unwrap());

                if a.bracket == b.bracket && a.is_day == b.is_day {
                    prop_assert!((a.hour, a.minute, a.second) <= (b.hour, b.minute, b.second));
                    prop_assert!(a.vigilia <= b.vigilia);
                }
            }
        }
    }
}
