// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Locating the sunrise/sunset/next-sunrise triple around an instant.
//!
//! Today's events are queried first.  Before today's sunrise the instant
//! still belongs to yesterday's night, so yesterday's sunrise and sunset are
//! used with today's sunrise closing the bracket; otherwise tomorrow's sunrise
//! closes it.  The search never reaches further than one calendar day.

use crate::bracket::Bracket;
use crate::ephemeris::{EphemerisProvider, SolarEvent};
use crate::error::{HoraError, Result};
use crate::instant::TimeInstant;
use crate::position::Position;
use chrono::{DateTime, TimeZone};

/// Result of resolving the solar events around an instant.
#[derive(Debug, Clone, PartialEq)]
pub enum SolarOutcome<Tz: TimeZone> {
    /// No sunrise/sunset transition on one of the dates involved.
    PolarPhenomenon,
    /// Bracket with `sunrise <= now < next_sunrise`.
    Bracket(Bracket<Tz>),
}

impl<Tz: TimeZone> SolarOutcome<Tz> {
    pub fn is_polar(&self) -> bool {
        matches!(self, SolarOutcome::PolarPhenomenon)
    }
}

/// Wraps an [`EphemerisProvider`] and builds brackets from its answers.
#[derive(Debug, Clone)]
pub struct SolarEventResolver<P> {
    provider: P,
}

/// The event's instant, unless it marks a polar phenomenon for `reference`.
fn timed<Tz: TimeZone>(event: &SolarEvent<Tz>, reference: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    if event.is_polar_marker(reference) {
        None
    } else {
        event.instant().cloned()
    }
}

fn polar<Tz: TimeZone>(reference: &DateTime<Tz>, which: &'static str) -> SolarOutcome<Tz> {
    tracing::debug!(date = %reference.civil_date(), event = which, "polar phenomenon detected");
    SolarOutcome::PolarPhenomenon
}

fn shifted<Tz: TimeZone>(now: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    now.shift_days(days).ok_or_else(|| {
        HoraError::EphemerisUnavailable(format!("{now:?} shifted by {days} days is out of range"))
    })
}

fn malformed<Tz: TimeZone>(
    sunrise: &DateTime<Tz>,
    sunset: &DateTime<Tz>,
    next_sunrise: &DateTime<Tz>,
) -> HoraError {
    HoraError::EphemerisUnavailable(format!(
        "events out of order: sunrise {sunrise:?}, sunset {sunset:?}, next sunrise {next_sunrise:?}"
    ))
}

impl<P> SolarEventResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Finds the bracket containing `now`, or reports a polar phenomenon.
    ///
    /// Provider failures propagate unchanged.  Events that come back out of
    /// order (sunset before sunrise) are reported as
    /// [`HoraError::EphemerisUnavailable`].
    pub fn resolve<Tz>(&self, position: &Position, now: &DateTime<Tz>) -> Result<SolarOutcome<Tz>>
    where
        Tz: TimeZone,
        P: EphemerisProvider<Tz>,
    {
        let today = self.provider.solar_events(position, now)?;
        let (Some(sunrise), Some(sunset)) = (timed(&today.sunrise, now), timed(&today.sunset, now))
        else {
            return Ok(polar(now, "today"));
        };

        if *now < sunrise {
            // Still in yesterday's night.
            let yesterday = shifted(now, -1)?;
            let previous = self.provider.solar_events(position, &yesterday)?;
            let (Some(prev_sunrise), Some(prev_sunset)) = (
                timed(&previous.sunrise, &yesterday),
                timed(&previous.sunset, &yesterday),
            ) else {
                return Ok(polar(&yesterday, "yesterday"));
            };

            tracing::debug!(phase = "yesterday", "bracket closes at today's sunrise");
            Bracket::try_new(prev_sunrise.clone(), prev_sunset.clone(), sunrise.clone())
                .map(SolarOutcome::Bracket)
                .ok_or_else(|| malformed(&prev_sunrise, &prev_sunset, &sunrise))
        } else {
            let tomorrow = shifted(now, 1)?;
            let next = self.provider.solar_events(position, &tomorrow)?;
            let Some(next_sunrise) = timed(&next.sunrise, &tomorrow) else {
                return Ok(polar(&tomorrow, "tomorrow"));
            };

            tracing::debug!(phase = "today", "bracket closes at tomorrow's sunrise");
            Bracket::try_new(sunrise.clone(), sunset.clone(), next_sunrise.clone())
                .map(SolarOutcome::Bracket)
                .ok_or_else(|| malformed(&sunrise, &sunset, &next_sunrise))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::SolarEvents;
    use chrono::{Datelike, FixedOffset, NaiveDate, Timelike};
    use std::cell::RefCell;

    fn zone() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<FixedOffset> {
        zone().with_ymd_and_hms(2024, 6, d, h, m, 0).unwrap()
    }

    fn here() -> Position {
        Position::new(45.0, 10.0).unwrap()
    }

    /// Sunrise 06:00 and sunset 20:00 on every date except those listed.
    fn stub(
        polar_dates: Vec<NaiveDate>,
    ) -> impl Fn(&Position, &DateTime<FixedOffset>) -> Result<SolarEvents<FixedOffset>> {
        move |_, on| {
            let date = on.date_naive();
            if polar_dates.contains(&date) {
                return Ok(SolarEvents {
                    sunrise: SolarEvent::DateOnly(date),
                    sunset: SolarEvent::DateOnly(date),
                });
            }
            let day = date.day();
            Ok(SolarEvents {
                sunrise: SolarEvent::At(at(day, 6, 0)),
                sunset: SolarEvent::At(at(day, 20, 0)),
            })
        }
    }

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn bracket_of(outcome: SolarOutcome<FixedOffset>) -> Bracket<FixedOffset> {
        match outcome {
            SolarOutcome::Bracket(b) => b,
            SolarOutcome::PolarPhenomenon => panic!("unexpected polar outcome"),
        }
    }

    #[test]
    fn daytime_uses_tomorrows_sunrise() {
        let resolver = SolarEventResolver::new(stub(vec![]));
        let b = bracket_of(resolver.resolve(&here(), &at(10, 13, 0)).unwrap());

        assert_eq!(*b.sunrise(), at(10, 6, 0));
        assert_eq!(*b.sunset(), at(10, 20, 0));
        assert_eq!(*b.next_sunrise(), at(11, 6, 0));
    }

    #[test]
    fn evening_uses_tomorrows_sunrise() {
        let resolver = SolarEventResolver::new(stub(vec![]));
        let b = bracket_of(resolver.resolve(&here(), &at(10, 23, 30)).unwrap());

        assert_eq!(*b.sunrise(), at(10, 6, 0));
        assert_eq!(*b.next_sunrise(), at(11, 6, 0));
    }

    #[test]
    fn before_sunrise_uses_yesterday() {
        let resolver = SolarEventResolver::new(stub(vec![]));
        let now = at(10, 3, 0);
        let b = bracket_of(resolver.resolve(&here(), &now).unwrap());

        assert_eq!(*b.sunrise(), at(9, 6, 0));
        assert_eq!(*b.sunset(), at(9, 20, 0));
        assert_eq!(*b.next_sunrise(), at(10, 6, 0));
        assert!(b.contains(&now));
    }

    #[test]
    fn exactly_at_sunrise_starts_a_new_bracket() {
        let resolver = SolarEventResolver::new(stub(vec![]));
        let b = bracket_of(resolver.resolve(&here(), &at(10, 6, 0)).unwrap());
        assert_eq!(*b.sunrise(), at(10, 6, 0));
    }

    #[test]
    fn polar_today() {
        let resolver = SolarEventResolver::new(stub(vec![june(10)]));
        assert!(resolver.resolve(&here(), &at(10, 13, 0)).unwrap().is_polar());
    }

    #[test]
    fn polar_yesterday_only_matters_before_sunrise() {
        let resolver = SolarEventResolver::new(stub(vec![june(9)]));
        assert!(resolver.resolve(&here(), &at(10, 3, 0)).unwrap().is_polar());
        assert!(!resolver.resolve(&here(), &at(10, 13, 0)).unwrap().is_polar());
    }

    #[test]
    fn polar_tomorrow_only_matters_after_sunrise() {
        let resolver = SolarEventResolver::new(stub(vec![june(11)]));
        assert!(resolver.resolve(&here(), &at(10, 13, 0)).unwrap().is_polar());
        assert!(!resolver.resolve(&here(), &at(10, 3, 0)).unwrap().is_polar());
    }

    #[test]
    fn date_only_sunrise_is_polar_whatever_the_sunset() {
        let resolver = SolarEventResolver::new(
            |_: &Position, on: &DateTime<FixedOffset>| -> Result<SolarEvents<FixedOffset>> {
                Ok(SolarEvents {
                    sunrise: SolarEvent::DateOnly(on.date_naive()),
                    sunset: SolarEvent::At(at(on.day(), 20, 0)),
                })
            },
        );
        assert!(resolver.resolve(&here(), &at(10, 13, 0)).unwrap().is_polar());
    }

    #[test]
    fn event_on_another_date_is_polar() {
        // Sunset reported just after midnight of the following day.
        let resolver = SolarEventResolver::new(
            |_: &Position, on: &DateTime<FixedOffset>| -> Result<SolarEvents<FixedOffset>> {
                Ok(SolarEvents {
                    sunrise: SolarEvent::At(at(on.day(), 4, 0)),
                    sunset: SolarEvent::At(at(on.day() + 1, 0, 10)),
                })
            },
        );
        assert!(resolver.resolve(&here(), &at(10, 13, 0)).unwrap().is_polar());
    }

    #[test]
    fn queries_at_most_one_day_each_way() {
        let queried = RefCell::new(Vec::new());
        let inner = stub(vec![]);
        let resolver = SolarEventResolver::new(
            |p: &Position, on: &DateTime<FixedOffset>| -> Result<SolarEvents<FixedOffset>> {
                queried.borrow_mut().push((on.day(), on.hour()));
                inner(p, on)
            },
        );

        resolver.resolve(&here(), &at(10, 3, 0)).unwrap();
        assert_eq!(*queried.borrow(), vec![(10, 3), (9, 3)]);

        queried.borrow_mut().clear();
        resolver.resolve(&here(), &at(10, 21, 0)).unwrap();
        assert_eq!(*queried.borrow(), vec![(10, 21), (11, 21)]);
    }

    #[test]
    fn provider_errors_propagate() {
        let resolver = SolarEventResolver::new(
            |_: &Position, _: &DateTime<FixedOffset>| -> Result<SolarEvents<FixedOffset>> {
                Err(HoraError::EphemerisUnavailable("offline".into()))
            },
        );
        assert_eq!(
            resolver.resolve(&here(), &at(10, 13, 0)),
            Err(HoraError::EphemerisUnavailable("offline".into()))
        );
    }

    #[test]
    fn out_of_order_events_are_malformed() {
        let resolver = SolarEventResolver::new(
            |_: &Position, on: &DateTime<FixedOffset>| -> Result<SolarEvents<FixedOffset>> {
                Ok(SolarEvents {
                    sunrise: SolarEvent::At(at(on.day(), 20, 0)),
                    sunset: SolarEvent::At(at(on.day(), 6, 0)),
                })
            },
        );
        assert!(matches!(
            resolver.resolve(&here(), &at(10, 21, 0)),
            Err(HoraError::EphemerisUnavailable(_))
        ));
    }
}
