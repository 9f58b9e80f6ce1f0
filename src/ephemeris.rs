// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise/sunset provider interface.
//!
//! The engine treats the ephemeris as an opaque function of
//! `(position, calendar date)`.  A provider signals a day without a
//! sunrise or sunset (polar day or night) by returning a date-only event,
//! or an event whose calendar date differs from the queried one.
//!
//! [`SunriseEquation`] is a self-contained provider based on the classic
//! sunrise equation with a declination/equation-of-time approximation.  It
//! is accurate to a few minutes at mid latitudes, which is ample for a clock
//! whose seconds stretch and shrink with the seasons.

use crate::error::{HoraError, Result};
use crate::instant::TimeInstant;
use crate::position::Position;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use std::cmp::Ordering;

/// A sunrise or sunset as reported by a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum SolarEvent<Tz: TimeZone> {
    /// The event happens at this instant.
    At(DateTime<Tz>),
    /// The event does not happen on this date.
    DateOnly(NaiveDate),
}

impl<Tz: TimeZone> SolarEvent<Tz> {
    /// Whether this event marks a polar phenomenon relative to `reference`.
    ///
    /// A date-only event always does; a timed event does when it falls on a
    /// different calendar date than `reference`.
    pub fn is_polar_marker(&self, reference: &DateTime<Tz>) -> bool {
        match self {
            SolarEvent::DateOnly(_) => true,
            SolarEvent::At(at) => at.civil_date() != reference.civil_date(),
        }
    }

    pub fn instant(&self) -> Option<&DateTime<Tz>> {
        match self {
            SolarEvent::At(at) => Some(at),
            SolarEvent::DateOnly(_) => None,
        }
    }
}

/// Sunrise and sunset for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvents<Tz: TimeZone> {
    pub sunrise: SolarEvent<Tz>,
    pub sunset: SolarEvent<Tz>,
}

/// Source of sunrise/sunset instants.
///
/// `on` selects the calendar date (in its own zone); the returned instants
/// carry the same zone.  Failures are reported as
/// [`HoraError::EphemerisUnavailable`](crate::HoraError::EphemerisUnavailable).
pub trait EphemerisProvider<Tz: TimeZone> {
    fn solar_events(&self, position: &Position, on: &DateTime<Tz>) -> Result<SolarEvents<Tz>>;
}

impl<Tz, F> EphemerisProvider<Tz> for F
where
    Tz: TimeZone,
    F: Fn(&Position, &DateTime<Tz>) -> Result<SolarEvents<Tz>>,
{
    fn solar_events(&self, position: &Position, on: &DateTime<Tz>) -> Result<SolarEvents<Tz>> {
        self(position, on)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Built-in provider
// ═══════════════════════════════════════════════════════════════════════════

/// Apparent altitude of the solar centre at rise/set: refraction (34′)
/// plus the solar semi-diameter (16′).
pub const SUNRISE_ALTITUDE_DEG: f64 = -0.833;

const EARTH_AXIAL_TILT: f64 = 23.45;
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Sunrise-equation provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseEquation {
    /// Altitude of the solar centre that counts as rise/set, in degrees.
    pub altitude_deg: f64,
}

impl Default for SunriseEquation {
    fn default() -> Self {
        Self {
            altitude_deg: SUNRISE_ALTITUDE_DEG,
        }
    }
}

/// Solar declination in degrees for day-of-year `n`.
pub fn solar_declination(n: u32) -> f64 {
    EARTH_AXIAL_TILT * (360.0 * (284.0 + n as f64) / 365.0).to_radians().sin()
}

/// Equation of time in minutes for day-of-year `n`.
pub fn equation_of_time(n: u32) -> f64 {
    let b = ((n as f64 - 1.0) * (360.0 / 365.0)).to_radians();
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

impl SunriseEquation {
    /// Half-day hour angle in degrees, or `None` when the sun stays above or
    /// below the rise/set altitude all day.
    pub fn hour_angle(&self, latitude: f64, declination: f64) -> Option<f64> {
        let lat = latitude.to_radians();
        let dec = declination.to_radians();
        let cos_h = (self.altitude_deg.to_radians().sin() - lat.sin() * dec.sin())
            / (lat.cos() * dec.cos());
        if (-1.0..=1.0).contains(&cos_h) {
            Some(cos_h.acos().to_degrees())
        } else {
            None
        }
    }
}

fn utc_minutes(date: NaiveDate, minutes: f64) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight + TimeDelta::milliseconds((minutes * 60_000.0).round() as i64)
}

/// Solar noon of the UTC date `date`, in minutes after UTC midnight.
fn solar_noon_minutes(date: NaiveDate, longitude: f64) -> f64 {
    720.0 - MINUTES_PER_DEGREE * longitude - equation_of_time(date.ordinal())
}

/// The UTC date whose solar noon falls on `local` in `zone`.
///
/// Zones far from their meridian (UTC+13, UTC+14) put the solar noon of the
/// same-numbered UTC date on the next local day.
fn noon_date<Tz: TimeZone>(zone: &Tz, local: NaiveDate, longitude: f64) -> Result<NaiveDate> {
    let mut date = local;
    for _ in 0..2 {
        let noon = utc_minutes(date, solar_noon_minutes(date, longitude)).with_timezone(zone);
        let shifted = match noon.civil_date().cmp(&local) {
            Ordering::Equal => return Ok(date),
            Ordering::Greater => date.pred_opt(),
            Ordering::Less => date.succ_opt(),
        };
        date = shifted.ok_or_else(|| {
            HoraError::EphemerisUnavailable(format!("no solar noon near {local}"))
        })?;
    }
    Ok(date)
}

impl<Tz: TimeZone> EphemerisProvider<Tz> for SunriseEquation {
    fn solar_events(&self, position: &Position, on: &DateTime<Tz>) -> Result<SolarEvents<Tz>> {
        let local = on.civil_date();
        let zone = on.timezone();
        let date = noon_date(&zone, local, position.longitude)?;
        let declination = solar_declination(date.ordinal());

        let Some(half_day) = self.hour_angle(position.latitude, declination) else {
            return Ok(SolarEvents {
                sunrise: SolarEvent::DateOnly(local),
                sunset: SolarEvent::DateOnly(local),
            });
        };

        let noon = solar_noon_minutes(date, position.longitude);
        let sunrise = utc_minutes(date, noon - MINUTES_PER_DEGREE * half_day).with_timezone(&zone);
        let sunset = utc_minutes(date, noon + MINUTES_PER_DEGREE * half_day).with_timezone(&zone);

        Ok(SolarEvents {
            sunrise: SolarEvent::At(sunrise),
            sunset: SolarEvent::At(sunset),
        })
    }
}
