// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Natural (temporal-hour) time.
//!
//! The daylight between sunrise and sunset is always twelve natural hours,
//! and so is the night between sunset and the next sunrise; the night is
//! further grouped into four *vigiliae* of three hours each.  Natural hours,
//! minutes and seconds therefore stretch and shrink with the seasons.
//!
//! # Core types
//!
//! - [`NaturalDayEngine`]: turns `(position, now)` into a [`NaturalDaySnapshot`].
//! - [`NaturalDay`]: hour/minute/second, day or night, watch, and the
//!   [`Bracket`] (sunrise, sunset, next sunrise) they were measured against.
//! - [`Interval<T>`]: a half-open span over any [`TimeInstant`], divided
//!   into 43 200 natural seconds by [`Interval::reading`].
//! - [`SolarEventResolver`]: finds the bracket around an instant, or reports
//!   a polar phenomenon.
//! - [`EphemerisProvider`]: where sunrise and sunset come from;
//!   [`SunriseEquation`] is the built-in offline provider.
//! - [`ClockSpeed`]: how a natural second compares with a modern one, as a
//!   percentage and as a Roman fraction from [`FRACTIONS`].
//! - [`run_clock`]: the ticking loop, stopped through a [`CancelToken`].
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use hora_solis::{NaturalDayEngine, Position, SunriseEquation};
//!
//! let rome = Position::new(41.9, 12.5).unwrap();
//! let zone = FixedOffset::east_opt(2 * 3600).unwrap();
//! let now = zone.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap();
//!
//! let engine = NaturalDayEngine::new(SunriseEquation::default());
//! let snapshot = engine.compute_snapshot(&rome, &now).unwrap();
//! let day = snapshot.natural_day().unwrap();
//!
//! assert!(day.is_day);
//! assert_eq!(day.vigilia, None);
//! assert!(day.natural_second_ms > 1000.0); // summer: slow daylight seconds
//! ```

mod bracket;
mod config;
mod engine;
mod ephemeris;
mod error;
mod fraction;
pub(crate) mod instant;
mod interval;
pub mod numerals;
mod position;
mod resolver;
mod scheduler;
mod speed;
mod zones;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use bracket::{vigilia_of, BoundedReading, Bracket, HOURS_PER_VIGILIA};
pub use config::ClockConfig;
pub use engine::{
    EngineConfig, NaturalDay, NaturalDayEngine, NaturalDaySnapshot,
    DEFAULT_BEDTIME_BEFORE_SUNRISE, POLAR_POLL_DELAY_MS,
};
pub use ephemeris::{
    equation_of_time, solar_declination, EphemerisProvider, SolarEvent, SolarEvents,
    SunriseEquation, SUNRISE_ALTITUDE_DEG,
};
pub use error::{HoraError, Result};
pub use fraction::{nearest as nearest_fraction, FractionEntry, FRACTIONS};
pub use instant::TimeInstant;
pub use interval::{Interval, IntervalReading, NATURAL_HOURS, NATURAL_SECONDS_PER_INTERVAL};
pub use position::{CachedPosition, FixedPosition, Position, PositionSource, ZoneHint};
pub use resolver::{SolarEventResolver, SolarOutcome};
pub use scheduler::{run_clock, CancelToken};
pub use speed::{ClockSpeed, Pace, MODERN_SECOND};
pub use zones::zone_centre;
