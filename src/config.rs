// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock configuration.
//!
//! Everything is read from environment variables; every variable is optional.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `HORA_LATITUDE` | Fixed latitude in degrees | unset |
//! | `HORA_LONGITUDE` | Fixed longitude in degrees | unset |
//! | `HORA_POSITION_MAX_AGE_SECS` | How long a cached position stays fresh | `86400` |
//! | `HORA_POLAR_POLL_MS` | Re-poll delay during polar phenomena | `5000` |
//! | `HORA_BEDTIME_BEFORE_SUNRISE_MINS` | Bedtime offset before next sunrise | `500` |
//!
//! Latitude and longitude must be given together.

use crate::engine::EngineConfig;
use crate::error::{HoraError, Result};
use crate::position::Position;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::Deserialize;

const DEFAULT_POSITION_MAX_AGE_SECS: u64 = 86_400;
const DEFAULT_POLAR_POLL_MS: u64 = 5_000;
const DEFAULT_BEDTIME_BEFORE_SUNRISE_MINS: u64 = 500;

/// Runtime configuration of the natural clock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Observer position; `None` means it is derived at run time.
    pub position: Option<Position>,
    pub position_max_age_secs: u64,
    pub polar_poll_ms: u64,
    pub bedtime_before_sunrise_mins: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            position: None,
            position_max_age_secs: DEFAULT_POSITION_MAX_AGE_SECS,
            polar_poll_ms: DEFAULT_POLAR_POLL_MS,
            bedtime_before_sunrise_mins: DEFAULT_BEDTIME_BEFORE_SUNRISE_MINS,
        }
    }
}

impl ClockConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let latitude: Option<f64> = parse_optional(&lookup, "HORA_LATITUDE")?;
        let longitude: Option<f64> = parse_optional(&lookup, "HORA_LONGITUDE")?;

        let position = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Position::new(lat, lon).map_err(|e| {
                HoraError::Config(format!("invalid HORA_LATITUDE/HORA_LONGITUDE: {e}"))
            })?),
            (None, None) => None,
            _ => {
                return Err(HoraError::Config(
                    "HORA_LATITUDE and HORA_LONGITUDE must be set together".to_owned(),
                ))
            }
        };

        let config = Self {
            position,
            position_max_age_secs: parse_or(
                &lookup,
                "HORA_POSITION_MAX_AGE_SECS",
                DEFAULT_POSITION_MAX_AGE_SECS,
            )?,
            polar_poll_ms: parse_or(&lookup, "HORA_POLAR_POLL_MS", DEFAULT_POLAR_POLL_MS)?,
            bedtime_before_sunrise_mins: parse_or(
                &lookup,
                "HORA_BEDTIME_BEFORE_SUNRISE_MINS",
                DEFAULT_BEDTIME_BEFORE_SUNRISE_MINS,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the clock cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.polar_poll_ms == 0 {
            return Err(HoraError::Config(
                "HORA_POLAR_POLL_MS must be greater than zero".to_owned(),
            ));
        }
        if self.bedtime_before_sunrise_mins.checked_mul(60).is_none() {
            return Err(HoraError::Config(format!(
                "HORA_BEDTIME_BEFORE_SUNRISE_MINS is too large: {}",
                self.bedtime_before_sunrise_mins
            )));
        }
        Ok(())
    }

    pub fn position_max_age(&self) -> Duration {
        Duration::from_secs(self.position_max_age_secs)
    }

    /// The engine settings carried by this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            polar_poll_delay_ms: self.polar_poll_ms as f64,
            bedtime_before_sunrise: Duration::from_secs(
                self.bedtime_before_sunrise_mins.saturating_mul(60),
            ),
        }
    }
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| HoraError::Config(format!("invalid {name}: {e}")))
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}
