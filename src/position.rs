// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic position and the sources that supply it.
//!
//! The engine never locates the viewer itself: the caller resolves a
//! [`Position`] once per cycle through a [`PositionSource`] and passes it in.

use crate::error::{HoraError, Result};
use crate::zones;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latitude/longitude in degrees.
///
/// Deserialisation goes through [`Position::new`], so out-of-range values
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPosition"))]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = HoraError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Position::new(raw.latitude, raw.longitude)
    }
}

impl Position {
    /// Validated constructor: latitude in `[-90, 90]`, longitude in `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(HoraError::InvalidPosition {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Representative population centre of an IANA zone (`"Europe/Rome"`).
    pub fn from_zone_name(name: &str) -> Option<Self> {
        zones::zone_centre(name).map(|(latitude, longitude)| Self {
            latitude,
            longitude,
        })
    }

    /// Representative population centre for a whole-hour UTC offset.
    ///
    /// A coarse proxy, used only when the zone name is unknown.  Returns
    /// `None` for offsets that are not a whole number of hours or lie
    /// outside −12 h…+14 h.
    pub fn from_utc_offset(offset_seconds: i32) -> Option<Self> {
        if offset_seconds % 3600 != 0 {
            return None;
        }
        Self::from_zone_name(&zones::etc_zone_name(offset_seconds / 3600))
    }
}

/// What is known about the viewer's time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneHint {
    /// IANA name, when the system reports one.
    pub name: Option<String>,
    pub utc_offset_seconds: i32,
}

impl ZoneHint {
    /// Position of the named zone, falling back to the offset row.
    pub fn position(&self) -> Option<Position> {
        self.name
            .as_deref()
            .and_then(Position::from_zone_name)
            .or_else(|| Position::from_utc_offset(self.utc_offset_seconds))
    }
}

/// Anything that can tell where the viewer is.
pub trait PositionSource {
    fn position(&self) -> Result<Position>;
}

/// A position known up front (configuration, tests).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition(pub Position);

impl PositionSource for FixedPosition {
    fn position(&self) -> Result<Position> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Cached {
    position: Position,
    stored_at: Instant,
    zone_derived: bool,
}

/// Caching wrapper around a primary source.
///
/// Resolution order:
/// 1. the cached position, while younger than `max_age`;
/// 2. a fresh position from the primary source (which refreshes the cache);
/// 3. the stale cached position, if the primary fails;
/// 4. the time-zone fallback, if one was configured (cached like a fresh
///    position, and reported by [`is_zone_derived`](Self::is_zone_derived)).
#[derive(Debug)]
pub struct CachedPosition<S> {
    primary: S,
    max_age: Duration,
    zone_fallback: Option<ZoneHint>,
    cache: Mutex<Option<Cached>>,
}

impl<S: PositionSource> CachedPosition<S> {
    pub fn new(primary: S, max_age: Duration) -> Self {
        Self {
            primary,
            max_age,
            zone_fallback: None,
            cache: Mutex::new(None),
        }
    }

    /// Use the viewer's time zone as the last resort.
    pub fn with_zone_fallback(mut self, zone: ZoneHint) -> Self {
        self.zone_fallback = Some(zone);
        self
    }

    /// Use the centre of a whole-hour UTC offset as the last resort.
    pub fn with_utc_offset_fallback(self, offset_seconds: i32) -> Self {
        self.with_zone_fallback(ZoneHint {
            name: None,
            utc_offset_seconds: offset_seconds,
        })
    }

    /// Seed the cache, e.g. with a value persisted by a previous run.
    pub fn seed(&self, position: Position) {
        self.store(position, Instant::now(), false);
    }

    /// Whether the cached position was derived from the time zone rather
    /// than reported by a source.
    pub fn is_zone_derived(&self) -> bool {
        self.cached().is_some_and(|c| c.zone_derived)
    }

    fn store(&self, position: Position, stored_at: Instant, zone_derived: bool) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = Some(Cached {
                position,
                stored_at,
                zone_derived,
            });
        }
    }

    fn cached(&self) -> Option<Cached> {
        self.cache.lock().ok().and_then(|cache| *cache)
    }

    fn resolve_at(&self, now: Instant) -> Result<Position> {
        let cached = self.cached();

        if let Some(c) = cached {
            if now.saturating_duration_since(c.stored_at) <= self.max_age {
                return Ok(c.position);
            }
        }

        match self.primary.position() {
            Ok(position) => {
                self.store(position, now, false);
                Ok(position)
            }
            Err(err) => {
                if let Some(c) = cached {
                    tracing::warn!(
                        error = %err,
                        "position source failed, using stale cached position"
                    );
                    return Ok(c.position);
                }
                let derived = self.zone_fallback.as_ref().and_then(ZoneHint::position);
                if let Some(position) = derived {
                    tracing::warn!(
                        error = %err,
                        latitude = position.latitude,
                        longitude = position.longitude,
                        "position source failed, using time-zone derived position"
                    );
                    self.store(position, now, true);
                    return Ok(position);
                }
                Err(HoraError::PositionUnavailable(err.to_string()))
            }
        }
    }
}

impl<S: PositionSource> PositionSource for CachedPosition<S> {
    fn position(&self) -> Result<Position> {
        self.resolve_at(Instant::now())
    }
}
