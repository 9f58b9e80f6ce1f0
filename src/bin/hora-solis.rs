// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Terminal natural clock.
//!
//! Prints the natural hour, minute and second of the local machine once per
//! natural second until interrupted with Ctrl-C.
//!
//! ```text
//! config (env) --> position --> NaturalDayEngine (SunriseEquation) --> one line per tick
//! ```

use chrono::{Local, Offset};
use hora_solis::numerals::{clock_face_text, hours_minutes_text, ordinal, POLAR_MESSAGE};
use hora_solis::{
    run_clock, CachedPosition, CancelToken, ClockConfig, HoraError, NaturalDay, NaturalDayEngine,
    NaturalDaySnapshot, Position, PositionSource, SunriseEquation, ZoneHint,
};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Where the observer's position comes from.
enum Observer {
    Configured(Position),
    /// No geolocation service on a terminal; the time-zone fallback applies.
    Unlocated,
}

impl PositionSource for Observer {
    fn position(&self) -> hora_solis::Result<Position> {
        match self {
            Observer::Configured(position) => Ok(*position),
            Observer::Unlocated => Err(HoraError::PositionUnavailable(
                "no HORA_LATITUDE/HORA_LONGITUDE configured".to_owned(),
            )),
        }
    }
}

fn tick_line(day: &NaturalDay<Local>, bedtime_offset: Duration) -> String {
    let face = clock_face_text(day.hour, day.minute, day.second);
    let phase = match day.vigilia {
        None => format!("hora {} diei", ordinal(day.hour).to_lowercase()),
        Some(watch) => format!("vigilia {} noctis", ordinal(watch).to_lowercase()),
    };
    let bedtime = day
        .bedtime(bedtime_offset)
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|_| "--:--".to_owned());
    let lengths = format!(
        "dies {} / nox {}",
        hours_minutes_text(day.day_duration_ms),
        hours_minutes_text(day.night_duration_ms)
    );
    let speed = day.clock_speed();

    format!(
        "{face}  {phase}  |  {lengths}  |  cubitum {bedtime}  |  {}  |  {}",
        speed.percent_text(),
        speed.fraction_text()
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("hora-solis starting");

    let config = ClockConfig::from_env()?;
    let zone = ZoneHint {
        name: iana_time_zone::get_timezone()
            .map_err(|err| warn!(error = %err, "cannot read the system time zone"))
            .ok(),
        utc_offset_seconds: Local::now().offset().fix().local_minus_utc(),
    };
    info!(
        configured_position = config.position.is_some(),
        zone = zone.name.as_deref().unwrap_or("unknown"),
        utc_offset = zone.utc_offset_seconds,
        polar_poll_ms = config.polar_poll_ms,
        "configuration loaded"
    );

    let observer = match config.position {
        Some(position) => Observer::Configured(position),
        None => Observer::Unlocated,
    };
    let position =
        CachedPosition::new(observer, config.position_max_age()).with_zone_fallback(zone);

    let engine_config = config.engine_config();
    let engine = NaturalDayEngine::with_config(SunriseEquation::default(), engine_config);

    let token = CancelToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("interrupt received");
                on_interrupt.cancel();
            }
            Err(err) => warn!(error = %err, "cannot listen for Ctrl-C"),
        }
    });

    let ticks = run_clock(
        &engine,
        &position,
        Local::now,
        &token,
        |snapshot: &NaturalDaySnapshot<Local>| match snapshot.natural_day() {
            Some(day) => println!("{}", tick_line(day, engine_config.bedtime_before_sunrise)),
            None => println!("{POLAR_MESSAGE}"),
        },
    )
    .await?;

    info!(ticks, "hora-solis stopped");
    Ok(())
}
