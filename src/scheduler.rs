// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The ticking loop.
//!
//! [`run_clock`] asks the engine for a snapshot, hands it to a callback, then
//! sleeps for the snapshot's poll delay (one natural second, or the polar
//! re-poll interval) and starts over.  A [`CancelToken`] stops the loop,
//! interrupting a pending sleep.

use crate::engine::{NaturalDayEngine, NaturalDaySnapshot};
use crate::ephemeris::EphemerisProvider;
use crate::error::Result;
use crate::position::PositionSource;
use chrono::{DateTime, TimeZone};
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable stop signal shared between the clock loop and its owner.
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signals every clone; idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Completes once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Drives `engine` until `token` is cancelled.
///
/// `now` supplies the current instant for each tick and `position` the
/// observer location.  Returns how many snapshots reached `on_snapshot`.
/// Position and engine errors stop the loop and are returned.
pub async fn run_clock<P, S, Tz, N, F>(
    engine: &NaturalDayEngine<P>,
    position: &S,
    now: N,
    token: &CancelToken,
    mut on_snapshot: F,
) -> Result<u64>
where
    P: EphemerisProvider<Tz>,
    S: PositionSource,
    Tz: TimeZone,
    N: Fn() -> DateTime<Tz>,
    F: FnMut(&NaturalDaySnapshot<Tz>),
{
    let mut delivered = 0u64;

    while !token.is_cancelled() {
        let snapshot = match position
            .position()
            .and_then(|here| engine.compute_snapshot(&here, &now()))
        {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, delivered, "clock tick failed");
                return Err(err);
            }
        };

        on_snapshot(&snapshot);
        delivered += 1;

        tokio::select! {
            _ = tokio::time::sleep(snapshot.poll_delay()) => {}
            _ = token.cancelled() => break,
        }
    }

    tracing::debug!(delivered, "clock stopped");
    Ok(delivered)
}
