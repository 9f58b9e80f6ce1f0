// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! How fast the natural clock runs compared with a modern one.

use crate::fraction::{self, FractionEntry};
use qtty::{Seconds, Simplify};

/// The fixed reference: one SI second.
pub const MODERN_SECOND: Seconds = Seconds::new(1.0);

/// Whether a natural second is longer or shorter than a modern one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Natural seconds last longer: the clock hands move more slowly.
    Slower,
    /// Natural seconds are shorter (or exactly as long).
    Faster,
}

/// Relative speed of a natural second against [`MODERN_SECOND`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSpeed {
    /// `(natural − modern) / modern`.
    pub scale: f64,
    pub pace: Pace,
    /// `round(|scale| × 100)`.
    pub percent: u32,
    /// Named fraction closest to `|scale|`.
    pub fraction: &'static FractionEntry,
}

impl ClockSpeed {
    /// Describes a natural second lasting `natural_second_ms` milliseconds.
    ///
    /// ```
    /// use hora_solis::{ClockSpeed, Pace};
    ///
    /// let speed = ClockSpeed::describe(1200.0);
    /// assert_eq!(speed.pace, Pace::Slower);
    /// assert_eq!(speed.percent, 20);
    /// assert_eq!(speed.fraction.to_string(), "1/6");
    /// ```
    pub fn describe(natural_second_ms: f64) -> Self {
        let natural = Seconds::new(natural_second_ms / 1000.0);
        let scale = ((natural - MODERN_SECOND) / MODERN_SECOND)
            .simplify()
            .value();
        let magnitude = scale.abs();

        Self {
            scale,
            pace: if scale > 0.0 { Pace::Slower } else { Pace::Faster },
            percent: (magnitude * 100.0).round() as u32,
            fraction: fraction::nearest(magnitude),
        }
    }

    /// Signed percentage: positive when slower, negative when faster.
    pub fn signed_percent(&self) -> i64 {
        match self.pace {
            Pace::Slower => self.percent as i64,
            Pace::Faster => -(self.percent as i64),
        }
    }

    /// "Cursus horologii 🐌 20 centesimis tardius".
    pub fn percent_text(&self) -> String {
        match self.pace {
            Pace::Slower => format!("Cursus horologii 🐌 {} centesimis tardius", self.percent),
            Pace::Faster => format!("Cursus horologii 🐇 {} centesimis celerius", self.percent),
        }
    }

    /// "Cursus horologii sextante (1/6) parte 🐌 tardior est".
    pub fn fraction_text(&self) -> String {
        let (symbol, adjective) = match self.pace {
            Pace::Slower => ("🐌", "tardior"),
            Pace::Faster => ("🐇", "celerior"),
        };
        format!(
            "Cursus horologii {} ({}) parte {} {} est",
            self.fraction.label, self.fraction, symbol, adjective
        )
    }
}
