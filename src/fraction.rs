// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Roman duodecimal fractions.
//!
//! The Romans split a whole (the *as*) into twelfths (*unciae*) and named
//! each multiple.  The table below holds those names plus the two small
//! subdivisions (1/24, 1/16) and the octave, ordered by value.
//!
//! | Fraction | Name | Ablative |
//! |----------|------|----------|
//! | 1/24 | semuncia | semunciā |
//! | 1/16 | sextula | sextulā |
//! | 1/12 | uncia | unciā |
//! | 1/8 | octava | octavā |
//! | 1/6 | sextans | sextante |
//! | 1/4 | quadrans | quadrante |
//! | 1/3 | triens | triente |
//! | 5/12 | quincunx | quincunce |
//! | 1/2 | semis | semisse |
//! | 7/12 | septunx | septunce |
//! | 2/3 | bes | besse |
//! | 3/4 | dodrans | dodrante |
//! | 5/6 | dextans | dextante |
//! | 11/12 | deunx | deunce |

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One named fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FractionEntry {
    pub numerator: u32,
    pub denominator: u32,
    /// Nominative Latin name.
    pub name: &'static str,
    /// Ablative form, as used in "… parte tardior est".
    pub label: &'static str,
}

impl FractionEntry {
    const fn new(
        numerator: u32,
        denominator: u32,
        name: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            numerator,
            denominator,
            name,
            label,
        }
    }

    /// Decimal value of the fraction.
    #[inline]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for FractionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Named fractions in ascending order of value.
#[rustfmt::skip]
pub static FRACTIONS: [FractionEntry; 14] = [
    FractionEntry::new(1, 24, "semuncia", "semunciā"),
    FractionEntry::new(1, 16, "sextula",  "sextulā"),
    FractionEntry::new(1, 12, "uncia",    "unciā"),
    FractionEntry::new(1, 8,  "octava",   "octavā"),
    FractionEntry::new(1, 6,  "sextans",  "sextante"),
    FractionEntry::new(1, 4,  "quadrans", "quadrante"),
    FractionEntry::new(1, 3,  "triens",   "triente"),
    FractionEntry::new(5, 12, "quincunx", "quincunce"),
    FractionEntry::new(1, 2,  "semis",    "semisse"),
    FractionEntry::new(7, 12, "septunx",  "septunce"),
    FractionEntry::new(2, 3,  "bes",      "besse"),
    FractionEntry::new(3, 4,  "dodrans",  "dodrante"),
    FractionEntry::new(5, 6,  "dextans",  "dextante"),
    FractionEntry::new(11, 12, "deunx",   "deunce"),
];

/// Entry whose value is closest to `value`.
///
/// On a tie the entry met first in table order wins.
pub fn nearest(value: f64) -> &'static FractionEntry {
    let mut best = &FRACTIONS[0];
    let mut smallest = f64::INFINITY;
    for entry in FRACTIONS.iter() {
        let difference = (entry.value() - value).abs();
        if difference < smallest {
            smallest = difference;
            best = entry;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ascending() {
        for pair in FRACTIONS.windows(2) {
            assert!(pair[0].value() < pair[1].value(), "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn nearest_picks_sextans_for_a_fifth() {
        let entry = nearest(0.2);
        assert_eq!(entry.to_string(), "1/6");
        assert_eq!(entry.label, "sextante");
    }

    #[test]
    fn nearest_clamps_to_table_ends() {
        assert_eq!(nearest(0.0).to_string(), "1/24");
        assert_eq!(nearest(3.5).to_string(), "11/12");
    }

    #[test]
    fn exact_values_match_themselves() {
        for entry in FRACTIONS.iter() {
            assert_eq!(nearest(entry.value()), entry);
        }
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        // 3/8 is exactly equidistant from 1/3 and 5/12 in binary floating point.
        assert_eq!(
            (0.375 - FRACTIONS[6].value()).abs(),
            (0.375 - FRACTIONS[7].value()).abs()
        );
        assert_eq!(nearest(0.375).name, "triens");
    }
}
