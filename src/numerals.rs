// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Latin text fragments for presenting a natural-time reading.

/// Roman numerals for the twelve natural hours.
pub const HOUR_NUMERALS: [&str; 12] = ["Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ", "Ⅺ", "Ⅻ"];

/// Feminine ordinals (*hora prima*, *vigilia secunda*, …).
pub const ORDINALS: [&str; 12] = [
    "Prima", "Secunda", "Tertia", "Quarta", "Quinta", "Sexta", "Septima", "Octava", "Nona",
    "Decima", "Undecima", "Duodecima",
];

/// Shown instead of a clock face when there is no sunrise or sunset.
pub const POLAR_MESSAGE: &str = "Phaenomenon polare eo die fit 🐧";

/// Numeral of a zero-based natural hour; `"?"` when out of range.
pub fn hour_numeral(hour: u32) -> &'static str {
    HOUR_NUMERALS.get(hour as usize).copied().unwrap_or("?")
}

/// Ordinal of a zero-based hour or watch; `"?"` when out of range.
pub fn ordinal(index: u32) -> &'static str {
    ORDINALS.get(index as usize).copied().unwrap_or("?")
}

/// `"Ⅶ : 03 : 09"`.
pub fn clock_face_text(hour: u32, minute: u32, second: u32) -> String {
    format!("{} : {:02} : {:02}", hour_numeral(hour), minute, second)
}

/// Wall-clock length as `"10h 0m"` (truncated to whole minutes).
pub fn hours_minutes_text(milliseconds: f64) -> String {
    let seconds = (milliseconds / 1000.0).max(0.0);
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    format!("{hours}h {minutes}m")
}
