//! Moon phase, mean lunar longitude and full-moon month boundaries.
//!
//! Accuracy: ±1 day for phase and full-moon dates; several degrees for the
//! mean longitude (no perturbation terms at all).
//! The phase clock is a single mean synodic month counted from the new moon
//! of 2000-01-06 (JD 2451550.1).
//!
//! Celtic months open at the full moon, so the month locators here all work
//! from the phase fraction rather than from the longitude.

use crate::{solar::normalize_degrees, solar::ZodiacSign, Jdn, J2000};
use serde::{Deserialize, Serialize};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_67;

/// Reference new moon: 2000-01-06 18:14 UT.
pub const NEW_MOON_EPOCH: f64 = 2_451_550.1;

/// Moon phase quartered around the synodic cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl MoonPhase {
    /// Bucket a phase fraction (0 = new, 0.5 = full). New is centred on 0,
    /// so it takes both `[0, 0.125)` and `[0.875, 1)`.
    pub fn from_fraction(fraction: f64) -> Self {
        let f = fraction.rem_euclid(1.0);
        if f < 0.125 {
            MoonPhase::New
        } else if f < 0.375 {
            MoonPhase::FirstQuarter
        } else if f < 0.625 {
            MoonPhase::Full
        } else if f < 0.875 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::New
        }
    }

    /// 0 = new, 1 = first quarter, 2 = full, 3 = last quarter.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::Full => "Full Moon",
            MoonPhase::LastQuarter => "Last Quarter",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MoonPhase::New => "🌑",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::Full => "🌕",
            MoonPhase::LastQuarter => "🌗",
        }
    }
}

/// Position in the synodic cycle, `[0, 1)`: 0 = new, 0.5 = full.
pub fn moon_phase_fraction(jdn: Jdn) -> f64 {
    let f = ((jdn as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).rem_euclid(1.0);
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Quartered moon phase on `jdn`.
pub fn moon_phase(jdn: Jdn) -> MoonPhase {
    MoonPhase::from_fraction(moon_phase_fraction(jdn))
}

/// Mean ecliptic longitude of the Moon in degrees, `[0, 360)`.
///
/// The Moon sat near 218° (Scorpio) at J2000.0 and advances ~13.18°/day.
pub fn moon_longitude(jdn: Jdn) -> f64 {
    let d = jdn as f64 - J2000;
    normalize_degrees(218.32 + 13.176_396 * d)
}

/// Zodiac sign the Moon occupies on `jdn`.
pub fn moon_sign(jdn: Jdn) -> ZodiacSign {
    ZodiacSign::from_longitude(moon_longitude(jdn))
}

/// Most recent full moon on or before `jdn`.
///
/// Closed form: step back by however much of the cycle has elapsed since
/// phase 0.5, truncated to whole days.
pub fn find_full_moon_before(jdn: Jdn) -> Jdn {
    let phase = moon_phase_fraction(jdn);
    let days_since_full = if phase >= 0.5 {
        (phase - 0.5) * SYNODIC_MONTH
    } else {
        (phase + 0.5) * SYNODIC_MONTH
    };
    jdn - days_since_full as Jdn
}

/// Day within the current lunar month, counting the opening full moon as 1.
pub fn lunar_day_of_month(jdn: Jdn) -> i32 {
    (jdn - find_full_moon_before(jdn)) as i32 + 1
}

/// Length of the lunar month containing `jdn`: 29 or 30 days.
///
/// Measured to the next full moon, probing 30 days past the opening one.
/// Probing from `jdn` itself would skip a month late in the cycle. If the
/// probe lands back on the same full moon it is retried at +35.
pub fn lunar_month_length(jdn: Jdn) -> i32 {
    let this_full = find_full_moon_before(jdn);
    let mut next_full = find_full_moon_before(this_full + 30);
    if next_full <= this_full {
        next_full = find_full_moon_before(this_full + 35);
    }
    if next_full - this_full >= 30 {
        30
    } else {
        29
    }
}
