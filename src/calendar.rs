//! # Celtic Year and Month Reckoning
//!
//! The Celtic year runs from one astronomical Samhain (Sun at 225°) to the
//! next, so its length is whatever the Sun makes it: 365 or 366 days. Months
//! are counted in lunations from Samonios, the full moon nearest Samhain.
//!
//! ## Anchoring
//! Celtic Year 5127 opens at the Samhain of Gregorian 2025; every other year
//! number is an offset from that anchor.
//!
//! ## Bounded searches
//! Nothing here root-finds. Samhain is the best day in a fixed 61-day scan,
//! Samonios scans 15 days, and lunation counting stops after 13 steps. When a
//! scan falls through, the documented fallback is used and a diagnostic is
//! logged through `tracing`.

use crate::{
    julian::{civil_to_jdn, gregorian_year},
    lunar::find_full_moon_before,
    solar::{closest_day_to_longitude, first_day_in_longitude_window},
    Jdn,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Solar longitude of Samhain, midway between autumn equinox and winter solstice.
pub const SAMHAIN_LONGITUDE: f64 = 225.0;

/// Celtic year that opens at the anchor Samhain.
pub const ANCHOR_YEAR: i32 = 5127;

/// Gregorian year whose Samhain opens [`ANCHOR_YEAR`].
pub const ANCHOR_SAMHAIN_YEAR: i32 = 2025;

/// Month index reported for a thirteenth (intercalary) lunation.
pub const INTERCALARY_MONTH: i32 = -1;

/// Years in one Age (a Saturnian cycle).
pub const AGE_YEARS: i32 = 31;

const AGE_OFFSET: i32 = -16;
const SAMHAIN_SCAN_DAYS: i64 = 60;
const SAMONIOS_SCAN_DAYS: i64 = 15;
const MAX_LUNATIONS: i32 = 13;

/// The two Samhains enclosing a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamhainBounds {
    /// Samhain on or before the day; day 1 of the Celtic year
    pub prev: Jdn,
    /// First Samhain after the day
    pub next: Jdn,
    /// Gregorian year in which `prev` falls
    pub prev_year: i32,
}

/// Day of astronomical Samhain in a Gregorian year.
///
/// Scans Oct 15 through Dec 14 and keeps the day whose solar longitude is
/// nearest 225°.
pub fn true_samhain_jdn(gregorian_year: i32) -> Jdn {
    let start = civil_to_jdn(gregorian_year, 10, 15);
    closest_day_to_longitude(start, SAMHAIN_SCAN_DAYS, SAMHAIN_LONGITUDE)
}

/// Samhain bracket around `jdn`: `prev <= jdn < next`.
pub fn samhain_bounds(jdn: Jdn) -> SamhainBounds {
    let year = gregorian_year(jdn);
    let this_samhain = true_samhain_jdn(year);
    if jdn < this_samhain {
        SamhainBounds {
            prev: true_samhain_jdn(year - 1),
            next: this_samhain,
            prev_year: year - 1,
        }
    } else {
        SamhainBounds {
            prev: this_samhain,
            next: true_samhain_jdn(year + 1),
            prev_year: year,
        }
    }
}

/// Celtic year number containing `jdn`.
pub fn celtic_year_from_jdn(jdn: Jdn) -> i32 {
    ANCHOR_YEAR + (samhain_bounds(jdn).prev_year - ANCHOR_SAMHAIN_YEAR)
}

/// Day of the Celtic year, 1 on Samhain.
pub fn day_of_year(jdn: Jdn) -> i32 {
    (jdn - samhain_bounds(jdn).prev) as i32 + 1
}

/// Length in days of the Celtic year containing `jdn`.
pub fn current_year_length(jdn: Jdn) -> i32 {
    let bounds = samhain_bounds(jdn);
    (bounds.next - bounds.prev) as i32
}

/// Days left in the Celtic year after today.
pub fn days_remaining(jdn: Jdn) -> i32 {
    current_year_length(jdn) - day_of_year(jdn)
}

/// Fraction of the Celtic year already elapsed, `[0, 1)`.
pub fn elapsed_fraction(jdn: Jdn) -> f64 {
    (day_of_year(jdn) - 1) as f64 / current_year_length(jdn) as f64
}

/// `(age, year_in_age)` for the Celtic year containing `jdn`.
///
/// Ages are 31 years long and offset so that year 5127 falls in Age 164.
pub fn age_and_year_in_age(jdn: Jdn) -> (i32, i32) {
    let adjusted = celtic_year_from_jdn(jdn) + AGE_OFFSET;
    (adjusted / AGE_YEARS, (adjusted - 1) % AGE_YEARS + 1)
}

/// Day 1 of a Celtic year.
pub fn jdn_start_of_celtic_year(celtic_year: i32) -> Jdn {
    true_samhain_jdn(ANCHOR_SAMHAIN_YEAR + (celtic_year - ANCHOR_YEAR))
}

/// Full moon that opens Samonios in a Gregorian year.
///
/// Finds the first day from Nov 1 (15-day window) with the Sun within half a
/// degree of 225°, falling back to Nov 1, then takes the full moon on or
/// before three days later.
pub fn find_samonios_start(gregorian_year: i32) -> Jdn {
    let nov1 = civil_to_jdn(gregorian_year, 11, 1);
    let samhain = first_day_in_longitude_window(
        nov1,
        SAMONIOS_SCAN_DAYS,
        SAMHAIN_LONGITUDE - 0.5,
        SAMHAIN_LONGITUDE + 0.5,
    )
    .unwrap_or_else(|| {
        debug!(gregorian_year, "no Samhain day in Samonios window, using Nov 1");
        nov1
    });
    find_full_moon_before(samhain + 3)
}

/// Lunar month of the Celtic year, counted in lunations since Samonios.
///
/// Returns 0..=11, or [`INTERCALARY_MONTH`] once more than eleven lunations
/// have passed.
pub fn lunar_celtic_month_index(jdn: Jdn) -> i32 {
    // Samonios may open in late October, so pick by date, not civil month.
    let mut samhain_year = gregorian_year(jdn);
    let mut samonios = find_samonios_start(samhain_year);
    if jdn < samonios {
        samhain_year -= 1;
        samonios = find_samonios_start(samhain_year);
    }

    let current_month = find_full_moon_before(jdn);
    let mut count = 0;
    let mut full_moon = samonios;
    while full_moon < current_month {
        if count == MAX_LUNATIONS {
            warn!(
                jdn,
                samhain_year, "lunation count hit its ceiling; synodic model has drifted"
            );
            break;
        }
        full_moon = find_full_moon_before(full_moon + 32);
        count += 1;
    }

    if count > 11 {
        INTERCALARY_MONTH
    } else {
        count
    }
}
