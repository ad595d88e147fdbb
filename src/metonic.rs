//! # Metonic Cycle
//!
//! 235 synodic months (6939.688 days) come within about two hours of 19
//! tropical years, after which lunar phases recur on the same solar dates.
//! Positions are counted from the new moon nearest the vernal equinox of
//! 1 CE (JDN 1721424). Everything here is closed form.

use crate::Jdn;
use serde::{Deserialize, Serialize};

pub const METONIC_YEARS: i32 = 19;
pub const METONIC_LUNATIONS: i32 = 235;
pub const METONIC_DAYS: f64 = 6939.688;
pub const METONIC_EPOCH: Jdn = 1_721_424;

/// Average solar/lunar slip per cycle, in hours.
pub const DRIFT_HOURS_PER_CYCLE: f64 = 2.07;

/// Where a day sits in the Metonic cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetonicPosition {
    /// Cycles since the epoch, counting the first as 1
    pub cycle: i32,
    /// Year within the cycle, 1..=19
    pub year: i32,
    /// Lunation within the cycle, 1..=235
    pub lunation: i32,
    /// Accumulated drift, hours
    pub drift_hours: f64,
}

impl MetonicPosition {
    pub fn at(jdn: Jdn) -> Self {
        Self {
            cycle: metonic_cycle_number(jdn),
            year: metonic_year(jdn),
            lunation: metonic_lunation(jdn),
            drift_hours: metonic_drift_hours(jdn),
        }
    }
}

fn cycles_since_epoch(jdn: Jdn) -> f64 {
    (jdn - METONIC_EPOCH) as f64 / METONIC_DAYS
}

fn position_in_cycle(jdn: Jdn) -> f64 {
    let p = cycles_since_epoch(jdn).rem_euclid(1.0);
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

/// Year within the current cycle, 1..=19.
pub fn metonic_year(jdn: Jdn) -> i32 {
    (position_in_cycle(jdn) * METONIC_YEARS as f64) as i32 + 1
}

/// Lunation within the current cycle, 1..=235.
pub fn metonic_lunation(jdn: Jdn) -> i32 {
    (position_in_cycle(jdn) * METONIC_LUNATIONS as f64) as i32 + 1
}

/// Number of the current cycle; the epoch starts cycle 1.
pub fn metonic_cycle_number(jdn: Jdn) -> i32 {
    cycles_since_epoch(jdn) as i32 + 1
}

/// Drift from perfect solar/lunar alignment accumulated up to this cycle.
pub fn metonic_drift_hours(jdn: Jdn) -> f64 {
    metonic_cycle_number(jdn) as f64 * DRIFT_HOURS_PER_CYCLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::civil_to_jdn;

    #[test]
    fn test_epoch_starts_first_cycle() {
        let p = MetonicPosition::at(METONIC_EPOCH);
        assert_eq!(p.cycle, 1);
        assert_eq!(p.year, 1);
        assert_eq!(p.lunation, 1);
        assert!((p.drift_hours - 2.07).abs() < 1e-9);
    }

    #[test]
    fn test_ranges_hold() {
        let start = civil_to_jdn(1900, 1, 1);
        for jdn in (start..start + 200 * 365).step_by(17) {
            let p = MetonicPosition::at(jdn);
            assert!((1..=19).contains(&p.year), "{p:?}");
            assert!((1..=235).contains(&p.lunation), "{p:?}");
        }
    }

    #[test]
    fn test_one_cycle_later() {
        let jdn = METONIC_EPOCH + 6940;
        assert_eq!(metonic_cycle_number(jdn), 2);
        assert_eq!(metonic_year(jdn), 1);
        assert_eq!(metonic_lunation(jdn), 1);
    }

    #[test]
    fn test_modern_cycle() {
        // (2460981 - 1721424) / 6939.688 = 106.57
        let jdn = civil_to_jdn(2025, 11, 1);
        assert_eq!(metonic_cycle_number(jdn), 107);
        assert_eq!(metonic_year(jdn), 11);
        assert!((metonic_drift_hours(jdn) - 107.0 * 2.07).abs() < 1e-9);
    }

    #[test]
    fn test_lunation_tracks_year() {
        let jdn = METONIC_EPOCH + 3470;
        // halfway: year 10 of 19, lunation 118 of 235
        assert_eq!(metonic_year(jdn), 10);
        assert_eq!(metonic_lunation(jdn), 118);
    }
}
