//! Heliacal rising of the Pleiades, an old Samhain marker.
//!
//! The cluster sits near ecliptic longitude 60° and first shows before dawn
//! once the Sun has moved about 17° past it, i.e. with the Sun at 43°. The day
//! count here uses a flat 1°/day, unlike the wheel's 0.9856°/day.

use crate::{
    solar::{angular_delta, normalize_degrees, sun_longitude},
    Jdn,
};

pub const PLEIADES_LONGITUDE: f64 = 60.0;
pub const HELIACAL_OFFSET: f64 = 17.0;

/// Days either side of the rising that still count as "rising".
const RISING_WINDOW_DAYS: i32 = 3;

/// Signed days to the heliacal rising: positive ahead, negative since.
pub fn days_to_pleiades_rising(jdn: Jdn) -> i32 {
    let rising_sun = normalize_degrees(PLEIADES_LONGITUDE - HELIACAL_OFFSET);
    angular_delta(rising_sun, sun_longitude(jdn)) as i32
}

/// Within three days of the heliacal rising.
pub fn is_pleiades_rising(jdn: Jdn) -> bool {
    days_to_pleiades_rising(jdn).abs() <= RISING_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::civil_to_jdn;

    #[test]
    fn test_rising_in_early_may() {
        // Sun reaches 43° around May 3
        assert!(is_pleiades_rising(civil_to_jdn(2025, 5, 3)));
        assert!(!is_pleiades_rising(civil_to_jdn(2025, 6, 1)));
    }

    #[test]
    fn test_sign_of_countdown() {
        assert!(days_to_pleiades_rising(civil_to_jdn(2025, 4, 1)) > 0);
        assert!(days_to_pleiades_rising(civil_to_jdn(2025, 6, 1)) < 0);
    }

    #[test]
    fn test_countdown_is_bounded() {
        let start = civil_to_jdn(2024, 1, 1);
        for jdn in start..start + 366 {
            let days = days_to_pleiades_rising(jdn);
            assert!((-180..=180).contains(&days));
        }
    }
}
