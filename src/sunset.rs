//! # Sunset and the Celtic Day Boundary
//!
//! The Celtic day runs sunset to sunset ("the night in each case precedes the
//! day"), so the calendar needs the local sunset hour to decide whether an
//! evening reading already belongs to tomorrow.
//!
//! ## Model
//! The standard sunrise equation in local solar time:
//! - solar declination from a mean-anomaly / ecliptic-longitude chain whose
//!   constants are tuned separately from [`crate::solar`]
//! - obliquity `ε = 23.439 − 0.0000004 d`
//! - hour angle `cos H = (sin(−0.833°) − sin φ sin δ) / (cos φ cos δ)`, where
//!   −0.833° folds in refraction and the solar semi-diameter
//! - sunset `= 12h + H`
//!
//! ## Polar clamps
//! When `|cos H| > 1` the Sun does not cross the horizon at all that day:
//! - `cos H > 1` (Sun stays below the horizon, polar night): **24.0**, the
//!   day never rolls over
//! - `cos H < −1` (Sun stays above the horizon, polar day): **12.0**, the
//!   afternoon counts as after sunset
//!
//! This is deliberately the reverse of the older almanac convention, which
//! returned 12.0 for polar night; here polar night never rolls over.

use crate::{solar::normalize_degrees, Jdn, J2000};

/// Sunset hour returned when the Sun never rises.
pub const POLAR_NIGHT_HOUR: f64 = 24.0;

/// Sunset hour returned when the Sun never sets.
pub const POLAR_DAY_HOUR: f64 = 12.0;

/// Altitude of the Sun's centre at apparent sunset, in degrees.
const SUNSET_ALTITUDE_DEG: f64 = -0.833;

/// Solar declination in degrees for `jdn`.
pub fn solar_declination(jdn: Jdn) -> f64 {
    let d = jdn as f64 - J2000;
    let g = normalize_degrees(357.529 + 0.985_600_28 * d).to_radians();
    let mean_longitude = normalize_degrees(280.459 + 0.985_647_36 * d);
    let lambda =
        normalize_degrees(mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
    let epsilon = (23.439 - 0.000_000_4 * d).to_radians();
    (epsilon.sin() * lambda.sin()).asin().to_degrees()
}

/// Local solar time of sunset, in hours after midnight.
///
/// See the module docs for the polar-night (24.0) and polar-day (12.0)
/// clamps.
pub fn sunset_hour(jdn: Jdn, latitude: f64) -> f64 {
    let delta = solar_declination(jdn).to_radians();
    let phi = latitude.to_radians();
    let cos_h = (SUNSET_ALTITUDE_DEG.to_radians().sin() - phi.sin() * delta.sin())
        / (phi.cos() * delta.cos());

    if cos_h > 1.0 {
        return POLAR_NIGHT_HOUR;
    }
    if cos_h < -1.0 {
        return POLAR_DAY_HOUR;
    }

    let hour_angle = cos_h.acos().to_degrees() / 15.0;
    12.0 + hour_angle
}

/// True once the wall clock has reached sunset.
pub fn is_after_sunset(jdn: Jdn, hour_of_day: f64, latitude: f64) -> bool {
    hour_of_day >= sunset_hour(jdn, latitude)
}

/// Day number of the Celtic day in progress: after sunset it is tomorrow.
pub fn celtic_jdn_from_time(jdn: Jdn, hour_of_day: f64, latitude: f64) -> Jdn {
    if is_after_sunset(jdn, hour_of_day, latitude) {
        jdn + 1
    } else {
        jdn
    }
}

/// Sunset as `"HH:MM"`, minutes truncated.
pub fn sunset_time_string(jdn: Jdn, latitude: f64) -> String {
    format_hour(sunset_hour(jdn, latitude))
}

/// Format fractional hours as `"HH:MM"`, minutes truncated.
pub fn format_hour(hours: f64) -> String {
    let h = hours as i32;
    let m = ((hours - h as f64) * 60.0) as i32;
    format!("{:02}:{:02}", h, m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::civil_to_jdn;

    const COLIGNY: f64 = 46.38;

    #[test]
    fn test_polar_clamps() {
        let midwinter = civil_to_jdn(2024, 12, 21);
        let midsummer = civil_to_jdn(2024, 6, 21);
        assert_eq!(sunset_hour(midwinter, 90.0), POLAR_NIGHT_HOUR);
        assert_eq!(sunset_hour(midsummer, 90.0), POLAR_DAY_HOUR);
        // and mirrored in the south
        assert_eq!(sunset_hour(midsummer, -90.0), POLAR_NIGHT_HOUR);
        assert_eq!(sunset_hour(midwinter, -90.0), POLAR_DAY_HOUR);
    }

    #[test]
    fn test_equator_sunset_near_six() {
        for month in 1..=12 {
            let hour = sunset_hour(civil_to_jdn(2024, month, 15), 0.0);
            assert!((17.9..18.4).contains(&hour), "month {month}: {hour}");
        }
    }

    #[test]
    fn test_coligny_seasons() {
        let summer = sunset_hour(civil_to_jdn(2024, 6, 21), COLIGNY);
        let winter = sunset_hour(civil_to_jdn(2024, 12, 21), COLIGNY);
        // ~15h45 of daylight in June, ~8h30 in December
        assert!((19.7..20.1).contains(&summer), "summer {summer}");
        assert!((16.1..16.5).contains(&winter), "winter {winter}");
    }

    #[test]
    fn test_declination_extremes() {
        let june = solar_declination(civil_to_jdn(2024, 6, 21));
        let december = solar_declination(civil_to_jdn(2024, 12, 21));
        assert!((june - 23.44).abs() < 0.1, "june {june}");
        assert!((december + 23.44).abs() < 0.1, "december {december}");
    }

    #[test]
    fn test_day_rolls_over_after_sunset() {
        let jdn = civil_to_jdn(2025, 10, 31);
        let sunset = sunset_hour(jdn, COLIGNY);

        assert!(!is_after_sunset(jdn, 12.0, COLIGNY));
        assert_eq!(celtic_jdn_from_time(jdn, 12.0, COLIGNY), jdn);

        assert!(is_after_sunset(jdn, sunset, COLIGNY));
        assert_eq!(celtic_jdn_from_time(jdn, 23.5, COLIGNY), jdn + 1);
    }

    #[test]
    fn test_polar_night_never_rolls_over() {
        let jdn = civil_to_jdn(2024, 12, 21);
        assert_eq!(celtic_jdn_from_time(jdn, 23.99, 89.0), jdn);
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(17.5), "17:30");
        assert_eq!(format_hour(9.999), "09:59");
        assert_eq!(format_hour(24.0), "24:00");
        assert_eq!(format_hour(12.0), "12:00");
    }

    #[test]
    fn test_sunset_string_shape() {
        let s = sunset_time_string(civil_to_jdn(2025, 3, 20), COLIGNY);
        assert_eq!(s.len(), 5);
        assert!(s.starts_with("18:"), "{s}");
    }
}
