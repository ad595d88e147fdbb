//! # Solar Position
//!
//! Low-precision apparent ecliptic longitude of the Sun (accurate to about a
//! degree), plus the circular-angle helpers every other module leans on.
//!
//! The model is the usual two-term equation of centre:
//!
//! ```text
//! d = jdn - 2451545.0
//! L = 280.460 + 0.9856474 d        (mean longitude)
//! g = 357.528 + 0.9856003 d        (mean anomaly)
//! λ = L + 1.915 sin g + 0.020 sin 2g
//! ```

use crate::{Jdn, J2000};
use serde::{Deserialize, Serialize};

/// Reduce an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Shortest signed rotation from `from` to `to`, in `(-180, 180]` degrees.
pub fn angular_delta(to: f64, from: f64) -> f64 {
    let diff = normalize_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Apparent ecliptic longitude of the Sun in degrees, `[0, 360)`.
pub fn sun_longitude(jdn: Jdn) -> f64 {
    let d = jdn as f64 - J2000;
    let mean_longitude = normalize_degrees(280.460 + 0.985_647_4 * d);
    let g = normalize_degrees(357.528 + 0.985_600_3 * d).to_radians();
    normalize_degrees(mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
}

/// Zodiac sign the Sun occupies on `jdn`.
pub fn sun_sign(jdn: Jdn) -> ZodiacSign {
    ZodiacSign::from_longitude(sun_longitude(jdn))
}

/// First day in `start .. start + window_days` whose solar longitude lies in
/// `[low, high]`, or `None` if the window never touches it.
pub fn first_day_in_longitude_window(
    start: Jdn,
    window_days: i64,
    low: f64,
    high: f64,
) -> Option<Jdn> {
    (start..start + window_days).find(|&jdn| (low..=high).contains(&sun_longitude(jdn)))
}

/// Day in `start ..= start + window_days` whose solar longitude is closest to
/// `target`; ties go to the earlier day.
pub fn closest_day_to_longitude(start: Jdn, window_days: i64, target: f64) -> Jdn {
    let mut best = start;
    let mut best_diff = f64::INFINITY;
    for jdn in start..=start + window_days {
        let diff = angular_delta(sun_longitude(jdn), target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = jdn;
        }
    }
    best
}

/// Tropical zodiac sign: a 30° slice of ecliptic longitude starting at Aries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in index order (0 = Aries … 11 = Pisces).
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing an ecliptic longitude: `floor(longitude / 30)`.
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / 30.0) as usize;
        Self::ALL[index.min(11)]
    }

    /// Sign by index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(self) -> &'static str {
        const GLYPHS: [&str; 12] = [
            "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓",
        ];
        GLYPHS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::civil_to_jdn;

    #[test]
    fn test_j2000_longitude() {
        // d = 0: L = 280.46, g = 357.528 -> small negative correction
        let lon = sun_longitude(2_451_545);
        assert!((lon - 280.3757).abs() < 0.01, "got {lon}");
        assert!((lon - 280.46).abs() < 0.1);
    }

    #[test]
    fn test_longitude_always_in_range() {
        let start = civil_to_jdn(1900, 1, 1);
        for jdn in (start..start + 200 * 365).step_by(13) {
            let lon = sun_longitude(jdn);
            assert!((0.0..360.0).contains(&lon), "jdn {jdn} -> {lon}");
        }
    }

    #[test]
    fn test_equinox_and_solstice_signs() {
        // Around Mar 21 the Sun crosses into Aries, Jun 22 into Cancer
        assert_eq!(sun_sign(civil_to_jdn(2024, 3, 25)), ZodiacSign::Aries);
        assert_eq!(sun_sign(civil_to_jdn(2024, 6, 25)), ZodiacSign::Cancer);
        assert_eq!(sun_sign(civil_to_jdn(2024, 9, 25)), ZodiacSign::Libra);
        assert_eq!(sun_sign(civil_to_jdn(2024, 12, 25)), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_samhain_longitude_early_november() {
        let lon = sun_longitude(civil_to_jdn(2025, 11, 7));
        assert!((lon - 225.0).abs() < 1.5, "got {lon}");
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-14) < 360.0);
    }

    #[test]
    fn test_angular_delta_takes_short_way() {
        assert_eq!(angular_delta(10.0, 350.0), 20.0);
        assert_eq!(angular_delta(350.0, 10.0), -20.0);
        assert_eq!(angular_delta(180.0, 0.0), 180.0);
        assert_eq!(angular_delta(0.0, 180.0), 180.0);
        assert_eq!(angular_delta(225.0, 225.0), 0.0);
    }

    #[test]
    fn test_longitude_window_search() {
        let nov1 = civil_to_jdn(2025, 11, 1);
        let hit = first_day_in_longitude_window(nov1, 15, 224.5, 225.5);
        assert_eq!(hit, Some(civil_to_jdn(2025, 11, 7)));
        // the Sun is nowhere near Aries in November
        assert_eq!(first_day_in_longitude_window(nov1, 15, 0.0, 1.0), None);
    }

    #[test]
    fn test_closest_day_to_longitude() {
        let oct15 = civil_to_jdn(2025, 10, 15);
        assert_eq!(
            closest_day_to_longitude(oct15, 60, 225.0),
            civil_to_jdn(2025, 11, 7)
        );
    }

    #[test]
    fn test_zodiac_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_index(13), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::Scorpio.index(), 7);
        assert_eq!(ZodiacSign::Pisces.glyph(), "♓");
    }
}
