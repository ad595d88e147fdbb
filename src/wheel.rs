//! # The Eight-Fold Wheel of the Year
//!
//! Solstices, equinoxes and the four true cross-quarter days, each pinned to
//! a solar longitude. Day counts convert the remaining arc at the Sun's mean
//! rate of 0.9856°/day and truncate; no root-finding is done.

use crate::{
    solar::{angular_delta, sun_longitude},
    Jdn,
};
use serde::{Deserialize, Serialize};

/// Mean daily motion of the Sun along the ecliptic, degrees.
pub const SUN_DEGREES_PER_DAY: f64 = 0.9856;

/// Negative offsets are pushed this far forward when looking for the next event.
const WRAP_DAYS: i32 = 365;

/// A station of the Wheel of the Year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelEvent {
    Yule,
    Imbolc,
    Ostara,
    Beltane,
    Litha,
    Lughnasadh,
    Mabon,
    Samhain,
}

impl WheelEvent {
    /// All eight stations, starting from the winter solstice.
    pub const EIGHTFOLD: [WheelEvent; 8] = [
        WheelEvent::Yule,
        WheelEvent::Imbolc,
        WheelEvent::Ostara,
        WheelEvent::Beltane,
        WheelEvent::Litha,
        WheelEvent::Lughnasadh,
        WheelEvent::Mabon,
        WheelEvent::Samhain,
    ];

    /// The four fire festivals, Samhain first.
    pub const CROSS_QUARTERS: [WheelEvent; 4] = [
        WheelEvent::Samhain,
        WheelEvent::Imbolc,
        WheelEvent::Beltane,
        WheelEvent::Lughnasadh,
    ];

    /// The four solstices and equinoxes.
    pub const QUARTERS: [WheelEvent; 4] = [
        WheelEvent::Yule,
        WheelEvent::Ostara,
        WheelEvent::Litha,
        WheelEvent::Mabon,
    ];

    /// Solar ecliptic longitude of the event, degrees.
    pub fn longitude(self) -> f64 {
        match self {
            WheelEvent::Ostara => 0.0,
            WheelEvent::Beltane => 45.0,
            WheelEvent::Litha => 90.0,
            WheelEvent::Lughnasadh => 135.0,
            WheelEvent::Mabon => 180.0,
            WheelEvent::Samhain => 225.0,
            WheelEvent::Yule => 270.0,
            WheelEvent::Imbolc => 315.0,
        }
    }

    pub fn is_cross_quarter(self) -> bool {
        matches!(
            self,
            WheelEvent::Samhain | WheelEvent::Imbolc | WheelEvent::Beltane | WheelEvent::Lughnasadh
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            WheelEvent::Yule => "Yule",
            WheelEvent::Imbolc => "Imbolc",
            WheelEvent::Ostara => "Ostara",
            WheelEvent::Beltane => "Beltane",
            WheelEvent::Litha => "Litha",
            WheelEvent::Lughnasadh => "Lughnasadh",
            WheelEvent::Mabon => "Mabon",
            WheelEvent::Samhain => "Samhain",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WheelEvent::Yule => "Winter Solstice",
            WheelEvent::Imbolc => "Spring Stirring",
            WheelEvent::Ostara => "Vernal Equinox",
            WheelEvent::Beltane => "Summer's Gate",
            WheelEvent::Litha => "Summer Solstice",
            WheelEvent::Lughnasadh => "Harvest Home",
            WheelEvent::Mabon => "Autumn Equinox",
            WheelEvent::Samhain => "Winter's Gate",
        }
    }

    /// Signed days from `jdn` to this event: positive ahead, negative past.
    pub fn days_from(self, jdn: Jdn) -> i32 {
        days_to_solar_longitude(jdn, self.longitude())
    }

    /// Days until the next occurrence, counting a passed event as nearly a
    /// year away; 0 on the day itself.
    pub fn days_until(self, jdn: Jdn) -> i32 {
        let days = self.days_from(jdn);
        if days < 0 {
            days + WRAP_DAYS
        } else {
            days
        }
    }
}

/// Signed days until the Sun reaches `target_longitude`, within half a year
/// either way.
pub fn days_to_solar_longitude(jdn: Jdn, target_longitude: f64) -> i32 {
    let diff = angular_delta(target_longitude, sun_longitude(jdn));
    (diff / SUN_DEGREES_PER_DAY) as i32
}

pub fn days_to_true_samhain(jdn: Jdn) -> i32 {
    WheelEvent::Samhain.days_from(jdn)
}

pub fn days_to_true_imbolc(jdn: Jdn) -> i32 {
    WheelEvent::Imbolc.days_from(jdn)
}

pub fn days_to_true_beltane(jdn: Jdn) -> i32 {
    WheelEvent::Beltane.days_from(jdn)
}

pub fn days_to_true_lughnasadh(jdn: Jdn) -> i32 {
    WheelEvent::Lughnasadh.days_from(jdn)
}

pub fn days_to_yule(jdn: Jdn) -> i32 {
    WheelEvent::Yule.days_from(jdn)
}

pub fn days_to_ostara(jdn: Jdn) -> i32 {
    WheelEvent::Ostara.days_from(jdn)
}

pub fn days_to_litha(jdn: Jdn) -> i32 {
    WheelEvent::Litha.days_from(jdn)
}

pub fn days_to_mabon(jdn: Jdn) -> i32 {
    WheelEvent::Mabon.days_from(jdn)
}

/// Soonest of `events` from `jdn`; the earlier entry wins a tie.
fn nearest_of(events: &[WheelEvent], jdn: Jdn) -> (WheelEvent, i32) {
    let mut nearest = (events[0], events[0].days_until(jdn));
    for &event in &events[1..] {
        let days = event.days_until(jdn);
        if days < nearest.1 {
            nearest = (event, days);
        }
    }
    nearest
}

/// Next fire festival and the days until it.
pub fn nearest_cross_quarter(jdn: Jdn) -> (WheelEvent, i32) {
    nearest_of(&WheelEvent::CROSS_QUARTERS, jdn)
}

/// Next station of the eight-fold wheel and the days until it, `[0, 365)`.
pub fn nearest_eightfold_event(jdn: Jdn) -> (WheelEvent, i32) {
    nearest_of(&WheelEvent::EIGHTFOLD, jdn)
}

/// The Sun stands on one of the eight stations today.
pub fn is_wheel_day(jdn: Jdn) -> Option<WheelEvent> {
    WheelEvent::EIGHTFOLD
        .into_iter()
        .find(|event| event.days_from(jdn) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::civil_to_jdn;

    #[test]
    fn test_longitudes() {
        let cross: Vec<f64> = WheelEvent::CROSS_QUARTERS
            .iter()
            .map(|e| e.longitude())
            .collect();
        assert_eq!(cross, vec![225.0, 315.0, 45.0, 135.0]);
        assert!(WheelEvent::CROSS_QUARTERS.iter().all(|e| e.is_cross_quarter()));
        assert!(!WheelEvent::QUARTERS.iter().any(|e| e.is_cross_quarter()));
    }

    #[test]
    fn test_days_to_event_sign() {
        let oct1 = civil_to_jdn(2025, 10, 1);
        let samhain = days_to_true_samhain(oct1);
        assert!((35..=38).contains(&samhain), "{samhain}");
        let mabon = days_to_mabon(oct1);
        assert!((-10..=-7).contains(&mabon), "{mabon}");
    }

    #[test]
    fn test_solstice_is_day_zero() {
        let jdn = civil_to_jdn(2024, 12, 21);
        assert_eq!(days_to_yule(jdn), 0);
        assert_eq!(is_wheel_day(jdn), Some(WheelEvent::Yule));
    }

    #[test]
    fn test_nearest_eightfold_in_range() {
        let start = civil_to_jdn(2000, 1, 1);
        for jdn in start..start + 3 * 365 {
            let (_, days) = nearest_eightfold_event(jdn);
            assert!((0..365).contains(&days), "jdn {jdn}: {days}");
            assert!(days <= 47, "eight events are never more than ~46 days apart");
        }
    }

    #[test]
    fn test_nearest_event_today_is_zero() {
        let jdn = civil_to_jdn(2024, 12, 21);
        assert_eq!(nearest_eightfold_event(jdn), (WheelEvent::Yule, 0));
    }

    #[test]
    fn test_nearest_cross_quarter() {
        let (event, days) = nearest_cross_quarter(civil_to_jdn(2025, 10, 1));
        assert_eq!(event, WheelEvent::Samhain);
        assert_eq!(days, days_to_true_samhain(civil_to_jdn(2025, 10, 1)));

        let (event, _) = nearest_cross_quarter(civil_to_jdn(2026, 1, 15));
        assert_eq!(event, WheelEvent::Imbolc);
    }

    #[test]
    fn test_wrappers_agree_with_enum() {
        let jdn = civil_to_jdn(2026, 5, 1);
        assert_eq!(days_to_true_beltane(jdn), WheelEvent::Beltane.days_from(jdn));
        assert_eq!(days_to_true_imbolc(jdn), WheelEvent::Imbolc.days_from(jdn));
        assert_eq!(
            days_to_true_lughnasadh(jdn),
            WheelEvent::Lughnasadh.days_from(jdn)
        );
        assert_eq!(days_to_ostara(jdn), WheelEvent::Ostara.days_from(jdn));
        assert_eq!(days_to_litha(jdn), WheelEvent::Litha.days_from(jdn));
    }
}
