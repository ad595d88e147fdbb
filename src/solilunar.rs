//! # Solilunar Festivals
//!
//! A solilunar festival joins a solar station with a lunar one: the Sun on a
//! cross-quarter longitude while the Moon is Full or New. Solilunar Samhain is
//! the full moon nearest the day the Sun reaches 225°.

use crate::{
    calendar::SAMHAIN_LONGITUDE,
    julian::{civil_to_jdn, gregorian_year},
    lunar::{find_full_moon_before, moon_phase, MoonPhase},
    solar::{angular_delta, first_day_in_longitude_window, sun_longitude},
    wheel::WheelEvent,
    Jdn,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SOLAR_SAMHAIN_SCAN_DAYS: i64 = 20;

/// How close (degrees) the Sun must be to a cross-quarter longitude.
const ALIGNMENT_TOLERANCE_DEG: f64 = 2.0;

/// Lunar partner of a cross-quarter day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolilunarAlignment {
    None,
    FullMoon,
    NewMoon,
}

/// Solilunar Samhain for a Gregorian year.
///
/// Solar Samhain is the first day from Nov 1 (20-day window) with the Sun in
/// [224.5°, 225.5°], else Nov 1. If the Moon is Full or New that day, it is
/// the festival. Otherwise the festival moves to the nearest full moon: the
/// one found within 10 days ahead, or the previous one if that is more than
/// a week away and the previous is closer.
pub fn find_solilunar_samhain(gregorian_year: i32) -> Jdn {
    let nov1 = civil_to_jdn(gregorian_year, 11, 1);
    let solar = first_day_in_longitude_window(
        nov1,
        SOLAR_SAMHAIN_SCAN_DAYS,
        SAMHAIN_LONGITUDE - 0.5,
        SAMHAIN_LONGITUDE + 0.5,
    )
    .unwrap_or_else(|| {
        debug!(gregorian_year, "no solar Samhain in window, using Nov 1");
        nov1
    });

    if matches!(moon_phase(solar), MoonPhase::Full | MoonPhase::New) {
        return solar;
    }

    let ahead = find_full_moon_before(solar + 10);
    let days_ahead = ahead - solar;
    if days_ahead > 7 {
        let behind = find_full_moon_before(solar - 1);
        if solar - behind < days_ahead {
            return behind;
        }
    }
    ahead
}

/// Whether `jdn` is a solilunar festival, and with which lunar phase.
pub fn is_solilunar_festival(jdn: Jdn) -> SolilunarAlignment {
    let sun = sun_longitude(jdn);
    let at_cross_quarter = WheelEvent::CROSS_QUARTERS
        .iter()
        .any(|event| angular_delta(sun, event.longitude()).abs() <= ALIGNMENT_TOLERANCE_DEG);
    if !at_cross_quarter {
        return SolilunarAlignment::None;
    }
    match moon_phase(jdn) {
        MoonPhase::Full => SolilunarAlignment::FullMoon,
        MoonPhase::New => SolilunarAlignment::NewMoon,
        _ => SolilunarAlignment::None,
    }
}

/// The solilunar Samhain on or after `jdn`: this Gregorian year's, or next
/// year's once it has passed.
pub fn next_solilunar_samhain(jdn: Jdn) -> Jdn {
    let year = gregorian_year(jdn);
    let festival = find_solilunar_samhain(year);
    if festival < jdn {
        find_solilunar_samhain(year + 1)
    } else {
        festival
    }
}

/// Days until the next solilunar Samhain.
pub fn days_to_solilunar_samhain(jdn: Jdn) -> i32 {
    (next_solilunar_samhain(jdn) - jdn) as i32
}
