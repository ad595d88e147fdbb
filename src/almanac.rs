//! # Daily Almanac Snapshot
//!
//! Runs the whole calendar pipeline once for a civil day and freezes every
//! derived value in a single serializable struct. The renderer and the JSON
//! output read only from this snapshot, so one invocation never mixes values
//! computed for two different days.
//!
//! ## Pipeline
//! 1. **Sunset rollover**: the civil day plus wall-clock hour and latitude
//!    decide the Celtic day number
//! 2. **Year coordinates**: Samhain bracket, day of year, Age
//! 3. **Month coordinates**: opening full moon, length, day of month, Coligny
//!    name and markings
//! 4. **Sky**: Sun and Moon longitude, signs and phase
//! 5. **Cycles and festivals**: Metonic position, wheel offsets, Pleiades,
//!    solilunar Samhain and the multi-day festival table
//!
//! Everything after step 1 is computed for the Celtic day, except the sunset
//! hour itself, which belongs to the civil day it was read on.

use crate::{
    calendar::{self, SamhainBounds},
    coligny,
    festivals::{self, MultiFestival},
    julian,
    lunar::{self, MoonPhase},
    metonic::MetonicPosition,
    pleiades,
    solar::{self, ZodiacSign},
    solilunar::{self, SolilunarAlignment},
    sunset,
    wheel::{self, WheelEvent},
    Jdn,
};
use serde::Serialize;

/// Signed day offset to one station of the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WheelOffset {
    pub event: WheelEvent,
    /// Positive ahead, negative already passed
    pub days: i32,
}

/// Every value the almanac shows for one day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyAlmanac {
    // Input
    pub civil_jdn: Jdn,
    pub civil_date: (i32, u32, u32),
    pub hour: f64,
    pub latitude: f64,

    // Sunset rollover
    pub sunset_hour: f64,
    pub sunset: String,
    pub after_sunset: bool,
    /// Day number actually used below; `civil_jdn + 1` after sunset
    pub celtic_jdn: Jdn,
    /// 0 = Sunday
    pub weekday: u32,

    // Year
    pub samhain: SamhainBounds,
    pub celtic_year: i32,
    pub day_of_year: i32,
    pub year_length: i32,
    pub days_remaining: i32,
    pub elapsed_fraction: f64,
    pub age: i32,
    pub year_in_age: i32,

    // Month
    pub month_index: i32,
    pub month_name: &'static str,
    pub month_abbrev: &'static str,
    pub month_start: Jdn,
    pub month_length: i32,
    pub day_of_month: i32,
    pub is_mat: bool,
    pub is_atenoux: bool,
    pub is_d_amb: bool,
    pub notation: &'static str,

    // Sky
    pub sun_longitude: f64,
    pub sun_sign: ZodiacSign,
    pub moon_longitude: f64,
    pub moon_sign: ZodiacSign,
    pub moon_phase_fraction: f64,
    pub moon_phase: MoonPhase,

    // Cycles and festivals
    pub metonic: MetonicPosition,
    pub wheel: Vec<WheelOffset>,
    pub next_wheel_event: WheelOffset,
    pub next_cross_quarter: WheelOffset,
    /// Set when the Sun stands on a station of the wheel today
    pub wheel_day: Option<WheelEvent>,
    pub days_to_pleiades_rising: i32,
    pub pleiades_rising: bool,
    pub solilunar_samhain: Jdn,
    pub days_to_solilunar_samhain: i32,
    pub solilunar: SolilunarAlignment,
    pub festival: Option<MultiFestival>,
    /// 1-based day within `festival`; 0 when there is none
    pub festival_day: i32,
}

impl DailyAlmanac {
    /// Compute the almanac for `civil_jdn` read at `hour` local solar time.
    pub fn compute(civil_jdn: Jdn, hour: f64, latitude: f64) -> Self {
        let sunset_hour = sunset::sunset_hour(civil_jdn, latitude);
        let after_sunset = sunset::is_after_sunset(civil_jdn, hour, latitude);
        let jdn = sunset::celtic_jdn_from_time(civil_jdn, hour, latitude);

        let samhain = calendar::samhain_bounds(jdn);
        let (age, year_in_age) = calendar::age_and_year_in_age(jdn);

        let month_index = calendar::lunar_celtic_month_index(jdn);
        let day_of_month = lunar::lunar_day_of_month(jdn);

        let wheel: Vec<WheelOffset> = WheelEvent::EIGHTFOLD
            .into_iter()
            .map(|event| WheelOffset {
                event,
                days: event.days_from(jdn),
            })
            .collect();
        let (event, days) = wheel::nearest_eightfold_event(jdn);
        let next_wheel_event = WheelOffset { event, days };
        let (event, days) = wheel::nearest_cross_quarter(jdn);
        let next_cross_quarter = WheelOffset { event, days };

        let solilunar_samhain = solilunar::next_solilunar_samhain(jdn);

        Self {
            civil_jdn,
            civil_date: julian::jdn_to_civil(civil_jdn),
            hour,
            latitude,

            sunset_hour,
            sunset: sunset::format_hour(sunset_hour),
            after_sunset,
            celtic_jdn: jdn,
            weekday: weekday(jdn),

            samhain,
            celtic_year: calendar::celtic_year_from_jdn(jdn),
            day_of_year: calendar::day_of_year(jdn),
            year_length: calendar::current_year_length(jdn),
            days_remaining: calendar::days_remaining(jdn),
            elapsed_fraction: calendar::elapsed_fraction(jdn),
            age,
            year_in_age,

            month_index,
            month_name: coligny::month_name(month_index),
            month_abbrev: coligny::month_abbrev(month_index),
            month_start: lunar::find_full_moon_before(jdn),
            month_length: lunar::lunar_month_length(jdn),
            day_of_month,
            is_mat: coligny::is_mat_month(month_index),
            is_atenoux: coligny::is_atenoux(day_of_month),
            is_d_amb: coligny::is_d_amb(day_of_month),
            notation: coligny::day_notation(month_index, day_of_month),

            sun_longitude: solar::sun_longitude(jdn),
            sun_sign: solar::sun_sign(jdn),
            moon_longitude: lunar::moon_longitude(jdn),
            moon_sign: lunar::moon_sign(jdn),
            moon_phase_fraction: lunar::moon_phase_fraction(jdn),
            moon_phase: lunar::moon_phase(jdn),

            metonic: MetonicPosition::at(jdn),
            wheel,
            next_wheel_event,
            next_cross_quarter,
            wheel_day: wheel::is_wheel_day(jdn),
            days_to_pleiades_rising: pleiades::days_to_pleiades_rising(jdn),
            pleiades_rising: pleiades::is_pleiades_rising(jdn),
            solilunar_samhain,
            days_to_solilunar_samhain: (solilunar_samhain - jdn) as i32,
            solilunar: solilunar::is_solilunar_festival(jdn),
            festival: festivals::multi_festival_at(month_index, day_of_month).copied(),
            festival_day: festivals::festival_day_number(month_index, day_of_month),
        }
    }

    /// Astronomical festival day: the Sun stands on a station of the wheel.
    pub fn is_festival_day(&self) -> bool {
        self.wheel.iter().any(|offset| offset.days == 0)
    }
}

/// Day of the week for a day number, 0 = Sunday.
pub fn weekday(jdn: Jdn) -> u32 {
    (jdn + 1).rem_euclid(7) as u32
}
