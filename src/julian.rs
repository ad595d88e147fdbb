//! # Julian Day Conversion
//!
//! Proleptic Gregorian dates to Julian Day Numbers and back. The forward
//! conversion is the Meeus algorithm with integer truncation, which puts
//! 2000-01-01 at JDN 2 451 545 (the J2000.0 noon).

use crate::{error::AlmanacError, Jdn};
use chrono::{Datelike, Local, NaiveDate};

/// Convert a proleptic Gregorian `(year, month, day)` to a Julian Day Number.
///
/// January and February count as months 13 and 14 of the previous year, and
/// the century term applies the Gregorian leap-year correction.
///
/// No validation is performed: `month = 13` or `day = 40` still yield a
/// consistent number, it just does not name a real date. Use
/// [`checked_civil_to_jdn`] when the input comes from a user.
///
/// # Example
/// ```
/// use celtic_almanac_lib::julian::civil_to_jdn;
///
/// assert_eq!(civil_to_jdn(2000, 1, 1), 2_451_545);
/// assert_eq!(civil_to_jdn(2000, 1, 2), 2_451_546);
/// ```
pub fn civil_to_jdn(year: i32, month: i32, day: i32) -> Jdn {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y / 100;
    let b = 2 - a + a / 4;
    (365.25 * (y + 4716) as f64) as i64 + (30.6001 * (m + 1) as f64) as i64 + day as i64 + b
        - 1524
}

/// Like [`civil_to_jdn`], but rejects dates that do not exist.
pub fn checked_civil_to_jdn(year: i32, month: u32, day: u32) -> Result<Jdn, AlmanacError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date_to_jdn(&date))
        .ok_or(AlmanacError::InvalidDate { year, month, day })
}

/// Day number of any chrono date or datetime.
pub fn date_to_jdn<D: Datelike>(date: &D) -> Jdn {
    civil_to_jdn(date.year(), date.month() as i32, date.day() as i32)
}

/// Day number of the current local date.
pub fn today_jdn() -> Jdn {
    date_to_jdn(&Local::now())
}

/// Convert a day number back to a Gregorian `(year, month, day)`.
///
/// Inverse of [`civil_to_jdn`] on the proleptic Gregorian calendar. The
/// year is what the Samhain searches need; month and day come for free.
pub fn jdn_to_civil(jdn: Jdn) -> (i32, u32, u32) {
    let z = jdn as f64;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u32;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day)
}

/// Gregorian year containing `jdn`.
pub fn gregorian_year(jdn: Jdn) -> i32 {
    jdn_to_civil(jdn).0
}
