//! # Celtic Almanac Core Library
//!
//! This library computes a lunisolar "Celtic" calendar loosely modeled on the
//! Coligny tablet. Every value is derived on demand from a Julian Day Number,
//! using low-order astronomical approximations for the Sun and the Moon.
//!
//! ## Design Philosophy
//!
//! ### Pure functions over day numbers
//! - **Stateless**: every function maps an integer [`Jdn`] (plus, where needed,
//!   a latitude or hour of day) to a number or a small enum
//! - **Total**: no computation can fail; pathological inputs (polar latitudes,
//!   dates far from the epoch) fall back to documented clamp values
//! - **Bounded**: all searches scan fixed windows of days, so every call
//!   terminates in a handful of iterations
//!
//! ### Calendar model
//! The year opens at astronomical Samhain (Sun at 225° ecliptic longitude) and
//! months open at full moons. The day itself begins at sunset, so an evening
//! reading belongs to the next Celtic day.
//!
//! ### Data Flow
//! 1. **Civil date** → [`julian::civil_to_jdn`]
//! 2. **Sunset rollover** → [`sunset::celtic_jdn_from_time`]
//! 3. **Year/month coordinates** → [`calendar`] and [`lunar`]
//! 4. **Independent queries** → [`metonic`], [`wheel`], [`pleiades`], [`solilunar`]
//! 5. **Snapshot** → [`almanac::DailyAlmanac`], consumed by [`renderer`]
//!
//! ## Example
//! ```
//! use celtic_almanac_lib::{julian, solar};
//!
//! let jdn = julian::civil_to_jdn(2000, 1, 1);
//! assert_eq!(jdn, 2_451_545);
//!
//! let lon = solar::sun_longitude(jdn);
//! assert!((0.0..360.0).contains(&lon));
//! ```

// Module declarations
pub mod almanac;
pub mod calendar;
pub mod coligny;
pub mod config;
pub mod error;
pub mod festivals;
pub mod julian;
pub mod lunar;
pub mod metonic;
pub mod pleiades;
pub mod renderer;
pub mod solar;
pub mod solilunar;
pub mod sunset;
pub mod wheel;

pub use almanac::DailyAlmanac;
pub use error::AlmanacError;
pub use lunar::MoonPhase;
pub use solar::ZodiacSign;
pub use wheel::WheelEvent;

/// Julian Day Number: whole days since the Julian epoch, noon-referenced.
///
/// Adding `n` to a day number moves `n` civil days forward; every module
/// relies on that, so plain integer arithmetic is the day arithmetic.
pub type Jdn = i64;

/// Julian Day Number of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;
