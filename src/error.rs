//! # Error Types
//!
//! The astronomical core is total and never returns an error. Failures only
//! arise at the edges: validating a civil date typed on the command line and
//! writing the configuration file.

use std::io;
use thiserror::Error;

/// Errors raised at the boundaries of the almanac.
#[derive(Error, Debug)]
pub enum AlmanacError {
    /// The civil date does not exist on the proleptic Gregorian calendar
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Configuration file could not be written
    #[error("config IO: {0}")]
    ConfigIo(#[from] io::Error),

    /// Configuration could not be serialized to TOML
    #[error("config format: {0}")]
    ConfigFormat(#[from] toml::ser::Error),
}
