//! # Celtic Almanac Application Entry Point
//!
//! This binary crate parses the command line, loads the configuration, computes
//! the almanac for the requested day and prints it either as the boxed terminal
//! view or as JSON.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{bail, Context};
use celtic_almanac_lib::{config::Config, julian, renderer::draw_ascii, DailyAlmanac, Jdn};
use chrono::{Local, NaiveDateTime, Timelike};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Hour of day assumed when an explicit date is given
const EXPLICIT_DATE_HOUR: f64 = 12.0;

#[derive(Parser, Debug)]
#[command(name = "celtic-almanac")]
#[command(about = "Lunisolar Celtic calendar in the manner of the Coligny tablet")]
#[command(version)]
pub struct Cli {
    /// Gregorian year (defaults to today)
    #[arg(requires = "month", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Gregorian month, 1-12
    #[arg(requires = "day")]
    pub month: Option<u32>,

    /// Day of month
    pub day: Option<u32>,

    /// Hour of day in local solar time, 0-24 (defaults to noon for an explicit
    /// date, the wall clock otherwise)
    #[arg(long)]
    pub hour: Option<f64>,

    /// Latitude in degrees, overriding the configuration
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Configuration file
    #[arg(long, default_value = celtic_almanac_lib::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the almanac as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Day number and hour of day to reckon from, using the local clock.
    pub fn moment(&self) -> anyhow::Result<(Jdn, f64)> {
        self.moment_at(Local::now().naive_local())
    }

    /// Like [`Cli::moment`], with `now` standing in for the local clock. Date
    /// and hour both come from `now`.
    pub fn moment_at(&self, now: NaiveDateTime) -> anyhow::Result<(Jdn, f64)> {
        let (jdn, default_hour) = match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => {
                let jdn = julian::checked_civil_to_jdn(year, month, day)
                    .context("date given on the command line")?;
                (jdn, EXPLICIT_DATE_HOUR)
            }
            _ => {
                let hour = now.hour() as f64 + now.minute() as f64 / 60.0;
                (julian::date_to_jdn(&now), hour)
            }
        };

        let hour = self.hour.unwrap_or(default_hour);
        if !(0.0..=24.0).contains(&hour) {
            bail!("hour {hour} is outside 0-24");
        }
        Ok((jdn, hour))
    }

    /// Latitude from the flag, else from the configuration.
    pub fn latitude(&self, config: &Config) -> anyhow::Result<f64> {
        let latitude = self.latitude.unwrap_or(config.location.latitude);
        if !(-90.0..=90.0).contains(&latitude) {
            bail!("latitude {latitude} is outside -90..90");
        }
        Ok(latitude)
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::load_from_path(&cli.config);
    let (jdn, hour) = cli.moment()?;
    let latitude = cli.latitude(&config)?;
    debug!(jdn, hour, latitude, "computing almanac");

    let almanac = DailyAlmanac::compute(jdn, hour, latitude);

    if cli.json {
        let json = serde_json::to_string_pretty(&almanac).context("serialize almanac")?;
        println!("{json}");
    } else {
        draw_ascii(&almanac, &config);
    }
    Ok(())
}
