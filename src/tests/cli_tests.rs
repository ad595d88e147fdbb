//! Command-line parsing and the choice of day, hour and latitude.

use crate::Cli;
use celtic_almanac_lib::{config::Config, julian};
use chrono::NaiveDate;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("celtic-almanac").chain(args.iter().copied()))
}

#[test]
fn explicit_date_is_reckoned_at_noon() {
    let cli = parse(&["2025", "11", "7"]).unwrap();
    let (jdn, hour) = cli.moment().unwrap();
    assert_eq!(jdn, julian::civil_to_jdn(2025, 11, 7));
    assert_eq!(hour, 12.0);
    assert!(!cli.json);
    assert_eq!(cli.config, Path::new("celtic-config.toml"));
}

#[test]
fn hour_flag_overrides_default() {
    let cli = parse(&["2025", "11", "6", "--hour", "21.5"]).unwrap();
    let (_, hour) = cli.moment().unwrap();
    assert_eq!(hour, 21.5);
}

#[test]
fn out_of_range_hour_is_rejected() {
    let cli = parse(&["2025", "11", "6", "--hour", "25"]).unwrap();
    assert!(cli.moment().is_err());
}

#[test]
fn partial_date_is_rejected() {
    assert!(parse(&["2025"]).is_err());
    assert!(parse(&["2025", "11"]).is_err());
}

#[test]
fn impossible_date_is_rejected() {
    let cli = parse(&["2025", "2", "30"]).unwrap();
    let err = cli.moment().unwrap_err();
    assert!(format!("{err:#}").contains("invalid date 2025-02-30"));
}

#[test]
fn no_date_uses_today() {
    let cli = parse(&[]).unwrap();
    let (jdn, hour) = cli.moment().unwrap();
    assert!((jdn - julian::today_jdn()).abs() <= 1);
    assert!((0.0..=24.0).contains(&hour));
}

#[test]
fn clock_date_and_hour_come_from_the_same_reading() {
    let now = NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    let cli = parse(&[]).unwrap();
    assert_eq!(
        cli.moment_at(now).unwrap(),
        (julian::civil_to_jdn(2025, 3, 14), 21.5)
    );

    let cli = parse(&["2025", "11", "7"]).unwrap();
    assert_eq!(
        cli.moment_at(now).unwrap(),
        (julian::civil_to_jdn(2025, 11, 7), 12.0)
    );
}

#[test]
fn latitude_flag_overrides_config() {
    let config = Config::default();
    let cli = parse(&["--latitude", "-33.9", "--json"]).unwrap();
    assert_eq!(cli.latitude(&config).unwrap(), -33.9);
    assert!(cli.json);

    let cli = parse(&[]).unwrap();
    assert_eq!(cli.latitude(&config).unwrap(), 46.38);

    let cli = parse(&["--latitude", "91"]).unwrap();
    assert!(cli.latitude(&config).is_err());
}
