//! Shared fixtures for integration tests
//!
//! - timestamp helpers on a fixed day
//! - a small two-station network with known readings

#![allow(dead_code)]

use chrono::NaiveDate;
use citywatch_core::coordinates::{CartesianCoordinates, GeographicCoordinates};
use citywatch_core::{City, MonitoringResult, Timestamp};

/// Canonical air-quality unit label
pub const UG_M3: &str = "\u{03BC}g/m3";

/// Same label spelled with the MICRO SIGN, as some feeds send it
pub const UG_M3_LATIN: &str = "\u{00B5}g/m3";

/// 2021-12-01 at `hour`:00
pub fn at(hour: u32) -> Timestamp {
    at_minute(hour, 0)
}

pub fn at_minute(hour: u32, minute: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2021, 12, 1)
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .expect("valid fixture timestamp")
}

pub fn add_sensor(city: &mut City, station: &str, id: &str) -> MonitoringResult<bool> {
    city.add_sensor(
        station,
        id,
        CartesianCoordinates::new(0.0, 0.0, 0.0),
        GeographicCoordinates::new(41.1579, -8.6291),
    )
}

/// Porto with two stations
///
/// | Station  | Sensor     | Readings (hour: value)   |
/// |----------|------------|--------------------------|
/// | Centro   | QA0NO20001 | 1: 12.0, 2: 15.0         |
/// | Centro   | ME00PA0078 | 1: 1012.0, 3: 1009.5     |
/// | Boavista | QA0NO20002 | 6: 40.0                  |
/// | Boavista | QA0NO20003 | none                     |
pub fn porto() -> City {
    let mut city = City::new("Porto");
    city.add_station("Centro").expect("station");
    city.add_station("Boavista").expect("station");

    add_sensor(&mut city, "Centro", "QA0NO20001").expect("sensor");
    add_sensor(&mut city, "Centro", "ME00PA0078").expect("sensor");
    add_sensor(&mut city, "Boavista", "QA0NO20002").expect("sensor");
    add_sensor(&mut city, "Boavista", "QA0NO20003").expect("sensor");

    city.add_measurement("Centro", "QA0NO20001", 12.0, UG_M3, at(1)).expect("reading");
    city.add_measurement("Centro", "QA0NO20001", 15.0, UG_M3, at(2)).expect("reading");
    city.add_measurement("Centro", "ME00PA0078", 1012.0, "mbar", at(1)).expect("reading");
    city.add_measurement("Centro", "ME00PA0078", 1009.5, "Mbar", at(3)).expect("reading");
    city.add_measurement("Boavista", "QA0NO20002", 40.0, UG_M3, at(6)).expect("reading");
    city
}
