//! City Statistics Example
//!
//! Builds a small monitoring network and prints the four statistics for
//! its NO2 sensors, over the whole day and over a morning window.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_city_statistics
//! ```

use chrono::NaiveDate;
use citywatch_core::{
    coordinates::{CartesianCoordinates, GeographicCoordinates},
    AggregationOperator, City, MonitoringError, Parameter, QueryScope, TimeWindow,
};

const OPERATORS: [AggregationOperator; 4] = [
    AggregationOperator::Avg,
    AggregationOperator::Count,
    AggregationOperator::Max,
    AggregationOperator::Min,
];

fn main() -> Result<(), MonitoringError> {
    println!("CityWatch City Statistics Example");
    println!("=================================\n");

    let day = NaiveDate::from_ymd_opt(2021, 12, 1).expect("valid date");
    let at = |hour| day.and_hms_opt(hour, 0, 0).expect("valid time");

    let mut city = City::new("Porto");
    city.add_station("Centro")?;
    city.add_station("Boavista")?;

    city.add_sensor(
        "Centro",
        "QA0NO20001",
        CartesianCoordinates::new(12.0, 4.5, 3.0),
        GeographicCoordinates::new(41.1466, -8.6110),
    )?;
    city.add_sensor(
        "Boavista",
        "QA0NO20002",
        CartesianCoordinates::new(-3.0, 8.0, 2.5),
        GeographicCoordinates::new(41.1579, -8.6291),
    )?;

    let readings = [
        ("Centro", "QA0NO20001", 12.0, 7),
        ("Centro", "QA0NO20001", 31.5, 9),
        ("Centro", "QA0NO20001", 18.0, 14),
        ("Boavista", "QA0NO20002", 22.0, 8),
        // micro sign spelling from an older feed
        ("Boavista", "QA0NO20002", 26.5, 16),
    ];
    for (station, sensor, value, hour) in readings {
        let unit = if hour == 16 { "\u{00B5}g/m3" } else { "\u{03BC}g/m3" };
        city.add_measurement(station, sensor, value, unit, at(hour))?;
    }

    // Rejected reading: wrong unit for an NO2 sensor
    match city.add_measurement("Centro", "QA0NO20001", 1.0, "dB", at(10)) {
        Err(err) => println!("Rejected: {err}\n"),
        Ok(_) => println!("Unexpectedly accepted\n"),
    }

    println!("{city}");
    for station in city.stations() {
        println!("  {station}");
        for sensor in station.sensors() {
            println!("    {sensor}");
        }
    }
    println!();

    println!("Whole day:");
    for operator in OPERATORS {
        for stat in city.statistics_by_station(operator, Parameter::No2) {
            println!("  {operator:>5}  {stat}");
        }
    }

    let morning = TimeWindow::new(at(6), at(12));
    println!("\nMorning {morning}:");
    for operator in OPERATORS {
        for stat in city.aggregate(QueryScope::City, operator, Parameter::No2, Some(morning)) {
            println!("  {operator:>5}  {stat}");
        }
    }

    Ok(())
}
