//! Core monitoring model for CityWatch
//!
//! Models a municipality's environmental-monitoring network (city, stations,
//! typed sensors, timestamped readings) and computes per-sensor statistics
//! over it.
//!
//! Key properties:
//! - Sensor type and parameter are decoded from the identifier code
//! - Readings are validated against the parameter's unit and deduplicated
//! - Single-threaded, in-memory, no I/O
//!
//! ```no_run
//! use citywatch_core::{AggregationOperator, City};
//! use citywatch_core::coordinates::{CartesianCoordinates, GeographicCoordinates};
//! use citywatch_core::units::Parameter;
//!
//! let mut city = City::new("Porto");
//! city.add_station("Centro")?;
//! city.add_sensor("Centro", "QA0NO20001", CartesianCoordinates::default(), GeographicCoordinates::default())?;
//!
//! // Feed readings, then ask for one average per NO2 sensor
//! for stat in city.statistics_by_station(AggregationOperator::Avg, Parameter::No2) {
//!     println!("{stat}");
//! }
//! # Ok::<(), citywatch_core::MonitoringError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod logging;

pub mod city;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod measurement;
pub mod sensor;
pub mod station;
pub mod statistics;
pub mod time;
pub mod units;

// Public API
pub use city::City;
pub use errors::{MonitoringError, MonitoringResult};
pub use measurement::Measurement;
pub use sensor::{Sensor, SensorType};
pub use station::Station;
pub use statistics::{AggregationOperator, QueryScope, Statistic};
pub use time::{TimeWindow, Timestamp};
pub use units::{Parameter, Unit};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Owned string and vector types for both `std` and `alloc` builds
mod prelude {
    #[cfg(not(feature = "std"))]
    pub use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    #[cfg(feature = "std")]
    pub use std::{
        string::{String, ToString},
        vec::Vec,
    };
}
