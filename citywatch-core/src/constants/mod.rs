//! Constants for CityWatch Core
//!
//! Every literal the identifier decoder, unit normalizer and collections
//! depend on is defined here, so the rules can be read in one place.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensors**: Identifier layout and type prefixes
//! - **Units**: Unit aliases accepted on ingestion
//! - **Buffers**: Initial collection capacities

/// Sensor identifier layout: length, type prefixes, parameter aliases.
pub mod sensors;

/// Unit spellings normalized before comparison.
pub mod units;

/// Initial capacities for the station, sensor and measurement registries.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use sensors::{
    SENSOR_ID_LENGTH, AIR_SENSOR_PREFIX, NOISE_SENSOR_PREFIX, WEATHER_SENSOR_PREFIX,
    PM25_ALIAS_TOKEN,
};

pub use units::{LATIN_MICRO_SIGN, GREEK_MICRO_SIGN, MBAR_ALIAS};

pub use buffers::{INITIAL_STATION_CAPACITY, INITIAL_SENSOR_CAPACITY, INITIAL_MEASUREMENT_CAPACITY};
