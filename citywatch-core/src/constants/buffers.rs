//! Initial Collection Capacities
//!
//! Registries grow by doubling once full, so these only size the first
//! allocation.

/// Stations reserved when a city is created.
pub const INITIAL_STATION_CAPACITY: usize = 10;

/// Sensors reserved when a station is created.
pub const INITIAL_SENSOR_CAPACITY: usize = 10;

/// Measurements reserved when a sensor is created.
pub const INITIAL_MEASUREMENT_CAPACITY: usize = 10;
