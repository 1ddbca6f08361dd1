//! Measurement stations
//!
//! A station is a named registry of sensors. Lookups are linear scans over
//! the registry, which keeps insertion order for iteration.

use core::fmt;

use crate::constants::INITIAL_SENSOR_CAPACITY;
use crate::errors::{MonitoringError, MonitoringResult};
use crate::prelude::*;
use crate::sensor::Sensor;
use crate::time::Timestamp;

/// Named group of sensors, unique by identifier
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    sensors: Vec<Sensor>,
}

impl Station {
    /// Stations are only created through [`City::add_station`](crate::City::add_station)
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sensors: Vec::with_capacity(INITIAL_SENSOR_CAPACITY),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered sensors in insertion order
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Sensor with the given identifier
    pub fn sensor(&self, id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|sensor| sensor.id() == id)
    }

    fn sensor_mut(&mut self, id: &str) -> Option<&mut Sensor> {
        self.sensors.iter_mut().find(|sensor| sensor.id() == id)
    }

    /// Register a sensor
    ///
    /// Returns `false` and drops `sensor` when one with the same identifier
    /// is already registered.
    pub fn add_sensor(&mut self, sensor: Sensor) -> bool {
        if self.sensor(sensor.id()).is_some() {
            return false;
        }

        self.sensors.push(sensor);
        true
    }

    /// Route a reading to one of this station's sensors
    pub fn add_measurement(
        &mut self,
        sensor_id: &str,
        value: f64,
        timestamp: Timestamp,
        unit: &str,
    ) -> MonitoringResult<bool> {
        self.sensor_mut(sensor_id)
            .ok_or_else(|| MonitoringError::sensor_not_found(sensor_id))?
            .add_measurement(value, timestamp, unit)
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station{{name='{}', numSensors={}}}", self.name, self.sensors.len())
    }
}
