//! Sensors: identity decoding and measurement ingestion
//!
//! ## Identifier Format
//!
//! ```text
//!  Q A 0 N O 2 0 0 0 1
//!  └─┬─┘ └──────┬────┘
//!  type   contains a parameter token
//! ```
//!
//! - exactly 10 characters
//! - `QA` air quality, `RU` noise, `ME` weather
//! - the code must contain the token of one of its type's parameters, or
//!   `PM25`, which maps to PM2.5 for any type
//!
//! Type and parameter are decoded once, at construction. A code that fails
//! any step produces no sensor at all.
//!
//! ## Ingestion
//!
//! ```rust
//! use citywatch_core::sensor::{Sensor, SensorType};
//! use citywatch_core::units::Parameter;
//! use citywatch_core::coordinates::{CartesianCoordinates, GeographicCoordinates};
//! use chrono::NaiveDate;
//!
//! let mut sensor = Sensor::new(
//!     "ME00PA0078",
//!     CartesianCoordinates::new(1.0, 2.0, 0.0),
//!     GeographicCoordinates::new(41.15, -8.61),
//! )?;
//! assert_eq!(sensor.sensor_type(), SensorType::Weather);
//! assert_eq!(sensor.parameter(), Parameter::Pa);
//!
//! let t = NaiveDate::from_ymd_opt(2021, 12, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert!(sensor.add_measurement(1013.2, t, "Mbar")?);
//! assert!(!sensor.add_measurement(1013.2, t, "mbar")?); // same reading again
//! # Ok::<(), citywatch_core::MonitoringError>(())
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_SENSOR_PREFIX, INITIAL_MEASUREMENT_CAPACITY, NOISE_SENSOR_PREFIX, PM25_ALIAS_TOKEN,
    SENSOR_ID_LENGTH, WEATHER_SENSOR_PREFIX,
};
use crate::coordinates::{CartesianCoordinates, GeographicCoordinates};
use crate::errors::{MonitoringError, MonitoringResult, Scope};
use crate::measurement::Measurement;
use crate::prelude::*;
use crate::time::Timestamp;
use crate::units::{normalize_unit_label, Parameter, Unit};

/// Coarse sensor category, selected by the identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorType {
    Air,
    Noise,
    Weather,
}

impl SensorType {
    /// Decode the type from an identifier prefix
    pub fn from_identifier(id: &str) -> Option<SensorType> {
        [SensorType::Air, SensorType::Noise, SensorType::Weather]
            .into_iter()
            .find(|sensor_type| id.starts_with(sensor_type.prefix()))
    }

    /// Two-letter identifier prefix
    pub const fn prefix(&self) -> &'static str {
        match self {
            SensorType::Air => AIR_SENSOR_PREFIX,
            SensorType::Noise => NOISE_SENSOR_PREFIX,
            SensorType::Weather => WEATHER_SENSOR_PREFIX,
        }
    }

    /// Parameters this type measures, in decoding priority order
    pub const fn parameters(&self) -> &'static [Parameter] {
        match self {
            SensorType::Air => &[
                Parameter::No2,
                Parameter::O3,
                Parameter::Pm2_5,
                Parameter::Pm10,
                Parameter::So2,
                Parameter::C6h6,
                Parameter::Co,
            ],
            SensorType::Noise => &[Parameter::Laeq],
            SensorType::Weather => &[Parameter::Temp, Parameter::Hum, Parameter::Pa],
        }
    }

    /// Find the measured parameter in an identifier
    ///
    /// The first of [`parameters`](Self::parameters) whose token occurs in
    /// the code wins. Failing that, `PM25` anywhere in the code yields PM2.5
    /// even when this type doesn't list it.
    pub fn decode_parameter(&self, id: &str) -> Option<Parameter> {
        self.parameters()
            .iter()
            .copied()
            .find(|parameter| id.contains(parameter.token()))
            .or_else(|| id.contains(PM25_ALIAS_TOKEN).then_some(Parameter::Pm2_5))
    }

    /// Whether readings of this type carry their unit and parameter
    pub const fn tags_measurements(&self) -> bool {
        matches!(self, SensorType::Weather)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SensorType::Air => "AIR",
            SensorType::Noise => "NOISE",
            SensorType::Weather => "WEATHER",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier length check shared with the city's pre-validation
pub fn is_identifier_length_valid(id: &str) -> bool {
    id.chars().count() == SENSOR_ID_LENGTH
}

/// A sensor and the readings it accumulated
///
/// ## Invariants
///
/// - `sensor_type` and `parameter` never change after construction
/// - every stored reading was accepted in `parameter.unit()`
/// - no two stored readings are equal; insertion order is preserved
#[derive(Debug, Clone)]
pub struct Sensor {
    id: String,
    sensor_type: SensorType,
    parameter: Parameter,
    cartesian: CartesianCoordinates,
    geographic: GeographicCoordinates,
    measurements: Vec<Measurement>,
}

impl Sensor {
    /// Decode an identifier and build an empty sensor
    pub fn new(
        id: &str,
        cartesian: CartesianCoordinates,
        geographic: GeographicCoordinates,
    ) -> MonitoringResult<Self> {
        if !is_identifier_length_valid(id) {
            return Err(MonitoringError::InvalidIdentifierLength {
                scope: Scope::Sensor,
                id: id.to_string(),
                length: id.chars().count(),
            });
        }

        let sensor_type = SensorType::from_identifier(id)
            .ok_or_else(|| MonitoringError::UnrecognizedSensorType { id: id.to_string() })?;

        let parameter = sensor_type
            .decode_parameter(id)
            .ok_or_else(|| MonitoringError::UnrecognizedParameter {
                id: id.to_string(),
                sensor_type,
            })?;

        Ok(Self {
            id: id.to_string(),
            sensor_type,
            parameter,
            cartesian,
            geographic,
            measurements: Vec::with_capacity(INITIAL_MEASUREMENT_CAPACITY),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn cartesian_coordinates(&self) -> CartesianCoordinates {
        self.cartesian
    }

    pub fn geographic_coordinates(&self) -> GeographicCoordinates {
        self.geographic
    }

    /// Stored readings in insertion order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    /// Validate the unit and store a reading
    ///
    /// Returns `Ok(false)` without storing anything when an equal reading is
    /// already present. A unit error leaves the sensor unchanged.
    pub fn add_measurement(
        &mut self,
        value: f64,
        timestamp: Timestamp,
        unit: &str,
    ) -> MonitoringResult<bool> {
        let unit = self.accept_unit(unit)?;

        let measurement = if self.sensor_type.tags_measurements() {
            Measurement::tagged(value, timestamp, unit, self.parameter)
        } else {
            Measurement::new(value, timestamp)
        };

        if self.measurements.contains(&measurement) {
            return Ok(false);
        }

        self.measurements.push(measurement);
        Ok(true)
    }

    fn accept_unit(&self, unit: &str) -> MonitoringResult<Unit> {
        let normalized = normalize_unit_label(unit);
        let expected = self.parameter.unit();

        match Unit::from_label(&normalized) {
            Some(found) if found == expected => Ok(found),
            _ => Err(MonitoringError::UnitMismatch {
                sensor_id: self.id.clone(),
                expected,
                found: normalized,
            }),
        }
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sensor {}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sensor{{type={}, parameter={}, unit={}, sensorId='{}', cartesianCoordinates={}, geographicCoordinates={}, numMeasurements={}}}",
            self.sensor_type,
            self.parameter,
            self.parameter.unit(),
            self.id,
            self.cartesian,
            self.geographic,
            self.measurements.len(),
        )
    }
}
