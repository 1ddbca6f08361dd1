//! Error Types for Hierarchy Mutations
//!
//! ## Design Philosophy
//!
//! Every failure the core can produce is a structurally invalid input. The
//! error carries enough context (which entity, which identifier, which unit)
//! for the surrounding application to report it without querying the city
//! again.
//!
//! Re-adding something that already exists is *not* an error: the add
//! operations return `Ok(false)` and leave the hierarchy untouched.
//!
//! ## Error Categories
//!
//! ### Lookup Failures
//! - `InvalidName`: a required station name or sensor id is empty
//! - `EntityNotFound`: the referenced station or sensor does not exist
//!
//! ### Identifier Decoding
//! - `InvalidIdentifierLength`: sensor code is not exactly 10 characters
//! - `UnrecognizedSensorType`: code prefix is not `QA`, `RU` or `ME`
//! - `UnrecognizedParameter`: no parameter token found in the code
//!
//! ### Measurement Ingestion
//! - `UnitMismatch`: reading unit differs from the sensor parameter's unit
//!
//! ## Propagation
//!
//! ```rust
//! use citywatch_core::{City, MonitoringError};
//! use citywatch_core::coordinates::{CartesianCoordinates, GeographicCoordinates};
//!
//! let mut city = City::new("Porto");
//! city.add_station("Centro")?;
//!
//! let result = city.add_sensor(
//!     "Centro",
//!     "QA0NO2",
//!     CartesianCoordinates::default(),
//!     GeographicCoordinates::default(),
//! );
//! assert!(matches!(result, Err(MonitoringError::InvalidIdentifierLength { .. })));
//! # Ok::<(), MonitoringError>(())
//! ```

use core::fmt;

use thiserror_no_std::Error;

use crate::prelude::*;
use crate::sensor::SensorType;
use crate::units::Unit;

/// Result type for hierarchy operations
pub type MonitoringResult<T> = Result<T, MonitoringError>;

/// Kind of hierarchy member an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Station,
    Sensor,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Station => f.write_str("station"),
            Entity::Sensor => f.write_str("sensor"),
        }
    }
}

/// Layer that rejected an identifier
///
/// The city pre-checks identifier length before building a sensor and
/// reports it as `Station`; a sensor constructed directly reports `Sensor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Station,
    Sensor,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Station => f.write_str("station"),
            Scope::Sensor => f.write_str("sensor"),
        }
    }
}

/// Errors raised while building or feeding the hierarchy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonitoringError {
    /// A required name or identifier was empty
    #[error("{entity} name can't be empty")]
    InvalidName {
        /// What the name was meant to identify
        entity: Entity,
    },

    /// Referenced station or sensor does not exist
    #[error("{entity} '{name}' not found")]
    EntityNotFound {
        /// Kind of the missing member
        entity: Entity,
        /// Name or identifier that was looked up
        name: String,
    },

    /// Sensor identifier is not exactly 10 characters long
    #[error("[{scope}] sensor id '{id}' has {length} characters, expected 10")]
    InvalidIdentifierLength {
        /// Layer that performed the check
        scope: Scope,
        /// Offending identifier
        id: String,
        /// Its length in characters
        length: usize,
    },

    /// Identifier prefix does not name a known sensor type
    #[error("sensor type couldn't be identified from '{id}'")]
    UnrecognizedSensorType {
        id: String,
    },

    /// Identifier contains no parameter token of its sensor type
    #[error("{sensor_type} sensor parameter couldn't be identified from '{id}'")]
    UnrecognizedParameter {
        id: String,
        sensor_type: SensorType,
    },

    /// Reading unit does not match the sensor's parameter
    #[error("invalid unit '{found}' for sensor {sensor_id}, expected {expected}")]
    UnitMismatch {
        sensor_id: String,
        /// Canonical unit of the sensor's parameter
        expected: Unit,
        /// Unit as supplied, after normalization
        found: String,
    },
}

impl MonitoringError {
    pub(crate) fn station_not_found(name: &str) -> Self {
        Self::EntityNotFound {
            entity: Entity::Station,
            name: name.to_string(),
        }
    }

    pub(crate) fn sensor_not_found(id: &str) -> Self {
        Self::EntityNotFound {
            entity: Entity::Sensor,
            name: id.to_string(),
        }
    }
}
