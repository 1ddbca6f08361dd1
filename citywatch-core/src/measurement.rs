//! Immutable sensor readings
//!
//! A measurement has no identifier of its own. Two readings are the same
//! reading when every field matches, and that equality is what a sensor
//! deduplicates on.

use core::fmt;
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;
use crate::units::{Parameter, Unit};

/// Unit and parameter stamped on readings of sensors that record them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementTag {
    pub unit: Unit,
    pub parameter: Parameter,
}

/// Single timestamped reading
///
/// Equality and hashing compare the value by bit pattern, so the relation
/// is total: a NaN reading equals an identical NaN reading, while `0.0` and
/// `-0.0` are distinct readings.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    value: f64,
    timestamp: Timestamp,
    tag: Option<MeasurementTag>,
}

impl Measurement {
    /// Untagged reading
    pub const fn new(value: f64, timestamp: Timestamp) -> Self {
        Self {
            value,
            timestamp,
            tag: None,
        }
    }

    /// Reading carrying the unit it was accepted in and the sensor parameter
    pub const fn tagged(value: f64, timestamp: Timestamp, unit: Unit, parameter: Parameter) -> Self {
        Self {
            value,
            timestamp,
            tag: Some(MeasurementTag { unit, parameter }),
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub const fn tag(&self) -> Option<MeasurementTag> {
        self.tag
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
            && self.timestamp == other.timestamp
            && self.tag == other.tag
    }
}

impl Eq for Measurement {}

impl Hash for Measurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.timestamp.hash(state);
        self.tag.hash(state);
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Measurement{{value={}, time={}", self.value, self.timestamp)?;
        if let Some(tag) = self.tag {
            write!(f, ", unit={}, parameter={}", tag.unit, tag.parameter)?;
        }
        f.write_str("}")
    }
}
