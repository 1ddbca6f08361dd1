//! Units and Measured Parameters
//!
//! The catalogue is closed: every parameter a sensor can decode has exactly
//! one canonical unit, and readings are accepted only in that unit.
//!
//! | Parameter | Token   | Unit   |
//! |-----------|---------|--------|
//! | NO2       | `NO2`   | μg/m3  |
//! | O3        | `O3`    | μg/m3  |
//! | PM2.5     | `PM2.5` | μg/m3  |
//! | PM10      | `PM10`  | μg/m3  |
//! | SO2       | `SO2`   | μg/m3  |
//! | C6H6      | `C6H6`  | μg/m3  |
//! | CO        | `CO`    | mg/m3  |
//! | LAEQ      | `LAEQ`  | dB     |
//! | TEMP      | `TEMP`  | ºC     |
//! | HUM       | `HUM`   | %      |
//! | PA        | `PA`    | mbar   |

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{GREEK_MICRO_SIGN, LATIN_MICRO_SIGN, MBAR_ALIAS};
use crate::prelude::*;

/// Unit of measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    MicrogramPerCubicMetre,
    MilligramPerCubicMetre,
    Decibel,
    Celsius,
    Millibar,
    Percent,
}

impl Unit {
    const ALL: [Unit; 6] = [
        Unit::MicrogramPerCubicMetre,
        Unit::MilligramPerCubicMetre,
        Unit::Decibel,
        Unit::Celsius,
        Unit::Millibar,
        Unit::Percent,
    ];

    /// Canonical label
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::MicrogramPerCubicMetre => "\u{03BC}g/m3",
            Unit::MilligramPerCubicMetre => "mg/m3",
            Unit::Decibel => "dB",
            Unit::Celsius => "ºC",
            Unit::Millibar => "mbar",
            Unit::Percent => "%",
        }
    }

    /// Exact label lookup, `None` for anything not in the catalogue
    pub fn from_label(label: &str) -> Option<Unit> {
        Self::ALL.into_iter().find(|unit| unit.label() == label)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bring a reading's unit label to canonical spelling
///
/// A label starting with the micro sign gets every micro sign replaced by
/// the Greek mu, and the exact string `Mbar` becomes `mbar`. Nothing else is
/// touched.
pub fn normalize_unit_label(label: &str) -> String {
    let label = if label.starts_with(LATIN_MICRO_SIGN) {
        label.replace(LATIN_MICRO_SIGN, &GREEK_MICRO_SIGN.to_string())
    } else {
        label.to_string()
    };

    if label == MBAR_ALIAS {
        label.to_lowercase()
    } else {
        label
    }
}

/// Physical quantity a sensor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parameter {
    No2,
    O3,
    Pm2_5,
    Pm10,
    So2,
    C6h6,
    Co,
    Laeq,
    Temp,
    Hum,
    Pa,
}

impl Parameter {
    /// Token searched for in sensor identifiers, also the display label
    pub const fn token(&self) -> &'static str {
        match self {
            Parameter::No2 => "NO2",
            Parameter::O3 => "O3",
            Parameter::Pm2_5 => "PM2.5",
            Parameter::Pm10 => "PM10",
            Parameter::So2 => "SO2",
            Parameter::C6h6 => "C6H6",
            Parameter::Co => "CO",
            Parameter::Laeq => "LAEQ",
            Parameter::Temp => "TEMP",
            Parameter::Hum => "HUM",
            Parameter::Pa => "PA",
        }
    }

    /// Canonical unit readings must arrive in
    pub const fn unit(&self) -> Unit {
        match self {
            Parameter::No2
            | Parameter::O3
            | Parameter::Pm2_5
            | Parameter::Pm10
            | Parameter::So2
            | Parameter::C6h6 => Unit::MicrogramPerCubicMetre,
            Parameter::Co => Unit::MilligramPerCubicMetre,
            Parameter::Laeq => Unit::Decibel,
            Parameter::Temp => Unit::Celsius,
            Parameter::Hum => Unit::Percent,
            Parameter::Pa => Unit::Millibar,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
