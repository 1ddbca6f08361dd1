//! Sensor Identifier Layout
//!
//! Identifiers are fixed-width codes such as `QA0NO20001`, `METEMP0078` or
//! `ME00PA0078`. The first two characters select the sensor type; the rest
//! must contain the token of one of that type's parameters.

// ===== IDENTIFIER SHAPE =====

/// Exact length of every sensor identifier, in characters.
pub const SENSOR_ID_LENGTH: usize = 10;

// ===== TYPE PREFIXES =====

/// Prefix of air-quality sensors ("Qualidade do Ar").
pub const AIR_SENSOR_PREFIX: &str = "QA";

/// Prefix of noise sensors ("RUído").
pub const NOISE_SENSOR_PREFIX: &str = "RU";

/// Prefix of weather sensors ("MEteorologia").
pub const WEATHER_SENSOR_PREFIX: &str = "ME";

// ===== PARAMETER ALIASES =====

/// Identifier spelling of PM2.5.
///
/// Codes can't hold the dot of `PM2.5`, so `PM25` anywhere in the code maps
/// to PM2.5 regardless of the decoded sensor type.
pub const PM25_ALIAS_TOKEN: &str = "PM25";
