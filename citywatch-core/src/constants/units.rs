//! Unit Spellings Accepted on Ingestion

/// MICRO SIGN (U+00B5), emitted by some data sources.
pub const LATIN_MICRO_SIGN: char = '\u{00B5}';

/// GREEK SMALL LETTER MU (U+03BC), the canonical spelling in unit labels.
pub const GREEK_MICRO_SIGN: char = '\u{03BC}';

/// Capitalized millibar spelling accepted as `mbar`.
///
/// Only this exact string is lower-cased; other units are case-sensitive.
pub const MBAR_ALIAS: &str = "Mbar";
