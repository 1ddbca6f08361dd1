//! Time handling for readings and queries
//!
//! Readings are stamped with local wall-clock time, without a zone, exactly
//! as the data sources report them.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reading timestamp (local date and time, no zone)
pub type Timestamp = chrono::NaiveDateTime;

/// Strict time window used to filter readings
///
/// Both boundaries are excluded: a reading taken exactly at `start` or `end`
/// falls outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Window between two instants
    ///
    /// No ordering is enforced; a window whose `start` is not before `end`
    /// simply contains nothing.
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Build a window only when both bounds are known
    pub fn from_bounds(start: Option<Timestamp>, end: Option<Timestamp>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => None,
        }
    }

    pub const fn start(&self) -> Timestamp {
        self.start
    }

    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// `start < timestamp < end`
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start < timestamp && timestamp < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
