//! Aggregate statistics over sensor readings
//!
//! ## Folds
//!
//! Each matching sensor is reduced to at most one [`Statistic`]:
//!
//! | Operator | No qualifying readings | Otherwise              |
//! |----------|------------------------|------------------------|
//! | `Avg`    | record with NaN        | sum / count            |
//! | `Count`  | record with 0          | number of readings     |
//! | `Max`    | no record              | largest value          |
//! | `Min`    | no record              | smallest value         |
//!
//! The NaN average is plain `0.0 / 0.0`. Consumers depend on receiving a
//! record for every sensor under `Avg`, so the division is left unguarded.
//!
//! A reading qualifies when it falls strictly inside the query's
//! [`TimeWindow`], or always when no window is given.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;
use crate::prelude::*;
use crate::time::TimeWindow;

/// Reduction applied to a sensor's qualifying readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AggregationOperator {
    Avg,
    Count,
    Max,
    Min,
}

impl AggregationOperator {
    pub const fn name(&self) -> &'static str {
        match self {
            AggregationOperator::Avg => "AVG",
            AggregationOperator::Count => "COUNT",
            AggregationOperator::Max => "MAX",
            AggregationOperator::Min => "MIN",
        }
    }

    /// Reduce the readings that pass `window`
    ///
    /// `None` means the operator emits nothing for this sensor.
    pub fn fold<'a, I>(&self, measurements: I, window: Option<&TimeWindow>) -> Option<f64>
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let values = measurements
            .into_iter()
            .filter(|m| window.map_or(true, |w| w.contains(m.timestamp())))
            .map(Measurement::value);

        match self {
            AggregationOperator::Avg => {
                let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
                Some(sum / count as f64)
            }
            AggregationOperator::Count => Some(values.count() as f64),
            AggregationOperator::Max => values.reduce(|max, v| if v > max { v } else { max }),
            AggregationOperator::Min => values.reduce(|min, v| if v < min { v } else { min }),
        }
    }
}

impl fmt::Display for AggregationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which part of the city a query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScope<'a> {
    /// Every station
    City,
    /// Sensors of one named station
    Station(&'a str),
}

/// One computed aggregate, attached to a sensor
///
/// Produced fresh by every query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statistic {
    sensor_id: String,
    station_name: Option<String>,
    unit: String,
    parameter: String,
    value: f64,
}

impl Statistic {
    pub fn new(
        sensor_id: impl Into<String>,
        station_name: Option<String>,
        unit: impl Into<String>,
        parameter: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            station_name,
            unit: unit.into(),
            parameter: parameter.into(),
            value,
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn station_name(&self) -> Option<&str> {
        self.station_name.as_deref()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistic{{sensorId='{}', stationName='{}', unit='{}', parameter='{}', value={}}}",
            self.sensor_id,
            self.station_name.as_deref().unwrap_or("-"),
            self.unit,
            self.parameter,
            self.value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Timestamp;
    use chrono::NaiveDate;

    fn at(hour: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2021, 12, 1)
            .and_then(|day| day.and_hms_opt(hour, 0, 0))
            .expect("valid test timestamp")
    }

    fn readings() -> Vec<Measurement> {
        vec![
            Measurement::new(4.0, at(1)),
            Measurement::new(10.0, at(2)),
            Measurement::new(-2.0, at(3)),
            Measurement::new(8.0, at(4)),
        ]
    }

    #[test]
    fn unbounded_folds() {
        let readings = readings();

        assert_eq!(AggregationOperator::Avg.fold(&readings, None), Some(5.0));
        assert_eq!(AggregationOperator::Count.fold(&readings, None), Some(4.0));
        assert_eq!(AggregationOperator::Max.fold(&readings, None), Some(10.0));
        assert_eq!(AggregationOperator::Min.fold(&readings, None), Some(-2.0));
    }

    #[test]
    fn window_excludes_both_bounds() {
        let readings = readings();
        let window = TimeWindow::new(at(1), at(4));

        assert_eq!(AggregationOperator::Count.fold(&readings, Some(&window)), Some(2.0));
        assert_eq!(AggregationOperator::Avg.fold(&readings, Some(&window)), Some(4.0));
        assert_eq!(AggregationOperator::Max.fold(&readings, Some(&window)), Some(10.0));
        assert_eq!(AggregationOperator::Min.fold(&readings, Some(&window)), Some(-2.0));
    }

    #[test]
    fn empty_input_per_operator() {
        let none: Vec<Measurement> = Vec::new();

        // 0 / 0: a record is still emitted, carrying NaN
        let avg = AggregationOperator::Avg.fold(&none, None).expect("avg always emits");
        assert!(avg.is_nan());

        assert_eq!(AggregationOperator::Count.fold(&none, None), Some(0.0));
        assert_eq!(AggregationOperator::Max.fold(&none, None), None);
        assert_eq!(AggregationOperator::Min.fold(&none, None), None);
    }

    #[test]
    fn statistic_display() {
        let stat = Statistic::new("QA0NO20001", Some("Centro".to_string()), "\u{03BC}g/m3", "NO2", 13.5);
        assert_eq!(
            stat.to_string(),
            "Statistic{sensorId='QA0NO20001', stationName='Centro', unit='\u{03BC}g/m3', parameter='NO2', value=13.5}"
        );
    }
}
