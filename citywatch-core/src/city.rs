//! City: station registry and statistics engine
//!
//! ## Ownership
//!
//! ```text
//! City ──owns──> Station ──owns──> Sensor ──owns──> Measurement
//! ```
//!
//! Members are created only through their parent's `add_*` operation and
//! are never removed. Nothing holds a reference back up the tree.
//!
//! ## Mutation Policy
//!
//! - structurally invalid input (empty names, bad identifiers, wrong units,
//!   unknown stations or sensors) is a [`MonitoringError`]
//! - adding something that already exists is `Ok(false)`; the existing
//!   member is kept untouched
//! - a failed call changes nothing
//!
//! ## Queries
//!
//! All four query families run through [`City::aggregate`]:
//!
//! ```rust
//! use citywatch_core::{AggregationOperator, City, QueryScope};
//! use citywatch_core::coordinates::{CartesianCoordinates, GeographicCoordinates};
//! use citywatch_core::units::Parameter;
//! use chrono::NaiveDate;
//!
//! let mut city = City::new("Porto");
//! city.add_station("Centro")?;
//! city.add_sensor("Centro", "QA0NO20001", CartesianCoordinates::default(), GeographicCoordinates::default())?;
//!
//! let day = NaiveDate::from_ymd_opt(2021, 12, 1).unwrap();
//! city.add_measurement("Centro", "QA0NO20001", 12.0, "μg/m3", day.and_hms_opt(9, 0, 0).unwrap())?;
//! city.add_measurement("Centro", "QA0NO20001", 15.0, "μg/m3", day.and_hms_opt(10, 0, 0).unwrap())?;
//!
//! let stats = city.aggregate(QueryScope::City, AggregationOperator::Avg, Parameter::No2, None);
//! assert_eq!(stats.len(), 1);
//! assert_eq!(stats[0].value(), 13.5);
//! assert_eq!(stats[0].station_name(), Some("Centro"));
//! # Ok::<(), citywatch_core::MonitoringError>(())
//! ```

use core::fmt;

use crate::constants::INITIAL_STATION_CAPACITY;
use crate::coordinates::{CartesianCoordinates, GeographicCoordinates};
use crate::errors::{Entity, MonitoringError, MonitoringResult, Scope};
use crate::measurement::Measurement;
use crate::prelude::*;
use crate::sensor::{is_identifier_length_valid, Sensor};
use crate::station::Station;
use crate::statistics::{AggregationOperator, QueryScope, Statistic};
use crate::time::{TimeWindow, Timestamp};
use crate::units::Parameter;

/// Municipality being monitored
///
/// The name doubles as the city's identifier.
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    stations: Vec<Station>,
}

impl City {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stations: Vec::with_capacity(INITIAL_STATION_CAPACITY),
        }
    }

    /// Same as [`name`](Self::name)
    pub fn id(&self) -> &str {
        &self.name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== MUTATION =====

    /// Register a new, empty station
    ///
    /// `Ok(false)` when a station with that name already exists.
    pub fn add_station(&mut self, name: &str) -> MonitoringResult<bool> {
        if name.is_empty() {
            log_debug!("city {}: rejected station with empty name", self.name);
            return Err(MonitoringError::InvalidName {
                entity: Entity::Station,
            });
        }

        if self.station(name).is_some() {
            log_debug!("city {}: station '{}' already registered", self.name, name);
            return Ok(false);
        }

        self.stations.push(Station::new(name));
        log_debug!("city {}: registered station '{}'", self.name, name);
        Ok(true)
    }

    /// Build a sensor from its identifier and register it at a station
    ///
    /// The identifier length is checked here first and reported with
    /// [`Scope::Station`]; type and parameter decoding errors come from
    /// [`Sensor::new`]. `Ok(false)` when the station already has a sensor with
    /// this identifier.
    pub fn add_sensor(
        &mut self,
        station_name: &str,
        sensor_id: &str,
        cartesian: CartesianCoordinates,
        geographic: GeographicCoordinates,
    ) -> MonitoringResult<bool> {
        let city = &self.name;
        let station = Self::find_station_mut(&mut self.stations, station_name)?;

        if !is_identifier_length_valid(sensor_id) {
            let err = MonitoringError::InvalidIdentifierLength {
                scope: Scope::Station,
                id: sensor_id.to_string(),
                length: sensor_id.chars().count(),
            };
            log_debug!("city {}: {}", city, err);
            return Err(err);
        }

        if station.sensor(sensor_id).is_some() {
            log_debug!(
                "city {}: sensor {} already registered at '{}'",
                city,
                sensor_id,
                station_name
            );
            return Ok(false);
        }

        let sensor = Sensor::new(sensor_id, cartesian, geographic).map_err(|err| {
            log_debug!("city {}: {}", city, err);
            err
        })?;

        log_debug!(
            "city {}: registered {} sensor {} ({}) at '{}'",
            city,
            sensor.sensor_type(),
            sensor_id,
            sensor.parameter(),
            station_name
        );
        Ok(station.add_sensor(sensor))
    }

    /// Store a reading on a sensor of a station
    ///
    /// `Ok(false)` when the sensor already holds an identical reading.
    pub fn add_measurement(
        &mut self,
        station_name: &str,
        sensor_id: &str,
        value: f64,
        unit: &str,
        timestamp: Timestamp,
    ) -> MonitoringResult<bool> {
        let city = &self.name;
        let station = Self::find_station_mut(&mut self.stations, station_name)?;

        let inserted = station
            .add_measurement(sensor_id, value, timestamp, unit)
            .map_err(|err| {
                log_debug!("city {}: {}", city, err);
                err
            })?;

        log_trace!(
            "city {}: {} {} {} at {} on {}",
            city,
            if inserted { "stored" } else { "ignored duplicate" },
            value,
            unit,
            timestamp,
            sensor_id
        );
        Ok(inserted)
    }

    fn find_station_mut<'a>(
        stations: &'a mut [Station],
        name: &str,
    ) -> MonitoringResult<&'a mut Station> {
        if name.is_empty() {
            return Err(MonitoringError::InvalidName {
                entity: Entity::Station,
            });
        }

        stations
            .iter_mut()
            .find(|station| station.name() == name)
            .ok_or_else(|| MonitoringError::station_not_found(name))
    }

    // ===== READ =====

    /// Stations in registration order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name() == name)
    }

    /// Sensors of a station, empty when the station doesn't exist
    pub fn sensors_by_station(&self, station_name: &str) -> &[Sensor] {
        self.station(station_name).map(Station::sensors).unwrap_or(&[])
    }

    /// Readings of the first sensor with this identifier in any station
    ///
    /// Empty when no station has such a sensor.
    pub fn measurements_by_sensor(&self, sensor_id: &str) -> &[Measurement] {
        self.stations
            .iter()
            .find_map(|station| station.sensor(sensor_id))
            .map(Sensor::measurements)
            .unwrap_or(&[])
    }

    // ===== STATISTICS =====

    /// Fold the readings of every sensor measuring `parameter` within `scope`
    ///
    /// Produces at most one record per matching sensor, ordered by station
    /// then sensor registration. Each record carries the sensor id, its
    /// station's name, the parameter's unit and label. An unknown station in
    /// [`QueryScope::Station`] yields no records.
    pub fn aggregate(
        &self,
        scope: QueryScope<'_>,
        operator: AggregationOperator,
        parameter: Parameter,
        window: Option<TimeWindow>,
    ) -> Vec<Statistic> {
        let stations: &[Station] = match scope {
            QueryScope::City => &self.stations,
            QueryScope::Station(name) => self.station(name).map(core::slice::from_ref).unwrap_or(&[]),
        };

        let statistics: Vec<Statistic> = stations
            .iter()
            .flat_map(|station| {
                station
                    .sensors()
                    .iter()
                    .filter(move |sensor| sensor.parameter() == parameter)
                    .filter_map(move |sensor| {
                        operator
                            .fold(sensor.measurements(), window.as_ref())
                            .map(|value| {
                                Statistic::new(
                                    sensor.id(),
                                    Some(station.name().to_string()),
                                    parameter.unit().label(),
                                    parameter.token(),
                                    value,
                                )
                            })
                    })
            })
            .collect();

        log_trace!(
            "city {}: {} of {} over {:?} (window {:?}) -> {} records",
            self.name,
            operator,
            parameter,
            scope,
            window,
            statistics.len()
        );
        statistics
    }

    /// One record per matching sensor across all stations
    pub fn statistics_by_station(
        &self,
        operator: AggregationOperator,
        parameter: Parameter,
    ) -> Vec<Statistic> {
        self.aggregate(QueryScope::City, operator, parameter, None)
    }

    /// Like [`statistics_by_station`](Self::statistics_by_station), counting
    /// only readings strictly between `start` and `end`
    ///
    /// A missing bound drops the window and the query covers every reading.
    pub fn statistics_by_station_between(
        &self,
        operator: AggregationOperator,
        parameter: Parameter,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Vec<Statistic> {
        self.aggregate(
            QueryScope::City,
            operator,
            parameter,
            TimeWindow::from_bounds(start, end),
        )
    }

    /// One record per matching sensor of a single station
    pub fn statistics_by_sensor(
        &self,
        station_name: &str,
        operator: AggregationOperator,
        parameter: Parameter,
    ) -> Vec<Statistic> {
        self.aggregate(QueryScope::Station(station_name), operator, parameter, None)
    }

    /// Like [`statistics_by_sensor`](Self::statistics_by_sensor), counting
    /// only readings strictly between `start` and `end`
    ///
    /// A missing bound drops the window and the query covers every reading.
    pub fn statistics_by_sensor_between(
        &self,
        station_name: &str,
        operator: AggregationOperator,
        parameter: Parameter,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Vec<Statistic> {
        self.aggregate(
            QueryScope::Station(station_name),
            operator,
            parameter,
            TimeWindow::from_bounds(start, end),
        )
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City{{cityName='{}', elements={}}}", self.name, self.stations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2021, 12, 1)
            .and_then(|day| day.and_hms_opt(hour, 0, 0))
            .expect("valid test timestamp")
    }

    const UG: &str = "\u{03BC}g/m3";

    fn add_sensor(city: &mut City, station: &str, id: &str) -> MonitoringResult<bool> {
        city.add_sensor(
            station,
            id,
            CartesianCoordinates::default(),
            GeographicCoordinates::default(),
        )
    }

    /// Two stations, three NO2 sensors (one empty), one temperature sensor
    fn porto() -> City {
        let mut city = City::new("Porto");
        city.add_station("Centro").expect("station");
        city.add_station("Boavista").expect("station");

        add_sensor(&mut city, "Centro", "QA0NO20001").expect("sensor");
        add_sensor(&mut city, "Centro", "METEMP0001").expect("sensor");
        add_sensor(&mut city, "Boavista", "QA0NO20002").expect("sensor");
        add_sensor(&mut city, "Boavista", "QA0NO20003").expect("sensor");

        for (hour, value) in [(1, 10.0), (2, 20.0), (3, 30.0)] {
            city.add_measurement("Centro", "QA0NO20001", value, UG, at(hour))
                .expect("reading");
        }
        city.add_measurement("Centro", "METEMP0001", 18.0, "ºC", at(1))
            .expect("reading");
        city.add_measurement("Boavista", "QA0NO20002", 7.0, UG, at(5))
            .expect("reading");
        city
    }

    #[test]
    fn city_name_is_its_id() {
        let city = City::new("Porto");
        assert_eq!(city.id(), "Porto");
        assert_eq!(city.name(), city.id());
    }

    #[test]
    fn station_names_are_unique() {
        let mut city = City::new("Porto");
        assert_eq!(city.add_station("Centro"), Ok(true));
        assert_eq!(city.add_station("Centro"), Ok(false));
        assert_eq!(city.stations().len(), 1);
    }

    #[test]
    fn empty_station_name_is_invalid() {
        let mut city = City::new("Porto");
        assert_eq!(
            city.add_station(""),
            Err(MonitoringError::InvalidName {
                entity: Entity::Station
            })
        );
        assert!(city.stations().is_empty());
    }

    #[test]
    fn add_sensor_validation_order() {
        let mut city = City::new("Porto");
        city.add_station("Centro").expect("station");

        assert!(matches!(
            add_sensor(&mut city, "Nowhere", "QA0NO20001"),
            Err(MonitoringError::EntityNotFound {
                entity: Entity::Station,
                ..
            })
        ));
        assert!(matches!(
            add_sensor(&mut city, "Centro", "QA0NO2"),
            Err(MonitoringError::InvalidIdentifierLength {
                scope: Scope::Station,
                length: 6,
                ..
            })
        ));
        assert!(matches!(
            add_sensor(&mut city, "Centro", "ZZ0NO20001"),
            Err(MonitoringError::UnrecognizedSensorType { .. })
        ));
        assert!(matches!(
            add_sensor(&mut city, "Centro", "ME0NO20001"),
            Err(MonitoringError::UnrecognizedParameter { .. })
        ));
        assert!(city.sensors_by_station("Centro").is_empty());

        assert_eq!(add_sensor(&mut city, "Centro", "QA0NO20001"), Ok(true));
        assert_eq!(add_sensor(&mut city, "Centro", "QA0NO20001"), Ok(false));
        assert_eq!(city.sensors_by_station("Centro").len(), 1);
    }

    #[test]
    fn same_sensor_id_allowed_in_different_stations() {
        let mut city = City::new("Porto");
        city.add_station("Centro").expect("station");
        city.add_station("Boavista").expect("station");

        assert_eq!(add_sensor(&mut city, "Centro", "QA0NO20001"), Ok(true));
        assert_eq!(add_sensor(&mut city, "Boavista", "QA0NO20001"), Ok(true));
    }

    #[test]
    fn add_measurement_propagates_errors() {
        let mut city = porto();

        assert!(matches!(
            city.add_measurement("Nowhere", "QA0NO20001", 1.0, UG, at(1)),
            Err(MonitoringError::EntityNotFound {
                entity: Entity::Station,
                ..
            })
        ));
        assert!(matches!(
            city.add_measurement("Centro", "QA0NO29999", 1.0, UG, at(1)),
            Err(MonitoringError::EntityNotFound {
                entity: Entity::Sensor,
                ..
            })
        ));
        assert!(matches!(
            city.add_measurement("Centro", "QA0NO20001", 1.0, "dB", at(1)),
            Err(MonitoringError::UnitMismatch { .. })
        ));
        assert!(matches!(
            city.add_measurement("", "QA0NO20001", 1.0, UG, at(1)),
            Err(MonitoringError::InvalidName { .. })
        ));
        assert_eq!(city.measurements_by_sensor("QA0NO20001").len(), 3);
    }

    #[test]
    fn read_surface_returns_empty_for_unknown_names() {
        let city = porto();
        assert!(city.station("Nowhere").is_none());
        assert!(city.sensors_by_station("Nowhere").is_empty());
        assert!(city.measurements_by_sensor("QA0NO29999").is_empty());
        assert_eq!(city.measurements_by_sensor("QA0NO20002").len(), 1);
    }

    #[test]
    fn city_scope_emits_one_record_per_matching_sensor() {
        let city = porto();
        let stats = city.statistics_by_station(AggregationOperator::Avg, Parameter::No2);

        let ids: Vec<&str> = stats.iter().map(Statistic::sensor_id).collect();
        assert_eq!(ids, vec!["QA0NO20001", "QA0NO20002", "QA0NO20003"]);

        assert_eq!(stats[0].value(), 20.0);
        assert_eq!(stats[0].station_name(), Some("Centro"));
        assert_eq!(stats[0].unit(), UG);
        assert_eq!(stats[0].parameter(), "NO2");
        assert_eq!(stats[1].value(), 7.0);
        assert_eq!(stats[1].station_name(), Some("Boavista"));
        // empty sensor averages to 0 / 0
        assert!(stats[2].value().is_nan());
    }

    #[test]
    fn min_max_skip_sensors_without_readings() {
        let city = porto();

        let max = city.statistics_by_station(AggregationOperator::Max, Parameter::No2);
        assert_eq!(max.len(), 2);
        assert_eq!(max[0].value(), 30.0);
        assert_eq!(max[1].value(), 7.0);

        let min = city.statistics_by_station(AggregationOperator::Min, Parameter::No2);
        assert_eq!(min.len(), 2);
        assert_eq!(min[0].value(), 10.0);
    }

    #[test]
    fn windowed_queries_use_strict_bounds() {
        let city = porto();

        let count = city.statistics_by_station_between(
            AggregationOperator::Count,
            Parameter::No2,
            Some(at(1)),
            Some(at(5)),
        );
        let counts: Vec<f64> = count.iter().map(Statistic::value).collect();
        assert_eq!(counts, vec![2.0, 0.0, 0.0]);

        let max = city.statistics_by_station_between(
            AggregationOperator::Max,
            Parameter::No2,
            Some(at(1)),
            Some(at(5)),
        );
        assert_eq!(max.len(), 1);
        assert_eq!(max[0].sensor_id(), "QA0NO20001");
        assert_eq!(max[0].value(), 30.0);

        let avg = city.statistics_by_station_between(
            AggregationOperator::Avg,
            Parameter::No2,
            Some(at(1)),
            Some(at(5)),
        );
        assert_eq!(avg[0].value(), 25.0);
        assert!(avg[1].value().is_nan());
    }

    #[test]
    fn missing_bound_queries_every_reading() {
        let city = porto();

        let unbounded = city.statistics_by_station(AggregationOperator::Count, Parameter::No2);
        assert_eq!(
            city.statistics_by_station_between(AggregationOperator::Count, Parameter::No2, Some(at(1)), None),
            unbounded
        );
        assert_eq!(
            city.statistics_by_station_between(AggregationOperator::Count, Parameter::No2, None, Some(at(5))),
            unbounded
        );

        let by_sensor = city.statistics_by_sensor("Boavista", AggregationOperator::Min, Parameter::No2);
        assert_eq!(
            city.statistics_by_sensor_between(
                "Boavista",
                AggregationOperator::Min,
                Parameter::No2,
                None,
                Some(at(6)),
            ),
            by_sensor
        );
    }

    #[test]
    fn station_scope_restricts_to_one_station() {
        let city = porto();

        let stats = city.statistics_by_sensor("Boavista", AggregationOperator::Count, Parameter::No2);
        let ids: Vec<&str> = stats.iter().map(Statistic::sensor_id).collect();
        assert_eq!(ids, vec!["QA0NO20002", "QA0NO20003"]);
        assert!(stats.iter().all(|s| s.station_name() == Some("Boavista")));

        let temp = city.statistics_by_sensor("Centro", AggregationOperator::Max, Parameter::Temp);
        assert_eq!(temp.len(), 1);
        assert_eq!(temp[0].value(), 18.0);
        assert_eq!(temp[0].unit(), "ºC");

        let windowed = city.statistics_by_sensor_between(
            "Boavista",
            AggregationOperator::Min,
            Parameter::No2,
            Some(at(4)),
            Some(at(6)),
        );
        assert_eq!(windowed.len(), 1);
        assert_eq!(windowed[0].value(), 7.0);
    }

    #[test]
    fn unknown_station_or_parameter_yields_nothing() {
        let city = porto();
        assert!(city
            .statistics_by_sensor("Nowhere", AggregationOperator::Count, Parameter::No2)
            .is_empty());
        assert!(city
            .statistics_by_station(AggregationOperator::Count, Parameter::Laeq)
            .is_empty());
    }

    #[test]
    fn display_summarizes_city() {
        assert_eq!(porto().to_string(), "City{cityName='Porto', elements=2}");
    }
}
