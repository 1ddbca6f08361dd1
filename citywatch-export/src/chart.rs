//! Chart configuration model
//!
//! Serializes to the configuration format used by Chart.js-compatible
//! rendering services: one dataset, one label per record.

use serde::{Deserialize, Serialize};

use crate::Statistic;

/// Chart kind requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Radar,
    Doughnut,
}

/// Complete chart document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One series of values, aligned with [`ChartData::labels`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    /// `None` stands for a NaN statistic
    pub data: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: ChartTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

impl ChartConfiguration {
    /// Lay out `statistics` as a single-dataset chart
    ///
    /// The dataset label defaults to `"<parameter> (<unit>)"` of the first
    /// record and the title to `"<parameter> by sensor"`. Both default to
    /// empty strings when there are no records.
    pub fn from_statistics(
        chart_type: ChartType,
        statistics: &[Statistic],
        dataset_label: Option<&str>,
        title: Option<&str>,
    ) -> Self {
        let first = statistics.first();

        let labels = statistics.iter().map(point_label).collect();
        let data = statistics
            .iter()
            .map(|s| Some(s.value()).filter(|v| !v.is_nan()))
            .collect();

        Self {
            chart_type,
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    label: dataset_label.map(str::to_string).unwrap_or_else(|| {
                        first
                            .map(|s| format!("{} ({})", s.parameter(), s.unit()))
                            .unwrap_or_default()
                    }),
                    data,
                }],
            },
            options: ChartOptions {
                title: ChartTitle {
                    display: true,
                    text: title.map(str::to_string).unwrap_or_else(|| {
                        first
                            .map(|s| format!("{} by sensor", s.parameter()))
                            .unwrap_or_default()
                    }),
                },
            },
        }
    }
}

fn point_label(statistic: &Statistic) -> String {
    match statistic.station_name() {
        Some(station) => format!("{} - {}", station, statistic.sensor_id()),
        None => statistic.sensor_id().to_string(),
    }
}
