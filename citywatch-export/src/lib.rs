//! Chart Export for CityWatch Statistics
//!
//! ## Overview
//!
//! The statistics engine hands its results out as plain [`Statistic`]
//! records. This crate turns a batch of them into a chart configuration
//! that a charting service can render directly, and optionally writes it
//! to disk.
//!
//! Exporters never see the city hierarchy: a record carries everything a
//! chart needs (sensor id, station, unit, parameter label and value).
//!
//! ## Output Shape
//!
//! ```json
//! {
//!   "type": "bar",
//!   "data": {
//!     "labels": ["Centro - QA0NO20001", "Boavista - QA0NO20002"],
//!     "datasets": [{ "label": "NO2 (μg/m3)", "data": [13.5, null] }]
//!   },
//!   "options": { "title": { "display": true, "text": "NO2 by sensor" } }
//! }
//! ```
//!
//! A NaN value (the average of a sensor without readings) is written as
//! `null` so the document stays valid JSON. An empty batch renders a chart
//! with no labels and an empty dataset.
//!
//! ## Usage Example
//!
//! ```rust
//! use citywatch_core::Statistic;
//! use citywatch_export::{ChartType, ExportConfig, Exporter, JsonExporter};
//!
//! let stats = vec![
//!     Statistic::new("QA0NO20001", Some("Centro".into()), "μg/m3", "NO2", 13.5),
//! ];
//!
//! let exporter = JsonExporter::new(ExportConfig::new(ChartType::Bar));
//! let json = exporter.export(&stats)?;
//! assert!(json.contains("\"Centro - QA0NO20001\""));
//! # Ok::<(), citywatch_export::ExportError>(())
//! ```

pub use citywatch_core::Statistic;

pub mod chart;
pub mod json;

pub use chart::{ChartConfiguration, ChartType};
pub use json::{ExportConfig, JsonExporter};

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Consumer of statistic batches
pub trait Exporter {
    /// Render `statistics` and return the rendered document
    fn export(&self, statistics: &[Statistic]) -> ExportResult<String>;
}

/// Export-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(String),

    #[error("Failed to serialize chart: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}
