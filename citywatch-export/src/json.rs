//! JSON chart exporter

use std::fs;
use std::path::PathBuf;

use crate::{ChartConfiguration, ChartType, ExportResult, Exporter, Statistic};

/// Settings for one export run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub chart_type: ChartType,
    /// Where to write the document, if anywhere
    pub output_path: Option<PathBuf>,
    /// Overrides the `"<parameter> (<unit>)"` dataset label
    pub dataset_label: Option<String>,
    /// Overrides the `"<parameter> by sensor"` title
    pub title: Option<String>,
}

impl ExportConfig {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            output_path: None,
            dataset_label: None,
            title: None,
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_dataset_label(mut self, label: impl Into<String>) -> Self {
        self.dataset_label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(ChartType::Bar)
    }
}

/// Renders statistics as a chart configuration in JSON
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    config: ExportConfig,
}

impl JsonExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Build the chart document without serializing it
    pub fn chart(&self, statistics: &[Statistic]) -> ChartConfiguration {
        ChartConfiguration::from_statistics(
            self.config.chart_type,
            statistics,
            self.config.dataset_label.as_deref(),
            self.config.title.as_deref(),
        )
    }
}

impl Exporter for JsonExporter {
    /// Serialize the chart and write it to the configured path, if any
    fn export(&self, statistics: &[Statistic]) -> ExportResult<String> {
        let json = serde_json::to_string(&self.chart(statistics))?;

        if let Some(path) = &self.config.output_path {
            fs::write(path, &json)?;
            log::info!(
                "exported {} statistics to {}",
                statistics.len(),
                path.display()
            );
        }

        Ok(json)
    }
}
