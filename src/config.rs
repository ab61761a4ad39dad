//! Report configuration.
//!
//! Provides the switches selecting which report actions run, along with the
//! per-chart group count and output path. Loadable from a TOML file; any key
//! left out takes its default.

use crate::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PREVIEW_LINES, DEFAULT_TOP_N, MEAN_RAINFALL_FILE_NAME,
    TEMP_RANGE_FILE_NAME,
};
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Toggles and parameters for a single report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Rows to print in the preview; 0 disables the preview
    pub preview_lines: usize,

    /// Print descriptive statistics for numeric columns
    pub summary_stats: bool,

    /// Print the dataset-wide mean rainfall
    pub average_rainfall: bool,

    /// Chart mean rainfall per location
    pub mean_rainfall_by_area: bool,

    /// Chart mean daily temperature range per location
    pub top_temp_range_by_area: bool,

    /// Locations shown in the mean rainfall chart
    pub mean_rainfall_top_n: usize,

    /// Image path for the mean rainfall chart
    pub mean_rainfall_output: PathBuf,

    /// Locations shown in the temperature range chart
    pub temp_range_top_n: usize,

    /// Image path for the temperature range chart
    pub temp_range_output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let output_dir = Path::new(DEFAULT_OUTPUT_DIR);
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
            summary_stats: true,
            average_rainfall: true,
            mean_rainfall_by_area: true,
            top_temp_range_by_area: true,
            mean_rainfall_top_n: DEFAULT_TOP_N,
            mean_rainfall_output: output_dir.join(MEAN_RAINFALL_FILE_NAME),
            temp_range_top_n: DEFAULT_TOP_N,
            temp_range_output: output_dir.join(TEMP_RANGE_FILE_NAME),
        }
    }
}

impl ReportConfig {
    /// A configuration with every report switched off
    pub fn disabled() -> Self {
        Self {
            preview_lines: 0,
            summary_stats: false,
            average_rainfall: false,
            mean_rainfall_by_area: false,
            top_temp_range_by_area: false,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReportError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded report config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ReportError::configuration(format!("Invalid report config: {}", e)))
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ReportError::configuration(format!("Failed to serialize config: {}", e)))
    }

    /// Move both chart images into `dir`, keeping their file names
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.mean_rainfall_output = relocate(&self.mean_rainfall_output, dir);
        self.temp_range_output = relocate(&self.temp_range_output, dir);
        self
    }

    /// Number of report actions this configuration enables
    pub fn enabled_count(&self) -> usize {
        [
            self.preview_lines > 0,
            self.summary_stats,
            self.average_rainfall,
            self.mean_rainfall_by_area,
            self.top_temp_range_by_area,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }

    /// Output paths of the enabled chart reports
    pub fn chart_outputs(&self) -> Vec<&Path> {
        let mut outputs = Vec::new();
        if self.mean_rainfall_by_area {
            outputs.push(self.mean_rainfall_output.as_path());
        }
        if self.top_temp_range_by_area {
            outputs.push(self.temp_range_output.as_path());
        }
        outputs
    }

    /// Check chart parameters for the enabled charts
    pub fn validate(&self) -> Result<()> {
        if self.mean_rainfall_by_area {
            check_chart("mean_rainfall", self.mean_rainfall_top_n, &self.mean_rainfall_output)?;
        }
        if self.top_temp_range_by_area {
            check_chart("temp_range", self.temp_range_top_n, &self.temp_range_output)?;
        }
        Ok(())
    }
}

fn check_chart(prefix: &str, top_n: usize, output: &Path) -> Result<()> {
    if top_n == 0 {
        return Err(ReportError::configuration(format!(
            "{}_top_n must be at least 1",
            prefix
        )));
    }
    if output.as_os_str().is_empty() {
        return Err(ReportError::configuration(format!(
            "{}_output must not be empty",
            prefix
        )));
    }
    Ok(())
}

fn relocate(path: &Path, dir: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_enables_every_report() {
        let config = ReportConfig::default();

        assert_eq!(config.preview_lines, DEFAULT_PREVIEW_LINES);
        assert_eq!(config.enabled_count(), 5);
        assert_eq!(
            config.mean_rainfall_output,
            PathBuf::from("report_outputs/Mean_Rainfall_By_Area.png")
        );
        assert_eq!(
            config.temp_range_output,
            PathBuf::from("report_outputs/Top_Temp_Range_By_Location.png")
        );
    }

    #[test]
    fn test_disabled_enables_nothing() {
        let config = ReportConfig::disabled();
        assert_eq!(config.enabled_count(), 0);
        assert!(config.chart_outputs().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = ReportConfig::from_toml_str(
            r#"
preview_lines = 3
summary_stats = false
temp_range_top_n = 4
"#,
        )
        .unwrap();

        assert_eq!(config.preview_lines, 3);
        assert!(!config.summary_stats);
        assert!(config.average_rainfall);
        assert_eq!(config.temp_range_top_n, 4);
        assert_eq!(config.mean_rainfall_top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let result = ReportConfig::from_toml_str("lines = 5\n");
        assert!(matches!(result, Err(ReportError::Configuration { .. })));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = ReportConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ReportConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "average_rainfall = false").unwrap();

        let config = ReportConfig::from_toml_file(file.path()).unwrap();
        assert!(!config.average_rainfall);
    }

    #[test]
    fn test_missing_toml_file_is_configuration_error() {
        let result = ReportConfig::from_toml_file(Path::new("/nonexistent/report.toml"));
        assert!(matches!(result, Err(ReportError::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_top_n_for_enabled_chart() {
        let config = ReportConfig {
            mean_rainfall_top_n: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());

        // Ignored while the chart is switched off
        let config = ReportConfig {
            mean_rainfall_by_area: false,
            mean_rainfall_top_n: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let config = ReportConfig {
            temp_range_output: PathBuf::new(),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_output_dir_keeps_file_names() {
        let config = ReportConfig::default().with_output_dir(Path::new("/tmp/charts"));

        assert_eq!(
            config.mean_rainfall_output,
            PathBuf::from("/tmp/charts/Mean_Rainfall_By_Area.png")
        );
        assert_eq!(
            config.chart_outputs(),
            vec![
                Path::new("/tmp/charts/Mean_Rainfall_By_Area.png"),
                Path::new("/tmp/charts/Top_Temp_Range_By_Location.png"),
            ]
        );
    }
}
