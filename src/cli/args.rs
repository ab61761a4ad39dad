//! Command-line argument definitions for the weather report tool
//!
//! The CLI is a single batch command: load one CSV file and run the
//! configured reports against it.

use crate::config::ReportConfig;
use crate::constants::{DEFAULT_CSV_PATH, DEFAULT_LOG_DIR};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the weather report generator
///
/// Loads a weather observation CSV file and prints row previews, summary
/// statistics and rainfall averages, and saves per-location bar charts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-report",
    version,
    about = "Generate console and chart reports from a weather observation CSV file",
    long_about = "Loads a weather observation CSV file into memory, validates it, and runs a \
                  configurable set of reports: row preview, descriptive statistics, average \
                  rainfall, mean rainfall by area, and temperature range by location."
)]
pub struct Args {
    /// Path to the weather CSV file
    #[arg(value_name = "CSV_PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Path to configuration file
    ///
    /// TOML file holding report toggles and chart settings. Flags given on
    /// the command line override values from the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to report configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of rows to preview (0 disables the preview)
    #[arg(long = "preview-lines", value_name = "N")]
    pub preview_lines: Option<usize>,

    /// Skip the summary statistics report
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Skip the average rainfall report
    #[arg(long = "no-average-rainfall")]
    pub no_average_rainfall: bool,

    /// Skip the mean rainfall by area chart
    #[arg(long = "no-mean-rainfall")]
    pub no_mean_rainfall: bool,

    /// Skip the temperature range by location chart
    #[arg(long = "no-temp-range")]
    pub no_temp_range: bool,

    /// Number of locations shown in each chart
    #[arg(short = 'n', long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    /// Directory for chart images
    ///
    /// Created if it doesn't exist. Chart file names are kept.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long = "log-dir", value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Disable writing logs to a file
    #[arg(long = "no-log-file")]
    pub no_log_file: bool,

    /// Explicit log level, overriding -v and -q
    #[arg(long = "log-level", value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Log level names accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Matching `tracing` filter directive
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl Args {
    /// Log level filter based on --log-level, quiet and verbose flags
    pub fn get_log_level(&self) -> &'static str {
        if let Some(level) = self.log_level {
            return level.as_filter();
        }
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Log file path, or `None` when file logging is disabled
    pub fn log_file(&self) -> Option<PathBuf> {
        (!self.no_log_file).then(|| self.log_dir.join(crate::constants::LOG_FILE_NAME))
    }

    /// Build the report configuration from the config file and flags
    pub fn to_report_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config_file {
            Some(path) => ReportConfig::from_toml_file(path)?,
            None => ReportConfig::default(),
        };

        if let Some(lines) = self.preview_lines {
            config.preview_lines = lines;
        }
        if self.no_summary {
            config.summary_stats = false;
        }
        if self.no_average_rainfall {
            config.average_rainfall = false;
        }
        if self.no_mean_rainfall {
            config.mean_rainfall_by_area = false;
        }
        if self.no_temp_range {
            config.top_temp_range_by_area = false;
        }
        if let Some(top_n) = self.top_n {
            config.mean_rainfall_top_n = top_n;
            config.temp_range_top_n = top_n;
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }

        config.validate()?;
        Ok(config)
    }
}
