//! Application constants for the weather report tool
//!
//! Column names expected in the input dataset, default report settings,
//! and chart layout values.

// =============================================================================
// Input Columns
// =============================================================================

/// Column names read by the report actions
pub mod columns {
    pub const RAINFALL: &str = "Rainfall";
    pub const LOCATION: &str = "Location";
    pub const MIN_TEMP: &str = "MinTemp";
    pub const MAX_TEMP: &str = "MaxTemp";
}

/// Required input file extension (compared case-insensitively)
pub const CSV_EXTENSION: &str = "csv";

/// Default dataset location used when no path is given on the command line
pub const DEFAULT_CSV_PATH: &str = "data/Weather Training Data.csv";

// =============================================================================
// Report Defaults
// =============================================================================

/// Rows shown by the preview report
pub const DEFAULT_PREVIEW_LINES: usize = 10;

/// Groups shown by each chart report
pub const DEFAULT_TOP_N: usize = 10;

/// Directory holding chart images
pub const DEFAULT_OUTPUT_DIR: &str = "report_outputs";

pub const MEAN_RAINFALL_FILE_NAME: &str = "Mean_Rainfall_By_Area.png";
pub const TEMP_RANGE_FILE_NAME: &str = "Top_Temp_Range_By_Location.png";

/// Printed when no rainfall value could be averaged
pub const NOT_AVAILABLE: &str = "N/A";

pub const NO_TEMPERATURE_ROWS_MESSAGE: &str = "No valid temperature rows found.";
pub const NO_RAINFALL_ROWS_MESSAGE: &str = "No valid rainfall rows found.";

// =============================================================================
// Summary Statistics
// =============================================================================

/// Row labels of the descriptive statistics table, in print order
pub const SUMMARY_STAT_LABELS: [&str; 8] =
    ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Statistic columns printed per block; wider tables wrap into several blocks
pub const SUMMARY_COLUMNS_PER_BLOCK: usize = 6;

// =============================================================================
// Chart Layout
// =============================================================================

pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 700;
pub const CHART_FONT: &str = "sans-serif";
pub const CHART_TITLE_SIZE: u32 = 28;
pub const CHART_LABEL_SIZE: u32 = 16;

// =============================================================================
// Logging
// =============================================================================

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "app.log";
