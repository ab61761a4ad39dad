//! Weather Report Library
//!
//! A Rust library for producing console and chart reports from a tabular
//! weather observation CSV file.
//!
//! This library provides tools for:
//! - Validating CSV paths and loading files into memory as polars tables
//! - Wrapping a loaded table in an immutable container with row access
//! - Selecting report actions from a declarative configuration
//! - Printing previews, descriptive statistics and rainfall averages
//! - Rendering per-location bar charts to PNG files

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_loader;
        pub mod data_store;
        pub mod report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Cell, Row};
pub use app::services::csv_loader::{CsvValidator, DataLoader};
pub use app::services::data_store::DataStorageObject;
pub use app::services::report::{ActionOutcome, ReportAction, ReportGenerator, ReportSummary};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
