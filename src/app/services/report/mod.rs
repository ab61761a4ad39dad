//! Report pipeline
//!
//! A configuration-driven selection of independent report actions, each
//! reading the same [`DataStorageObject`](crate::app::services::data_store::DataStorageObject).
//!
//! ## Architecture
//!
//! - [`generator`] - builds the ordered action list and runs it
//! - [`actions`] - the closed set of report kinds and their outcomes
//! - [`summary`] - descriptive statistics for numeric columns
//! - [`grouping`] - per-location aggregates behind the charts
//! - [`charts`] - bar chart rendering to PNG
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weather_report::app::services::data_store::DataStorageObject;
//! use weather_report::app::services::report::ReportGenerator;
//! use weather_report::config::ReportConfig;
//! use polars::prelude::*;
//!
//! # fn example() -> weather_report::Result<()> {
//! let df = df!("Location" => ["Albury"], "Rainfall" => [0.6])?;
//! let data = DataStorageObject::new(df);
//!
//! let mut generator = ReportGenerator::new(&data, ReportConfig::default());
//! let summary = generator.run_report()?;
//! println!("{} charts written", summary.charts_written());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod charts;
pub mod generator;
pub mod grouping;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use actions::{ActionOutcome, ReportAction};
pub use generator::{ActionReport, GeneratorState, ReportGenerator, ReportSummary};
