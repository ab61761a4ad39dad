//! CSV loading for weather datasets
//!
//! Turns a file path into a fully materialized table. Loading happens in two
//! stages:
//! - [`validator`] - path checks performed before any bytes are parsed
//! - [`loader`] - decoding and parsing into a polars `DataFrame`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weather_report::app::services::csv_loader::DataLoader;
//!
//! # fn example() -> weather_report::Result<()> {
//! let df = DataLoader::new().load_csv("data/Weather Training Data.csv")?;
//! println!("Loaded {} rows", df.height());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod validator;

#[cfg(test)]
pub mod tests;

pub use loader::DataLoader;
pub use validator::CsvValidator;
