//! CSV parsing into a polars `DataFrame`
//!
//! The whole file is read into memory, checked for UTF-8, and parsed with a
//! header row. Parse failures are reported as invalid arguments carrying the
//! underlying polars error as their source.

use super::validator::CsvValidator;
use crate::error::{ReportError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Loads weather CSV files into memory
#[derive(Debug, Clone)]
pub struct DataLoader {
    /// Rows scanned to infer column types; `None` scans the whole file
    infer_schema_length: Option<usize>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    /// Create a loader that infers column types from every row
    pub fn new() -> Self {
        Self {
            infer_schema_length: None,
        }
    }

    /// Limit type inference to the first `rows` rows
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Validate a CSV path without reading it
    pub fn validate_csv_path(&self, path: impl AsRef<Path>) -> Result<std::path::PathBuf> {
        CsvValidator::validate(path)
    }

    /// Load `path` into a fully materialized table
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<DataFrame> {
        let path = self.validate_csv_path(path)?;
        debug!("Loading CSV from {}", path.display());

        let bytes = std::fs::read(&path)?;
        if let Err(e) = std::str::from_utf8(&bytes) {
            return Err(ReportError::invalid_argument_with_source(
                format!("CSV file is not valid UTF-8 text: {}", path.display()),
                e,
            ));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|e| {
                ReportError::invalid_argument_with_source(
                    format!("Malformed CSV file: {}", path.display()),
                    e,
                )
            })?;

        if df.height() == 0 {
            return Err(ReportError::invalid_argument(format!(
                "CSV file contains no data rows: {}",
                path.display()
            )));
        }

        info!(
            "CSV loaded successfully with {} rows and {} columns",
            df.height(),
            df.width()
        );
        Ok(df)
    }
}
