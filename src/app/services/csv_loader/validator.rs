//! Path validation performed before a CSV file is opened for parsing

use crate::constants::CSV_EXTENSION;
use crate::error::{ReportError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only checks on a candidate CSV path
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvValidator;

impl CsvValidator {
    /// Validate that `path` names a non-empty `.csv` file
    ///
    /// Checks run in a fixed order: empty path, existence, directory,
    /// zero size, then extension (case-insensitive).
    pub fn validate(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(ReportError::invalid_argument(
                "CSV path must be a non-empty string",
            ));
        }

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReportError::not_found(path));
            }
            Err(e) => return Err(ReportError::Io(e)),
        };

        if metadata.is_dir() {
            return Err(ReportError::is_a_directory(path));
        }

        if metadata.len() == 0 {
            return Err(ReportError::invalid_argument(format!(
                "CSV file is empty: {}",
                path.display()
            )));
        }

        let has_csv_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION));

        if !has_csv_extension {
            return Err(ReportError::invalid_argument(format!(
                "Expected a .csv file, got: {}",
                path.display()
            )));
        }

        debug!(
            "Validated CSV path {} ({} bytes)",
            path.display(),
            metadata.len()
        );
        Ok(path.to_path_buf())
    }
}
