//! Error handling for weather report operations.
//!
//! Validation and loading failures are fatal to a run and propagate to the
//! caller unchanged. Chart rendering failures are produced inside chart
//! actions and converted into report outcomes rather than propagated.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Path is a directory, not a file: {path}")]
    IsADirectory { path: PathBuf },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Chart rendering failed for {path}: {reason}")]
    ChartRendering { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ReportError {
    /// Create an invalid argument error without an underlying cause
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid argument error wrapping the lower-level failure
    pub fn invalid_argument_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn is_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::IsADirectory { path: path.into() }
    }

    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn chart_rendering(path: &Path, reason: impl Into<String>) -> Self {
        Self::ChartRendering {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this error kind, used by the CLI layer
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::Configuration { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::IsADirectory { .. } => 4,
            Self::TypeMismatch { .. } => 5,
            Self::ChartRendering { .. } | Self::Io(_) | Self::Polars(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
