//! Immutable container around a loaded table
//!
//! A `DataStorageObject` always holds exactly one valid `DataFrame`. Report
//! actions read it either as the raw table or as a restartable sequence of
//! rows; neither view copies the underlying data.

use crate::app::models::{Row, Rows};
use crate::error::{ReportError, Result};
use polars::prelude::DataFrame;
use std::any::Any;
use tracing::debug;

/// Read-only handle over one loaded table
#[derive(Debug, Clone)]
pub struct DataStorageObject {
    df: DataFrame,
}

impl DataStorageObject {
    /// Wrap an already loaded table
    pub fn new(df: DataFrame) -> Self {
        debug!(
            "Wrapping table with {} rows and {} columns",
            df.height(),
            df.width()
        );
        Self { df }
    }

    /// Wrap an untyped value, checking that it is present and is a table
    ///
    /// Fails with `InvalidArgument` for `None` and `TypeMismatch` for any
    /// value that is not a `DataFrame`.
    pub fn from_value<T: Any>(value: Option<T>) -> Result<Self> {
        let value = value.ok_or_else(|| ReportError::invalid_argument("data must not be None"))?;

        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<DataFrame>() {
            Ok(df) => Ok(Self::new(*df)),
            Err(_) => Err(ReportError::type_mismatch(
                "DataFrame",
                std::any::type_name::<T>(),
            )),
        }
    }

    /// The underlying table
    ///
    /// Callers must treat it as read-only; the container hands out the same
    /// table to every report action.
    pub fn table(&self) -> &DataFrame {
        &self.df
    }

    /// A fresh lazy sequence of rows starting from the first row
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self.df.get_columns(), self.df.height())
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn width(&self) -> usize {
        self.df.width()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    pub fn into_inner(self) -> DataFrame {
        self.df
    }
}

impl From<DataFrame> for DataStorageObject {
    fn from(df: DataFrame) -> Self {
        Self::new(df)
    }
}

impl<'a> IntoIterator for &'a DataStorageObject {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
