//! Data models for tabular weather records
//!
//! This module contains the cell and row views over a loaded table. Rows are
//! produced on demand from the underlying columns and expose each field
//! through explicit optional lookups rather than implicit coercion.

use polars::prelude::{AnyValue, Column};
use std::fmt;

// =============================================================================
// Cell Values
// =============================================================================

/// A single typed value from one row of the table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Any integer or floating point value
    Number(f64),
    /// Text value (also used for non-numeric dtypes such as booleans)
    Text(String),
    /// Empty cell, null, or NaN
    Missing,
}

impl Cell {
    /// Build a numeric cell, treating NaN as missing
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<AnyValue<'_>> for Cell {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Cell::Missing,
            AnyValue::Float64(v) => Cell::number(v),
            AnyValue::Float32(v) => Cell::number(f64::from(v)),
            AnyValue::Int8(v) => Cell::Number(f64::from(v)),
            AnyValue::Int16(v) => Cell::Number(f64::from(v)),
            AnyValue::Int32(v) => Cell::Number(f64::from(v)),
            AnyValue::Int64(v) => Cell::Number(v as f64),
            AnyValue::UInt8(v) => Cell::Number(f64::from(v)),
            AnyValue::UInt16(v) => Cell::Number(f64::from(v)),
            AnyValue::UInt32(v) => Cell::Number(f64::from(v)),
            AnyValue::UInt64(v) => Cell::Number(v as f64),
            AnyValue::String(s) => Cell::Text(s.to_string()),
            AnyValue::StringOwned(s) => Cell::Text(s.to_string()),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(value) => write!(f, "{}", value),
            Cell::Missing => write!(f, "null"),
        }
    }
}

// =============================================================================
// Row View
// =============================================================================

/// One horizontal slice of a table, keyed by column name in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    cells: Vec<(&'a str, Cell)>,
}

impl<'a> Row<'a> {
    pub fn new(cells: Vec<(&'a str, Cell)>) -> Self {
        Self { cells }
    }

    /// Cell for `column`, or `None` if the table has no such column
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| cell)
    }

    /// Numeric value for `column`; `None` when absent, missing, or text
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(Cell::as_number)
    }

    /// Text value for `column`; `None` when absent, missing, or numeric
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Cell::as_text)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column name and cell pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &Cell)> + '_ {
        self.cells.iter().map(|(name, cell)| (*name, cell))
    }
}

/// Lazy row iterator over a table's columns
///
/// Each row is materialized only when requested; the iterator borrows the
/// columns and never copies the table.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    columns: &'a [Column],
    index: usize,
    height: usize,
}

impl<'a> Rows<'a> {
    pub fn new(columns: &'a [Column], height: usize) -> Self {
        Self {
            columns,
            index: 0,
            height,
        }
    }

    fn row_at(&self, index: usize) -> Row<'a> {
        let cells = self
            .columns
            .iter()
            .map(|column| {
                let cell = column.get(index).map(Cell::from).unwrap_or(Cell::Missing);
                (column.name().as_str(), cell)
            })
            .collect();
        Row::new(cells)
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.height {
            return None;
        }
        let row = self.row_at(self.index);
        self.index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.height - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_cell_from_any_value() {
        assert_eq!(Cell::from(AnyValue::Int64(3)), Cell::Number(3.0));
        assert_eq!(Cell::from(AnyValue::Float64(1.5)), Cell::Number(1.5));
        assert_eq!(Cell::from(AnyValue::Float64(f64::NAN)), Cell::Missing);
        assert_eq!(Cell::from(AnyValue::Null), Cell::Missing);
        assert_eq!(
            Cell::from(AnyValue::String("Albury")),
            Cell::Text("Albury".to_string())
        );
        assert_eq!(
            Cell::from(AnyValue::Boolean(true)),
            Cell::Text("true".to_string())
        );
    }

    #[test]
    fn test_row_lookups() {
        let row = Row::new(vec![
            ("Location", Cell::Text("Albury".to_string())),
            ("Rainfall", Cell::Number(0.6)),
            ("MinTemp", Cell::Missing),
        ]);

        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
        assert!(Row::new(Vec::new()).is_empty());
        assert_eq!(row.text("Location"), Some("Albury"));
        assert_eq!(row.number("Rainfall"), Some(0.6));
        assert_eq!(row.number("MinTemp"), None);
        assert_eq!(row.number("Location"), None);
        assert!(row.get("MaxTemp").is_none());
        assert!(row.get("MinTemp").is_some_and(Cell::is_missing));
    }

    #[test]
    fn test_row_iter_keeps_column_order() {
        let row = Row::new(vec![
            ("Rainfall", Cell::Number(1.0)),
            ("Location", Cell::Text("Perth".to_string())),
        ]);

        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Rainfall", "Location"]);
        let (_, location) = row.iter().nth(1).unwrap();
        assert_eq!(location.to_string(), "Perth");
    }

    #[test]
    fn test_rows_iterates_in_order() {
        let df = df!("A" => [1, 2], "B" => [Some("x"), None]).unwrap();
        let rows: Vec<Row<'_>> = Rows::new(df.get_columns(), df.height()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number("A"), Some(1.0));
        assert_eq!(rows[0].text("B"), Some("x"));
        assert_eq!(rows[1].number("A"), Some(2.0));
        assert!(rows[1].get("B").is_some_and(Cell::is_missing));
    }

    #[test]
    fn test_rows_size_hint() {
        let df = df!("A" => [1, 2, 3]).unwrap();
        let mut rows = Rows::new(df.get_columns(), df.height());

        assert_eq!(rows.len(), 3);
        rows.next();
        assert_eq!(rows.len(), 2);
    }
}
