//! Descriptive statistics for numeric columns
//!
//! Produces the count, mean, sample standard deviation, minimum, quartiles
//! and maximum of each numeric column. Quartiles use linear interpolation
//! between closest ranks. Nulls and NaNs are excluded from every statistic.

use crate::constants::SUMMARY_STAT_LABELS;
use crate::error::Result;
use polars::prelude::*;

/// Statistics for a single column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    /// Summarize `values`, ignoring NaNs
    pub fn from_values(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Self::default();
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = (count > 1).then(|| {
            let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (n - 1.0)).sqrt()
        });

        Self {
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            q25: Some(quantile(&sorted, 0.25)),
            median: Some(quantile(&sorted, 0.5)),
            q75: Some(quantile(&sorted, 0.75)),
            max: sorted.last().copied(),
        }
    }

    /// Values in `SUMMARY_STAT_LABELS` order
    pub fn as_column(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Summarize one column; `None` if it is not numeric
pub fn summarize_column(column: &Column) -> Result<Option<ColumnSummary>> {
    if !is_numeric(column.dtype()) {
        return Ok(None);
    }
    let values = column.cast(&DataType::Float64)?;
    let values: Vec<f64> = values.f64()?.into_iter().flatten().collect();
    Ok(Some(ColumnSummary::from_values(&values)))
}

/// Build the statistics table for every numeric column of `df`
///
/// The first column holds the statistic labels; each following column is
/// named after its source column. Returns `None` when `df` has no numeric
/// columns.
pub fn describe(df: &DataFrame) -> Result<Option<DataFrame>> {
    let mut columns = vec![Column::new("statistic".into(), &SUMMARY_STAT_LABELS[..])];

    for column in df.get_columns() {
        if let Some(summary) = summarize_column(column)? {
            columns.push(Column::new(
                column.name().clone(),
                summary.as_column().to_vec(),
            ));
        }
    }

    if columns.len() == 1 {
        return Ok(None);
    }
    Ok(Some(DataFrame::new(columns)?))
}

/// Split a statistics table into blocks of at most `per_block` columns
///
/// Every block repeats the leading `statistic` label column so each one
/// prints as a self-contained table.
pub fn column_blocks(stats: &DataFrame, per_block: usize) -> Result<Vec<DataFrame>> {
    let Some((labels, values)) = stats.get_columns().split_first() else {
        return Ok(Vec::new());
    };

    values
        .chunks(per_block.max(1))
        .map(|chunk| {
            let mut columns = Vec::with_capacity(chunk.len() + 1);
            columns.push(labels.clone());
            columns.extend_from_slice(chunk);
            Ok(DataFrame::new(columns)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("statistic should be present");
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_summary_of_one_to_four() {
        let summary = ColumnSummary::from_values(&[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(summary.count, 4);
        assert_close(summary.mean, 2.5);
        assert_close(summary.std, 1.2910);
        assert_close(summary.min, 1.0);
        assert_close(summary.q25, 1.75);
        assert_close(summary.median, 2.5);
        assert_close(summary.q75, 3.25);
        assert_close(summary.max, 4.0);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let summary = ColumnSummary::from_values(&[7.0]);

        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, None);
        assert_close(summary.median, 7.0);
    }

    #[test]
    fn test_empty_and_nan_values() {
        assert_eq!(ColumnSummary::from_values(&[]), ColumnSummary::default());

        let summary = ColumnSummary::from_values(&[f64::NAN, 2.0]);
        assert_eq!(summary.count, 1);
        assert_close(summary.mean, 2.0);
    }

    #[test]
    fn test_describe_skips_text_columns_and_nulls() {
        let df = df!(
            "Location" => ["A", "B", "C"],
            "Rainfall" => [Some(1.0), None, Some(3.0)],
            "Humidity" => [10i64, 20, 30]
        )
        .unwrap();

        let stats = describe(&df).unwrap().unwrap();
        let names: Vec<&str> = stats.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["statistic", "Rainfall", "Humidity"]);
        assert_eq!(stats.height(), SUMMARY_STAT_LABELS.len());

        let rainfall = stats.column("Rainfall").unwrap().f64().unwrap();
        assert_eq!(rainfall.get(0), Some(2.0)); // count
        assert_eq!(rainfall.get(1), Some(2.0)); // mean
    }

    #[test]
    fn test_column_blocks_repeat_labels() {
        let columns: Vec<Column> = (0..12)
            .map(|i| Column::new(format!("Num{i:02}").into(), [1.0, 2.0]))
            .collect();
        let stats = describe(&DataFrame::new(columns).unwrap()).unwrap().unwrap();

        let blocks = column_blocks(&stats, 5).unwrap();
        let widths: Vec<usize> = blocks.iter().map(|b| b.width()).collect();
        assert_eq!(widths, vec![6, 6, 3]);
        for block in &blocks {
            assert_eq!(block.get_columns()[0].name().as_str(), "statistic");
        }
        assert_eq!(blocks[2].get_columns()[2].name().as_str(), "Num11");
    }

    #[test]
    fn test_describe_without_numeric_columns() {
        let df = df!("Location" => ["A", "B"]).unwrap();
        assert!(describe(&df).unwrap().is_none());
    }
}
