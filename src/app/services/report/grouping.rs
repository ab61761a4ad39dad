//! Per-location aggregates behind the chart reports
//!
//! Groups keep first-encountered order and ranking uses a stable descending
//! sort, so locations with equal aggregates stay in the order they first
//! appear in the table.

use crate::constants::columns::{LOCATION, MAX_TEMP, MIN_TEMP, RAINFALL};
use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

const MEAN_RAINFALL: &str = "mean_rainfall";
const TEMP_RANGE: &str = "temp_range";
const RANGE_SUM: &str = "range_sum";
const RANGE_COUNT: &str = "range_count";
const MEAN_RANGE: &str = "mean_temp_range";

/// One ranked location and its aggregate value
#[derive(Debug, Clone, PartialEq)]
pub struct GroupValue {
    pub location: String,
    pub value: f64,
}

fn descending_stable() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_maintain_order(true)
}

/// `top_n` as a polars row limit, saturating where `IdxSize` is narrower
fn row_limit(top_n: usize) -> IdxSize {
    IdxSize::try_from(top_n).unwrap_or(IdxSize::MAX)
}

fn collect_groups(df: &DataFrame, value_column: &str) -> Result<Vec<GroupValue>> {
    let locations = df.column(LOCATION)?.str()?;
    let values = df.column(value_column)?.f64()?;

    Ok(locations
        .into_iter()
        .zip(values)
        .filter_map(|(location, value)| {
            Some(GroupValue {
                location: location?.to_string(),
                value: value?,
            })
        })
        .collect())
}

/// Top `top_n` locations by mean rainfall, highest first
///
/// Rows missing either `Location` or a numeric `Rainfall` are dropped before
/// grouping; NaN counts as missing. Fails if either column is absent from
/// the table.
pub fn mean_rainfall_by_location(df: &DataFrame, top_n: usize) -> Result<Vec<GroupValue>> {
    let ranked = df
        .clone()
        .lazy()
        .select([
            col(LOCATION).cast(DataType::String),
            col(RAINFALL).cast(DataType::Float64),
        ])
        .filter(
            col(LOCATION)
                .is_not_null()
                .and(col(RAINFALL).is_not_null())
                .and(col(RAINFALL).is_not_nan()),
        )
        .group_by_stable([col(LOCATION)])
        .agg([col(RAINFALL).mean().alias(MEAN_RAINFALL)])
        .sort([MEAN_RAINFALL], descending_stable())
        .limit(row_limit(top_n))
        .collect()?;

    debug!("Ranked {} locations by mean rainfall", ranked.height());
    collect_groups(&ranked, MEAN_RAINFALL)
}

/// Top `top_n` locations by mean daily temperature range, widest first
///
/// Only rows with `Location`, `MinTemp` and `MaxTemp` all present
/// contribute; range is `MaxTemp - MinTemp`. Returns `None` when no row
/// qualifies, including when any of the three columns is absent.
pub fn mean_temp_range_by_location(
    df: &DataFrame,
    top_n: usize,
) -> Result<Option<Vec<GroupValue>>> {
    let has_columns = [LOCATION, MIN_TEMP, MAX_TEMP]
        .iter()
        .all(|name| df.column(name).is_ok());
    if !has_columns {
        debug!("Temperature range needs {LOCATION}, {MIN_TEMP} and {MAX_TEMP} columns");
        return Ok(None);
    }

    let valid = df
        .clone()
        .lazy()
        .select([
            col(LOCATION).cast(DataType::String),
            col(MIN_TEMP).cast(DataType::Float64),
            col(MAX_TEMP).cast(DataType::Float64),
        ])
        .filter(
            col(LOCATION)
                .is_not_null()
                .and(col(MIN_TEMP).is_not_null())
                .and(col(MAX_TEMP).is_not_null())
                .and(col(MIN_TEMP).is_not_nan())
                .and(col(MAX_TEMP).is_not_nan()),
        )
        .with_column((col(MAX_TEMP) - col(MIN_TEMP)).alias(TEMP_RANGE))
        .collect()?;

    if valid.height() == 0 {
        return Ok(None);
    }
    debug!("{} rows contribute to temperature range", valid.height());

    let ranked = valid
        .lazy()
        .group_by_stable([col(LOCATION)])
        .agg([
            col(TEMP_RANGE).sum().alias(RANGE_SUM),
            col(TEMP_RANGE).count().alias(RANGE_COUNT),
        ])
        .with_column(
            (col(RANGE_SUM) / col(RANGE_COUNT).cast(DataType::Float64)).alias(MEAN_RANGE),
        )
        .sort([MEAN_RANGE], descending_stable())
        .limit(row_limit(top_n))
        .collect()?;

    collect_groups(&ranked, MEAN_RANGE).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(location: &str, value: f64) -> GroupValue {
        GroupValue {
            location: location.to_string(),
            value,
        }
    }

    #[test]
    fn test_mean_rainfall_ranks_descending() {
        let df = df!(
            "Location" => ["A", "A", "B", "B"],
            "Rainfall" => [100.0, 150.0, 200.0, 180.0]
        )
        .unwrap();

        let groups = mean_rainfall_by_location(&df, 2).unwrap();
        assert_eq!(groups, vec![group("B", 190.0), group("A", 125.0)]);
    }

    #[test]
    fn test_mean_rainfall_drops_incomplete_rows() {
        let df = df!(
            "Location" => [Some("A"), None, Some("B"), Some("B")],
            "Rainfall" => [Some(4.0), Some(100.0), None, Some(2.0)]
        )
        .unwrap();

        let groups = mean_rainfall_by_location(&df, 10).unwrap();
        assert_eq!(groups, vec![group("A", 4.0), group("B", 2.0)]);
    }

    #[test]
    fn test_mean_rainfall_limits_to_top_n() {
        let df = df!(
            "Location" => ["A", "B", "C"],
            "Rainfall" => [1.0, 3.0, 2.0]
        )
        .unwrap();

        let groups = mean_rainfall_by_location(&df, 2).unwrap();
        assert_eq!(groups, vec![group("B", 3.0), group("C", 2.0)]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let df = df!(
            "Location" => ["C", "A", "B", "A"],
            "Rainfall" => [5.0, 5.0, 5.0, 5.0]
        )
        .unwrap();

        let groups = mean_rainfall_by_location(&df, 3).unwrap();
        let order: Vec<&str> = groups.iter().map(|g| g.location.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_mean_rainfall_treats_nan_as_missing() {
        let df = df!(
            "Location" => ["A", "A", "B"],
            "Rainfall" => [1.0, f64::NAN, 5.0]
        )
        .unwrap();

        let groups = mean_rainfall_by_location(&df, 2).unwrap();
        assert_eq!(groups, vec![group("B", 5.0), group("A", 1.0)]);
    }

    #[test]
    fn test_top_n_beyond_index_range_keeps_all_groups() {
        let df = df!(
            "Location" => ["A", "A", "B", "B"],
            "MinTemp" => [10.0, 5.0, 0.0, 2.0],
            "MaxTemp" => [20.0, 25.0, 10.0, 12.0],
            "Rainfall" => [100.0, 150.0, 200.0, 180.0]
        )
        .unwrap();

        assert_eq!(row_limit(usize::MAX), IdxSize::MAX);
        assert_eq!(row_limit(3), 3);
        assert_eq!(mean_rainfall_by_location(&df, usize::MAX).unwrap().len(), 2);
        assert_eq!(
            mean_temp_range_by_location(&df, usize::MAX)
                .unwrap()
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_mean_rainfall_requires_columns() {
        let df = df!("Location" => ["A"]).unwrap();
        assert!(mean_rainfall_by_location(&df, 1).is_err());
    }

    #[test]
    fn test_temp_range_means() {
        let df = df!(
            "Location" => ["A", "A", "B", "B"],
            "MinTemp" => [10.0, 5.0, 0.0, 2.0],
            "MaxTemp" => [20.0, 25.0, 10.0, 12.0]
        )
        .unwrap();

        let groups = mean_temp_range_by_location(&df, 2).unwrap().unwrap();
        assert_eq!(groups, vec![group("A", 15.0), group("B", 10.0)]);
    }

    #[test]
    fn test_temp_range_without_valid_rows() {
        let df = df!(
            "Location" => ["A"],
            "MinTemp" => [None::<f64>],
            "MaxTemp" => [None::<f64>]
        )
        .unwrap();

        assert!(mean_temp_range_by_location(&df, 2).unwrap().is_none());
    }

    #[test]
    fn test_temp_range_treats_nan_as_missing() {
        let df = df!(
            "Location" => ["A", "A", "B"],
            "MinTemp" => [10.0, f64::NAN, 0.0],
            "MaxTemp" => [20.0, 30.0, f64::NAN]
        )
        .unwrap();

        let groups = mean_temp_range_by_location(&df, 2).unwrap().unwrap();
        assert_eq!(groups, vec![group("A", 10.0)]);
    }

    #[test]
    fn test_temp_range_without_columns() {
        let df = df!("Location" => ["A"], "Rainfall" => [1.0]).unwrap();
        assert!(mean_temp_range_by_location(&df, 2).unwrap().is_none());
    }
}
