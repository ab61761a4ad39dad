//! Report actions
//!
//! The set of report kinds is closed: each variant carries its own
//! construction-time parameters and `run` dispatches with a single
//! exhaustive match. Text reports propagate errors; chart reports turn
//! every internal failure into [`ActionOutcome::ChartFailed`].

use super::charts::BarChart;
use super::grouping::{mean_rainfall_by_location, mean_temp_range_by_location};
use super::summary::{column_blocks, describe};
use crate::app::services::data_store::DataStorageObject;
use crate::constants::columns::{LOCATION, RAINFALL};
use crate::constants::{
    NO_RAINFALL_ROWS_MESSAGE, NO_TEMPERATURE_ROWS_MESSAGE, NOT_AVAILABLE,
    SUMMARY_COLUMNS_PER_BLOCK,
};
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const MEAN_RAINFALL_TITLE: &str = "Mean Rainfall by Area";
const TEMP_RANGE_TITLE: &str = "Top Temperature Range by Location";

/// One independent unit of report generation
#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    /// Print the first `lines` rows
    PreviewLines { lines: usize },
    /// Print descriptive statistics for each numeric column
    SummaryStats,
    /// Print the mean of all present rainfall values
    AverageRainfall,
    /// Chart the `top_n` locations with the highest mean rainfall
    MeanRainfallByArea { top_n: usize, output: PathBuf },
    /// Chart the `top_n` locations with the widest mean temperature range
    TopTempRangeByLocation { top_n: usize, output: PathBuf },
}

/// What a completed action produced
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Console output only
    Printed,
    /// A chart image was written
    ChartWritten { path: PathBuf },
    /// Nothing to chart; no file was written
    Skipped { reason: String },
    /// The chart could not be produced; the run continues
    ChartFailed { path: PathBuf, reason: String },
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ActionOutcome::ChartFailed { .. })
    }
}

impl ReportAction {
    pub fn name(&self) -> &'static str {
        match self {
            ReportAction::PreviewLines { .. } => "preview_lines",
            ReportAction::SummaryStats => "summary_stats",
            ReportAction::AverageRainfall => "average_rainfall",
            ReportAction::MeanRainfallByArea { .. } => "mean_rainfall_by_area",
            ReportAction::TopTempRangeByLocation { .. } => "top_temp_range_by_location",
        }
    }

    pub fn is_chart(&self) -> bool {
        matches!(
            self,
            ReportAction::MeanRainfallByArea { .. } | ReportAction::TopTempRangeByLocation { .. }
        )
    }

    /// Run this action against `data`, writing console output to `out`
    pub fn run<W: Write + ?Sized>(
        &self,
        data: &DataStorageObject,
        out: &mut W,
    ) -> Result<ActionOutcome> {
        debug!("Running report action {}", self.name());
        match self {
            ReportAction::PreviewLines { lines } => preview_lines(data, *lines, out),
            ReportAction::SummaryStats => summary_stats(data, out),
            ReportAction::AverageRainfall => {
                let average = average_rainfall(data);
                write_average(average, out)?;
                Ok(ActionOutcome::Printed)
            }
            ReportAction::MeanRainfallByArea { top_n, output } => {
                let result = mean_rainfall_chart(data, *top_n, output, out);
                recover_chart(MEAN_RAINFALL_TITLE, output, result, out)
            }
            ReportAction::TopTempRangeByLocation { top_n, output } => {
                let result = temp_range_chart(data, *top_n, output, out);
                recover_chart(TEMP_RANGE_TITLE, output, result, out)
            }
        }
    }
}

fn preview_lines<W: Write + ?Sized>(
    data: &DataStorageObject,
    lines: usize,
    out: &mut W,
) -> Result<ActionOutcome> {
    writeln!(out, "{}", data.table().head(Some(lines)))?;
    Ok(ActionOutcome::Printed)
}

fn summary_stats<W: Write + ?Sized>(
    data: &DataStorageObject,
    out: &mut W,
) -> Result<ActionOutcome> {
    let Some(stats) = describe(data.table())? else {
        writeln!(out, "No numeric columns to summarise.")?;
        return Ok(ActionOutcome::Printed);
    };

    // Polars elides columns past its display width, so wrap wide tables
    for block in column_blocks(&stats, SUMMARY_COLUMNS_PER_BLOCK)? {
        writeln!(out, "{}", block)?;
    }
    Ok(ActionOutcome::Printed)
}

/// Mean of every present, numeric `Rainfall` value; `None` if there are none
///
/// Missing cells, text values and rows without the column are skipped,
/// never counted as zero.
pub fn average_rainfall(data: &DataStorageObject) -> Option<f64> {
    let (total, count) = data
        .rows()
        .filter_map(|row| row.number(RAINFALL))
        .fold((0.0, 0usize), |(total, count), value| {
            (total + value, count + 1)
        });

    (count > 0).then(|| total / count as f64)
}

fn write_average<W: Write + ?Sized>(average: Option<f64>, out: &mut W) -> Result<()> {
    match average {
        Some(value) => writeln!(out, "Avg Rainfall: {:?}", value)?,
        None => writeln!(out, "Avg Rainfall: {}", NOT_AVAILABLE)?,
    }
    Ok(())
}

fn mean_rainfall_chart<W: Write + ?Sized>(
    data: &DataStorageObject,
    top_n: usize,
    output: &Path,
    out: &mut W,
) -> Result<ActionOutcome> {
    let groups = mean_rainfall_by_location(data.table(), top_n)?;
    if groups.is_empty() {
        writeln!(out, "{}", NO_RAINFALL_ROWS_MESSAGE)?;
        return Ok(ActionOutcome::Skipped {
            reason: NO_RAINFALL_ROWS_MESSAGE.to_string(),
        });
    }

    BarChart {
        title: MEAN_RAINFALL_TITLE,
        x_label: LOCATION,
        y_label: "Mean Rainfall (mm)",
        bars: &groups,
    }
    .render(output)?;

    writeln!(
        out,
        "Saved {} chart to {}",
        MEAN_RAINFALL_TITLE,
        output.display()
    )?;
    Ok(ActionOutcome::ChartWritten {
        path: output.to_path_buf(),
    })
}

fn temp_range_chart<W: Write + ?Sized>(
    data: &DataStorageObject,
    top_n: usize,
    output: &Path,
    out: &mut W,
) -> Result<ActionOutcome> {
    let Some(groups) = mean_temp_range_by_location(data.table(), top_n)? else {
        writeln!(out, "{}", NO_TEMPERATURE_ROWS_MESSAGE)?;
        return Ok(ActionOutcome::Skipped {
            reason: NO_TEMPERATURE_ROWS_MESSAGE.to_string(),
        });
    };

    BarChart {
        title: TEMP_RANGE_TITLE,
        x_label: LOCATION,
        y_label: "Mean Temperature Range (°C)",
        bars: &groups,
    }
    .render(output)?;

    writeln!(out, "Saved {} chart to {}", TEMP_RANGE_TITLE, output.display())?;
    Ok(ActionOutcome::ChartWritten {
        path: output.to_path_buf(),
    })
}

/// Convert a chart failure into an outcome after printing a diagnostic
fn recover_chart<W: Write + ?Sized>(
    title: &str,
    output: &Path,
    result: Result<ActionOutcome>,
    out: &mut W,
) -> Result<ActionOutcome> {
    match result {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            writeln!(out, "Failed to generate {} chart: {}", title, error)?;
            Ok(ActionOutcome::ChartFailed {
                path: output.to_path_buf(),
                reason: error.to_string(),
            })
        }
    }
}
