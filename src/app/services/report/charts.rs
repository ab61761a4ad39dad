//! Bar chart rendering to PNG
//!
//! Text (title, axis descriptions, location labels) is drawn on a best-effort
//! basis: hosts without usable system fonts still get a chart with bars and
//! axes written to disk.

use super::grouping::GroupValue;
use crate::constants::{CHART_FONT, CHART_HEIGHT, CHART_LABEL_SIZE, CHART_TITLE_SIZE, CHART_WIDTH};
use crate::error::{ReportError, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// A labeled bar chart with one bar per location
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub bars: &'a [GroupValue],
}

impl BarChart<'_> {
    /// Value axis range, always including zero with headroom above the bars
    fn value_range(&self) -> (f64, f64) {
        let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let min = self.bars.iter().map(|b| b.value).fold(0.0, f64::min);

        let upper = if max > 0.0 { max * 1.1 } else { 1.0 };
        let lower = if min < 0.0 { min * 1.1 } else { 0.0 };
        (lower, upper)
    }

    /// Render the chart to `path`, overwriting any existing file
    pub fn render(&self, path: &Path) -> Result<()> {
        if self.bars.is_empty() {
            return Err(ReportError::chart_rendering(path, "no bars to draw"));
        }
        let fail = |e: &dyn std::fmt::Display| ReportError::chart_rendering(path, e.to_string());

        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| fail(&e))?;

        let plot_area = match root.titled(self.title, (CHART_FONT, CHART_TITLE_SIZE)) {
            Ok(area) => area,
            Err(e) => {
                debug!("Skipping chart title: {}", e);
                root.clone()
            }
        };

        let (lower, upper) = self.value_range();
        let mut chart = ChartBuilder::on(&plot_area)
            .margin(20)
            .x_label_area_size(80)
            .y_label_area_size(70)
            .build_cartesian_2d((0..self.bars.len() as u32).into_segmented(), lower..upper)
            .map_err(|e| fail(&e))?;

        let labels: Vec<&str> = self.bars.iter().map(|b| b.location.as_str()).collect();
        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        if let Err(e) = chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(self.bars.len())
            .x_label_formatter(&label_for)
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .label_style((CHART_FONT, CHART_LABEL_SIZE))
            .draw()
        {
            debug!("Skipping chart labels: {}", e);
        }

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.mix(0.7).filled())
                    .margin(10)
                    .data(
                        self.bars
                            .iter()
                            .enumerate()
                            .map(|(i, bar)| (i as u32, bar.value)),
                    ),
            )
            .map_err(|e| fail(&e))?;

        root.present().map_err(|e| fail(&e))?;
        debug!("Wrote {} bar chart to {}", self.bars.len(), path.display());
        Ok(())
    }
}
