//! Report generator
//!
//! Turns a [`ReportConfig`] into an ordered list of [`ReportAction`]s and runs
//! them one after another against a single borrowed data container.

use super::actions::{ActionOutcome, ReportAction};
use crate::app::services::data_store::DataStorageObject;
use crate::config::ReportConfig;
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info, warn};

/// Whether the generator currently holds a built action list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Idle,
    Built,
}

/// Outcome of one action within a run
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub action: &'static str,
    pub outcome: ActionOutcome,
}

/// Per-action results of a completed run, in execution order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub actions: Vec<ActionReport>,
}

impl ReportSummary {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn charts_written(&self) -> usize {
        self.actions
            .iter()
            .filter(|report| matches!(report.outcome, ActionOutcome::ChartWritten { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ActionReport> {
        self.actions.iter().filter(|report| report.outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Builds and runs report actions against one data container
#[derive(Debug)]
pub struct ReportGenerator<'a> {
    data: &'a DataStorageObject,
    config: ReportConfig,
    actions: Vec<ReportAction>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(data: &'a DataStorageObject, config: ReportConfig) -> Self {
        Self {
            data,
            config,
            actions: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn data(&self) -> &DataStorageObject {
        self.data
    }

    pub fn actions(&self) -> &[ReportAction] {
        &self.actions
    }

    pub fn state(&self) -> GeneratorState {
        if self.actions.is_empty() {
            GeneratorState::Idle
        } else {
            GeneratorState::Built
        }
    }

    /// Rebuild the action list from the configuration
    ///
    /// Order is fixed: preview, summary, average rainfall, mean rainfall by
    /// area, temperature range by location. Any previous list is discarded.
    pub fn build_actions(&mut self) {
        self.actions.clear();
        let config = &self.config;

        if config.preview_lines > 0 {
            self.actions.push(ReportAction::PreviewLines {
                lines: config.preview_lines,
            });
        }
        if config.summary_stats {
            self.actions.push(ReportAction::SummaryStats);
        }
        if config.average_rainfall {
            self.actions.push(ReportAction::AverageRainfall);
        }
        if config.mean_rainfall_by_area {
            self.actions.push(ReportAction::MeanRainfallByArea {
                top_n: config.mean_rainfall_top_n,
                output: config.mean_rainfall_output.clone(),
            });
        }
        if config.top_temp_range_by_area {
            self.actions.push(ReportAction::TopTempRangeByLocation {
                top_n: config.temp_range_top_n,
                output: config.temp_range_output.clone(),
            });
        }

        debug!("Built {} report actions", self.actions.len());
    }

    /// Run the report, printing to stdout
    pub fn run_report(&mut self) -> Result<ReportSummary> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_report_to(&mut handle)
    }

    /// Run the report, writing console output to `out`
    ///
    /// An error from a text action stops the run. Chart failures are logged
    /// and recorded in the summary, and later actions still run. The action
    /// list is empty again once the run ends.
    pub fn run_report_to<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<ReportSummary> {
        self.config.validate()?;
        self.build_actions();
        let actions = std::mem::take(&mut self.actions);
        info!("Running report with {} actions", actions.len());

        let mut summary = ReportSummary::default();
        for action in &actions {
            let outcome = action.run(self.data, out)?;
            if let ActionOutcome::ChartFailed { path, reason } = &outcome {
                warn!(
                    "Report action {} failed for {}: {}",
                    action.name(),
                    path.display(),
                    reason
                );
            }
            summary.actions.push(ActionReport {
                action: action.name(),
                outcome,
            });
        }

        out.flush()?;
        info!("Report completed with {} actions", summary.len());
        Ok(summary)
    }
}
