//! Shared components for CLI commands
//!
//! Logging setup, output directory preparation and the end-of-run summary.

use crate::app::services::report::{ActionOutcome, ReportSummary};
use crate::cli::args::Args;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use colored::*;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Set up structured logging to stderr and, unless disabled, a log file
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_report={}", log_level)));

    let file_layer = match args.log_file() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| ReportError::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create the directories that will hold the enabled charts
pub fn prepare_output_dirs(config: &ReportConfig) -> Result<()> {
    for output in config.chart_outputs() {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
            debug!("Chart output directory ready: {}", parent.display());
        }
    }
    Ok(())
}

/// Print a colored summary of a completed run to stderr
pub fn print_summary(summary: &ReportSummary, elapsed: Duration) {
    eprintln!("\n{}", "Report Summary".bright_green().bold());
    eprintln!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed.as_millis().to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Actions run:".bright_cyan(),
        summary.len().to_string().bright_white()
    );

    for report in &summary.actions {
        match &report.outcome {
            ActionOutcome::Printed => {}
            ActionOutcome::ChartWritten { path } => eprintln!(
                "  {} {} -> {}",
                "Chart:".bright_cyan(),
                report.action,
                path.display().to_string().bright_white()
            ),
            ActionOutcome::Skipped { reason } => eprintln!(
                "  {} {} ({})",
                "Skipped:".bright_yellow(),
                report.action,
                reason
            ),
            ActionOutcome::ChartFailed { reason, .. } => eprintln!(
                "  {} {} ({})",
                "Failed:".bright_red(),
                report.action.bright_red().bold(),
                reason
            ),
        }
    }
}
