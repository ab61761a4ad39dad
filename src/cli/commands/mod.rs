//! Command implementations for the weather report CLI
//!
//! The tool has a single batch command; [`run`] is the entry point used by
//! the binary.

pub mod report;
pub mod shared;

use crate::app::services::report::ReportSummary;
use crate::cli::args::Args;
use crate::error::Result;

/// Main command runner for the weather report tool
pub fn run(args: Args) -> Result<ReportSummary> {
    report::run_report(args)
}
