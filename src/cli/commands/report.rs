//! Report command implementation
//!
//! Load-then-report workflow for a single CSV file: validate and load the
//! file, wrap it in a data container, and run the configured actions.

use super::shared::{prepare_output_dirs, print_summary, setup_logging};
use crate::app::services::csv_loader::DataLoader;
use crate::app::services::data_store::DataStorageObject;
use crate::app::services::report::{ReportGenerator, ReportSummary};
use crate::cli::args::Args;
use crate::error::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Report command runner
pub fn run_report(args: Args) -> Result<ReportSummary> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    info!("Application started");
    debug!("Report arguments: {:?}", args);

    let config = args.to_report_config()?;
    prepare_output_dirs(&config)?;

    info!("Loading CSV from: {}", args.csv_path.display());
    let data = DataStorageObject::from(DataLoader::new().load_csv(&args.csv_path)?);

    info!("Running report with config: {:?}", config);
    let mut generator = ReportGenerator::new(&data, config);
    let summary = generator.run_report()?;

    if !args.quiet {
        print_summary(&summary, start_time.elapsed());
    }
    info!("Application finished successfully");
    Ok(summary)
}
