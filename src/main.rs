use clap::Parser;
use std::process;
use weather_report::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(summary) => {
            // Chart failures are reported in the summary but do not fail the run
            if summary.has_failures() {
                eprintln!("Report completed with chart failures");
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(error.exit_code());
        }
    }
}
