//! gotest-report: turn `go test` output into a structured report
//!
//! Reads `go test` output from stdin (or `--input`) and prints a summary or
//! the full report as JSON.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use gotest_report_cli::config::Config;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    match gotest_report_cli::run(&config, &mut stdout.lock()) {
        Ok(report) if config.fail_on_failures && report.failures() > 0 => {
            info!(failures = report.failures(), "tests failed");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
