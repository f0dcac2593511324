//! gotest-report-cli library
//!
//! This module exports the command's configuration, rendering and run loop
//! for use in integration tests and by the `gotest-report` binary.

pub mod config;
pub mod render;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;
use gotest_report::{Report, parse};
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};

/// Read test output as configured, parse it and write the rendered report
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read, or the report cannot be written.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<Report> {
    config.validate()?;

    let report = match config.input {
        Some(ref path) => {
            debug!(path = %path.display(), "reading test output from file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            parse(BufReader::new(file), config.package_name())
        }
        None => {
            debug!("reading test output from stdin");
            parse(io::stdin().lock(), config.package_name())
        }
    }
    .context("Failed to read test output")?;

    info!(
        packages = report.packages.len(),
        failures = report.failures(),
        "parsed test output"
    );

    match config.format {
        OutputFormat::Summary => render::write_summary(&report, out)?,
        OutputFormat::Json => render::write_json(&report, out)?,
    }
    out.flush()?;

    Ok(report)
}
