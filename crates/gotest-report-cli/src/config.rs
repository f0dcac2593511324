//! Configuration for the gotest-report command
//!
//! This module provides the command-line configuration: where test output is
//! read from, the fallback package name, the output format, and logging
//! options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// gotest-report - turn `go test` output into a structured report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gotest-report")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Read test output from this file instead of stdin
    #[arg(short, long, env = "GOTEST_REPORT_INPUT")]
    pub input: Option<PathBuf>,

    /// Package name to assume when the output does not name one
    ///
    /// Recorded for diagnostics; tests of a package that never prints a
    /// result line are still dropped.
    #[arg(short, long, env = "GOTEST_REPORT_PACKAGE")]
    pub package_name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Exit with status 1 if any test failed
    #[arg(long, default_value = "false")]
    pub fail_on_failures: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How the report is written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable per-package summary
    #[default]
    Summary,
    /// Pretty-printed JSON of the full report
    Json,
}

impl Config {
    /// The fallback package name, empty if none was given
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.package_name.as_deref().unwrap_or("")
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is given but does not exist or is
    /// not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
