// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test` output parsing
//!
//! This module turns an interleaved stream of `go test` output into a
//! [`Report`]. Tests are discovered from structured output records, resolved
//! by `--- STATUS` lines, and moved into packages when a package result line
//! (`ok pkg 0.1s`) closes the run.
//!
//! Tests of a package that is never closed by a result line are dropped.
//!
//! # Example
//!
//! ```
//! use gotest_report::parser::parse_str;
//!
//! let output = r#"{"Suite":"pkgA","Test":"TestFoo","Msg":"hello\n"}
//! --- PASS: TestFoo (0.01s)
//! ok   pkgA 0.010s"#;
//!
//! let report = parse_str(output, "");
//! assert_eq!(report.packages.len(), 1);
//! assert_eq!(report.failures(), 0);
//! ```

use crate::error::ParseError;
use crate::line::{Line, OutputRecord, PackageResult, StatusLine, classify};
use crate::model::{Benchmark, Package, Report, Test, TestResult};
use indexmap::IndexMap;
use std::io::BufRead;
use tracing::{debug, debug_span, trace};

/// Parse `go test` output from a reader
///
/// `package_name` is the package the caller believes is being tested. It is
/// recorded on the parse span but does not recover tests whose package is
/// never closed by a result line.
///
/// Invalid UTF-8 is replaced rather than treated as an error.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading from `reader` fails. No partial
/// report is returned.
pub fn parse<R: BufRead>(mut reader: R, package_name: &str) -> Result<Report, ParseError> {
    let _span = debug_span!("parse", package = package_name).entered();
    let mut builder = ReportBuilder::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        builder.process_line(&line);
    }

    Ok(builder.finish())
}

/// Parse `go test` output held in memory
#[must_use]
pub fn parse_str(output: &str, package_name: &str) -> Report {
    let _span = debug_span!("parse", package = package_name).entered();
    let mut builder = ReportBuilder::new();
    for line in output.lines() {
        builder.process_line(line);
    }
    builder.finish()
}

/// Drop a trailing `\n` or `\r\n`; a lone `\r` stays part of the line.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

// ============================================================================
// Report builder
// ============================================================================

/// Position of the test that free text lines are routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Active {
    /// Still in the accumulation buffer
    Buffered { suite: usize, test: usize },
    /// Already moved into a reported package
    Emitted { package: usize, test: usize },
}

/// Incremental report builder, fed one line at a time
///
/// ```
/// use gotest_report::ReportBuilder;
///
/// let mut builder = ReportBuilder::new();
/// builder.process_line(r#"{"Suite":"pkgA","Test":"TestBar","Msg":"..."}"#);
/// builder.process_line("ok pkgA (cached)");
/// let report = builder.finish();
/// assert_eq!(report.packages[0].tests[0].name, "TestBar");
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
    suites: IndexMap<String, IndexMap<String, Test>>,
    current: Option<Active>,
    benchmarks: Vec<Benchmark>,
}

impl ReportBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of output (without its line terminator)
    pub fn process_line(&mut self, line: &str) {
        match classify(line) {
            Line::PackageResult(result) => self.flush(&result),
            Line::Status(status) => self.resolve(status),
            Line::Output(record) => self.record_output(record),
            Line::Benchmark(benchmark) => {
                trace!(name = %benchmark.name, "benchmark result");
                self.benchmarks.push(benchmark);
            }
            Line::Summary(_) | Line::Coverage(_) | Line::Text(_) => self.append_text(line),
        }
    }

    /// Packages closed so far
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Number of tests waiting for a package result line
    #[must_use]
    pub fn pending_tests(&self) -> usize {
        self.suites.values().map(IndexMap::len).sum()
    }

    /// Finish parsing and return the report
    ///
    /// Tests and benchmarks not yet closed by a package result line are
    /// discarded.
    #[must_use]
    pub fn finish(self) -> Report {
        if !self.suites.is_empty() || !self.benchmarks.is_empty() {
            debug!(
                suites = self.suites.len(),
                tests = self.pending_tests(),
                benchmarks = self.benchmarks.len(),
                "discarding results without a package result line"
            );
        }
        self.report
    }

    /// Move every buffered suite into the report
    fn flush(&mut self, result: &PackageResult) {
        let first = self.report.packages.len();
        if let Some(Active::Buffered { suite, test }) = self.current {
            self.current = Some(Active::Emitted {
                package: first + suite,
                test,
            });
        }

        for (name, tests) in self.suites.drain(..) {
            self.report
                .packages
                .push(Package::new(name, tests.into_values().collect()));
        }

        if !self.benchmarks.is_empty() {
            let benchmarks = std::mem::take(&mut self.benchmarks);
            let flushed = &mut self.report.packages[first..];
            let target = flushed
                .iter()
                .position(|p| p.name == result.name)
                .or_else(|| flushed.len().checked_sub(1));
            match target {
                Some(index) => flushed[index].benchmarks.extend(benchmarks),
                None => {
                    let mut package = Package::new(result.name.clone(), Vec::new());
                    package.benchmarks = benchmarks;
                    self.report.packages.push(package);
                }
            }
        }

        debug!(
            package = %result.name,
            flushed = self.report.packages.len() - first,
            "package result"
        );
    }

    /// Apply a status line to the first buffered test with a matching name
    fn resolve(&mut self, status: StatusLine) {
        let found = self.suites.values().enumerate().find_map(|(suite, tests)| {
            tests
                .get_index_of(status.name.as_str())
                .map(|test| (suite, test))
        });

        let Some((suite, index)) = found else {
            trace!(name = %status.name, "status line for unknown test");
            self.current = None;
            return;
        };

        if let Some(test) = self.buffered_mut(suite, index) {
            test.result = status.result;
            test.set_duration(status.duration);
            test.subtest_indent = status.indent;
        }
        self.current = Some(Active::Buffered { suite, test: index });
    }

    fn record_output(&mut self, record: OutputRecord) {
        let OutputRecord { suite, test, msg } = record;
        let tests = self.suites.entry(suite).or_default();
        tests
            .entry(test.clone())
            .or_insert_with(|| Test::new(test))
            .output
            .push(msg);
    }

    /// Attach free text to the active test if it failed or was skipped
    fn append_text(&mut self, line: &str) {
        let Some(test) = self.active_mut() else {
            return;
        };
        match test.result {
            TestResult::Fail => test.failure.push(line.to_string()),
            TestResult::Skip => test.skip_msg.push(line.to_string()),
            TestResult::Pass => {}
        }
    }

    fn active_mut(&mut self) -> Option<&mut Test> {
        match self.current? {
            Active::Buffered { suite, test } => self.buffered_mut(suite, test),
            Active::Emitted { package, test } => {
                self.report.packages.get_mut(package)?.tests.get_mut(test)
            }
        }
    }

    fn buffered_mut(&mut self, suite: usize, test: usize) -> Option<&mut Test> {
        let (_, tests) = self.suites.get_index_mut(suite)?;
        tests.get_index_mut(test).map(|(_, t)| t)
    }
}
