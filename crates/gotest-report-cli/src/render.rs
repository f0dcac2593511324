// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering for the command line

use std::io::{self, Write};
use std::time::Duration;

use gotest_report::{Package, Report, TestResult};

/// Write a human-readable summary of the report
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary(report: &Report, out: &mut impl Write) -> io::Result<()> {
    for package in &report.packages {
        write_package(package, out)?;
    }

    let tests = report.tests().count();
    writeln!(
        out,
        "{} packages, {} tests, {} failed",
        report.packages.len(),
        tests,
        report.failures()
    )
}

/// Write the full report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_json(report: &Report, out: &mut impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn write_package(package: &Package, out: &mut impl Write) -> io::Result<()> {
    let failed = package.count(TestResult::Fail);
    let status = if failed > 0 { "FAIL" } else { "ok" };
    writeln!(
        out,
        "{status:<4}  {}  {}  ({} passed, {failed} failed, {} skipped)",
        package.name,
        seconds(package.duration),
        package.count(TestResult::Pass),
        package.count(TestResult::Skip),
    )?;

    for test in package.failed_tests() {
        writeln!(out, "    --- FAIL: {} ({})", test.name, seconds(test.duration))?;
        for line in &test.failure {
            writeln!(out, "        {}", line.trim_start())?;
        }
    }

    for bench in &package.benchmarks {
        writeln!(
            out,
            "    {}  {} ns/op  {} B/op  {} allocs/op",
            bench.name,
            bench.duration.as_nanos(),
            bench.bytes,
            bench.allocs
        )?;
    }
    Ok(())
}

fn seconds(duration: Duration) -> String {
    format!("{:.3}s", duration.as_secs_f64())
}
