// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Classification of single lines of `go test` output
//!
//! A line of `go test` output takes one of a handful of shapes:
//! - a package result line: `ok   pkg 0.010s` / `FAIL pkg [build failed]`
//! - a test status line: `--- FAIL: TestFoo (0.02s)`
//! - a structured output record: `{"Suite":"pkg","Test":"TestFoo","Msg":"..."}`
//! - a benchmark result: `BenchmarkFoo-8  1000000  1234 ns/op  48 B/op  2 allocs/op`
//! - a bare summary token (`PASS`) or coverage line
//! - anything else, which is free text
//!
//! [`classify`] tries these in that order and returns the first match.
//!
//! # Example
//!
//! ```
//! use gotest_report::line::{classify, Line};
//! use gotest_report::TestResult;
//!
//! match classify("--- FAIL: TestFoo/sub_case (0.02s)") {
//!     Line::Status(status) => {
//!         assert_eq!(status.result, TestResult::Fail);
//!         assert_eq!(status.name, "sub_case");
//!     }
//!     other => panic!("unexpected line: {other:?}"),
//! }
//! ```

use crate::duration::{parse_nanoseconds, parse_seconds};
use crate::model::{Benchmark, TestResult};
use regex::{Captures, Regex};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

// Whitespace and word classes are spelled out as ASCII; `\s` and `\w` in
// `regex` also match Unicode spaces and letters.

static RESULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(ok|FAIL)[\t\n\f\r ]+([^ ]+)[\t\n\f\r ]+(?:([0-9]+\.[0-9]+)s|\(cached\)|(\[[0-9A-Za-z_]+ failed\]))(?:[\t\n\f\r ]+coverage:[\t\n\f\r ]+([0-9]+\.[0-9]+)%[\t\n\f\r ]of[\t\n\f\r ]statements(?:[\t\n\f\r ]in[\t\n\f\r ].+)?)?$",
    )
    .expect("package result pattern is valid")
});

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--- (PASS|FAIL|SKIP): (.+) \(([0-9]+\.[0-9]+)(?: seconds|s)\)")
        .expect("status pattern is valid")
});

static INDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]+)---").expect("indent pattern is valid"));

static BENCHMARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Benchmark[^ -]+)(?:-[0-9]+[\t\n\f\r ]+|[\t\n\f\r ]+)([0-9]+)[\t\n\f\r ]+([0-9]+|[0-9]+\.[0-9]+)[\t\n\f\r ]ns/op(?:[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]B/op)?(?:[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]allocs/op)?",
    )
    .expect("benchmark pattern is valid")
});

static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(PASS|FAIL|SKIP)$").expect("summary pattern is valid"));

static COVERAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^coverage:[\t\n\f\r ]+([0-9]+\.[0-9]+)%[\t\n\f\r ]+of[\t\n\f\r ]+statements(?:[\t\n\f\r ]in[\t\n\f\r ].+)?$")
        .expect("coverage pattern is valid")
});

/// A classified line of test output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Terminal line of a package's run
    PackageResult(PackageResult),
    /// `--- STATUS: name (duration)`
    Status(StatusLine),
    /// Structured output record
    Output(OutputRecord),
    /// Benchmark result
    Benchmark(Benchmark),
    /// Bare `PASS`/`FAIL`/`SKIP`
    Summary(TestResult),
    /// Bare `coverage: N% of statements`
    Coverage(String),
    /// Anything else
    Text(&'a str),
}

/// Overall status of a package run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageStatus {
    /// `ok`
    Ok,
    /// `FAIL`
    Fail,
}

/// Fields of a package result line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageResult {
    /// `ok` or `FAIL`
    pub status: PackageStatus,
    /// Package import path
    pub name: String,
    /// Reported elapsed time; `None` for cached or failed builds
    pub duration: Option<Duration>,
    /// The run was served from the test cache
    pub cached: bool,
    /// Bracketed marker such as `[build failed]`
    pub failure_marker: Option<String>,
    /// Coverage percentage without the `%` sign
    pub coverage_pct: Option<String>,
}

/// Fields of a test status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    /// Result keyword
    pub result: TestResult,
    /// Name as printed, e.g. `TestFoo/case_1`
    pub full_name: String,
    /// Last `/` segment of the name, used to find the test
    pub name: String,
    /// Parsed duration, zero if unparseable
    pub duration: Duration,
    /// Leading whitespace before `---`
    pub indent: String,
}

/// One line of captured output attributed to a package and test
///
/// Decoding is lenient: keys match case-insensitively, a repeated key
/// overrides the earlier value, `null` leaves a field untouched and unknown
/// keys are ignored. A field holding any other non-string value rejects the
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Package name
    #[serde(rename = "Suite")]
    pub suite: String,
    /// Test name
    #[serde(rename = "Test")]
    pub test: String,
    /// Output text
    #[serde(rename = "Msg")]
    pub msg: String,
}

impl<'de> Deserialize<'de> for OutputRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OutputRecordVisitor)
    }
}

struct OutputRecordVisitor;

impl<'de> Visitor<'de> for OutputRecordVisitor {
    type Value = OutputRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with Suite, Test and Msg strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OutputRecord, A::Error> {
        let mut record = OutputRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("suite") {
                &mut record.suite
            } else if key.eq_ignore_ascii_case("test") {
                &mut record.test
            } else if key.eq_ignore_ascii_case("msg") {
                &mut record.msg
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(record)
    }
}

/// Classify a single line (without its line terminator)
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = RESULT_RE.captures(line) {
        return Line::PackageResult(package_result(&caps));
    }
    if let Some(caps) = STATUS_RE.captures(line) {
        return Line::Status(status_line(line, &caps));
    }
    if let Some(record) = output_record(line) {
        return Line::Output(record);
    }
    if let Some(benchmark) = parse_benchmark(line) {
        return Line::Benchmark(benchmark);
    }
    if let Some(result) = SUMMARY_RE
        .captures(line)
        .and_then(|caps| TestResult::from_keyword(&caps[1]))
    {
        return Line::Summary(result);
    }
    if let Some(caps) = COVERAGE_RE.captures(line) {
        return Line::Coverage(caps[1].to_string());
    }
    Line::Text(line)
}

/// Parse a benchmark result line
#[must_use]
pub fn parse_benchmark(line: &str) -> Option<Benchmark> {
    let caps = BENCHMARK_RE.captures(line)?;
    Some(Benchmark {
        name: caps[1].to_string(),
        duration: parse_nanoseconds(&caps[3]),
        bytes: optional_count(&caps, 4),
        allocs: optional_count(&caps, 5),
    })
}

/// Reduce a status line name to its last path segment
///
/// Follows `path.Base` semantics: trailing slashes are ignored, an empty
/// name becomes `.` and a name made only of slashes becomes `/`.
#[must_use]
pub fn base_name(name: &str) -> &str {
    if name.is_empty() {
        return ".";
    }
    let trimmed = name.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn package_result(caps: &Captures<'_>) -> PackageResult {
    let status = if &caps[1] == "ok" {
        PackageStatus::Ok
    } else {
        PackageStatus::Fail
    };
    PackageResult {
        status,
        name: caps[2].to_string(),
        duration: caps.get(3).map(|m| parse_seconds(m.as_str())),
        cached: caps.get(3).is_none() && caps.get(4).is_none(),
        failure_marker: caps.get(4).map(|m| m.as_str().to_string()),
        coverage_pct: caps.get(5).map(|m| m.as_str().to_string()),
    }
}

fn status_line(line: &str, caps: &Captures<'_>) -> StatusLine {
    let full_name = &caps[2];
    StatusLine {
        result: TestResult::from_keyword(&caps[1]).unwrap_or_default(),
        full_name: full_name.to_string(),
        name: base_name(full_name).to_string(),
        duration: parse_seconds(&caps[3]),
        indent: INDENT_RE
            .captures(line)
            .map(|c| c[1].to_string())
            .unwrap_or_default(),
    }
}

fn output_record(line: &str) -> Option<OutputRecord> {
    serde_json::from_str(line).ok()
}

fn optional_count(caps: &Captures<'_>, group: usize) -> u64 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
