//! Report data model

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single test
///
/// Tests that never see a status line keep the default, `Pass`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResult {
    /// Test passed
    #[default]
    Pass,
    /// Test failed
    Fail,
    /// Test was skipped
    Skip,
}

impl TestResult {
    /// Map a `PASS`/`FAIL`/`SKIP` keyword to a result
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "PASS" => Some(Self::Pass),
            "FAIL" => Some(Self::Fail),
            "SKIP" => Some(Self::Skip),
            _ => None,
        }
    }

    /// The keyword as it appears in test output
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }
}

impl std::fmt::Display for TestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collection of package results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Packages in the order their result lines were seen
    pub packages: Vec<Package>,
}

impl Report {
    /// Count failed tests across all packages
    #[must_use]
    pub fn failures(&self) -> usize {
        self.tests().filter(|t| t.failed()).count()
    }

    /// Whether no package was ever closed by a result line
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over every test of every package
    pub fn tests(&self) -> impl Iterator<Item = &Test> {
        self.packages.iter().flat_map(|p| p.tests.iter())
    }
}

/// Test results of a single package (one test binary)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package import path
    pub name: String,
    /// Sum of the durations of the package's tests
    pub duration: Duration,
    /// Tests in first-seen order
    pub tests: Vec<Test>,
    /// Benchmarks in the order they were reported
    pub benchmarks: Vec<Benchmark>,
    /// Coverage percentage; empty when not reported
    pub coverage_pct: String,
    /// Duration in whole milliseconds
    ///
    /// Deprecated, use `duration` instead.
    pub time: u64,
}

impl Package {
    /// Build a package from its tests, totalling their durations
    #[must_use]
    pub fn new(name: impl Into<String>, tests: Vec<Test>) -> Self {
        let duration = tests.iter().map(|t| t.duration).sum();
        Self {
            name: name.into(),
            duration,
            time: millis(duration),
            tests,
            ..Default::default()
        }
    }

    /// Number of tests with the given result
    #[must_use]
    pub fn count(&self, result: TestResult) -> usize {
        self.tests.iter().filter(|t| t.result == result).count()
    }

    /// Tests whose result is `Fail`
    #[must_use]
    pub fn failed_tests(&self) -> Vec<&Test> {
        self.tests.iter().filter(|t| t.failed()).collect()
    }
}

/// A single test case, possibly a subtest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Test name as reported by the output records
    pub name: String,
    /// Duration taken from the status line
    pub duration: Duration,
    /// Final result
    pub result: TestResult,
    /// Output captured from structured records
    pub output: Vec<String>,
    /// Lines following a `--- FAIL` status line
    pub failure: Vec<String>,
    /// Lines following a `--- SKIP` status line
    pub skip_msg: Vec<String>,
    /// Leading whitespace of the status line; marks subtest nesting
    pub subtest_indent: String,
    /// Duration in whole milliseconds
    ///
    /// Deprecated, use `duration` instead.
    pub time: u64,
}

impl Test {
    /// Create a test with no output and the default result
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the duration, keeping the millisecond field in step
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.time = millis(duration);
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result == TestResult::Pass
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.result == TestResult::Fail
    }

    /// Check if the test was skipped
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.result == TestResult::Skip
    }
}

/// Results of a single benchmark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Benchmark name without the `-N` GOMAXPROCS suffix
    pub name: String,
    /// Time per operation
    pub duration: Duration,
    /// Bytes allocated per operation (B/op)
    pub bytes: u64,
    /// Allocations per operation (allocs/op)
    pub allocs: u64,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
