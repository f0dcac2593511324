// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gotest-report: `go test` output processing
//!
//! This library crate converts the mixed text output of `go test` (status
//! lines, structured JSON output records, benchmark results and package
//! result lines) into a [`Report`] of packages and their tests.
//!
//! # Example
//!
//! ```no_run
//! use gotest_report::parse;
//! use std::io::{self, BufReader};
//!
//! let report = parse(BufReader::new(io::stdin()), "github.com/acme/widgets").unwrap();
//! for package in &report.packages {
//!     println!("{}: {} tests", package.name, package.tests.len());
//! }
//! println!("{} failures", report.failures());
//! ```

pub mod duration;
pub mod error;
pub mod line;
pub mod model;
pub mod parser;

pub use error::ParseError;
pub use line::{Line, classify};
pub use model::{Benchmark, Package, Report, Test, TestResult};
pub use parser::{ReportBuilder, parse, parse_str};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::model::{Package, Report, Test, TestResult};
    pub use crate::parser::{ReportBuilder, parse, parse_str};
}
