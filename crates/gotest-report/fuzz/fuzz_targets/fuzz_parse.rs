// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the report parser
//!
//! Arbitrary bytes, including invalid UTF-8, are fed through `parse`.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_report::parse;

fuzz_target!(|data: &[u8]| {
    // Reading from a byte slice cannot fail, so parse must always succeed
    let report = parse(data, "fuzz").expect("in-memory parse failed");

    // Package durations always equal the sum of their tests
    for package in &report.packages {
        let total: std::time::Duration = package.tests.iter().map(|t| t.duration).sum();
        assert_eq!(package.duration, total);
    }
    let _ = report.failures();
});
