// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line classification

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_report::ReportBuilder;
use gotest_report::classify;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut builder = ReportBuilder::new();
        for line in input.lines() {
            let _ = classify(line);
            builder.process_line(line);
        }
        let _ = builder.finish();
    }
});
