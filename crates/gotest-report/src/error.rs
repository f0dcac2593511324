// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gotest-report

use thiserror::Error;

/// Errors that can occur while parsing test output
///
/// Malformed lines are never an error; only the underlying reader can fail.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error reading the test output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
