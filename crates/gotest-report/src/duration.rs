// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Lenient duration parsing for numbers taken from test output
//!
//! Both helpers return `Duration::ZERO` for empty or unparseable input.

use std::time::Duration;

/// Interpret a decimal number as seconds, e.g. `"0.010"` from `(0.010s)`
#[must_use]
pub fn parse_seconds(value: &str) -> Duration {
    parse_scaled(value, 1_000_000_000)
}

/// Interpret a decimal number as nanoseconds, e.g. `"1234.5"` from `1234.5 ns/op`
///
/// Fractions of a nanosecond are truncated.
#[must_use]
pub fn parse_nanoseconds(value: &str) -> Duration {
    parse_scaled(value, 1)
}

/// Parse `<digits>[.<digits>]` into whole nanoseconds, given the number of
/// nanoseconds in one unit
fn parse_scaled(value: &str, nanos_per_unit: u64) -> Duration {
    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
    if whole.is_empty() && frac.is_empty() {
        return Duration::ZERO;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Duration::ZERO;
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        match whole.parse() {
            Ok(n) => n,
            Err(_) => return Duration::ZERO,
        }
    };

    // Accumulate fractional digits until they fall below one nanosecond
    let mut frac_nanos: u64 = 0;
    let mut scale = nanos_per_unit;
    for digit in frac.bytes() {
        scale /= 10;
        if scale == 0 {
            break;
        }
        frac_nanos += u64::from(digit - b'0') * scale;
    }

    whole
        .checked_mul(nanos_per_unit)
        .and_then(|n| n.checked_add(frac_nanos))
        .map(Duration::from_nanos)
        .unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("0.010"), Duration::from_millis(10));
        assert_eq!(parse_seconds("0.01"), Duration::from_millis(10));
        assert_eq!(parse_seconds("1.5"), Duration::from_millis(1500));
        assert_eq!(parse_seconds("12"), Duration::from_secs(12));
        assert_eq!(parse_seconds("0.000000001"), Duration::from_nanos(1));
    }

    #[test]
    fn test_parse_seconds_truncates_below_nanosecond() {
        assert_eq!(parse_seconds("0.0000000019"), Duration::from_nanos(1));
    }

    #[test]
    fn test_parse_seconds_empty_and_invalid() {
        assert_eq!(parse_seconds(""), Duration::ZERO);
        assert_eq!(parse_seconds("."), Duration::ZERO);
        assert_eq!(parse_seconds("abc"), Duration::ZERO);
        assert_eq!(parse_seconds("-1.0"), Duration::ZERO);
        assert_eq!(parse_seconds("1.2.3"), Duration::ZERO);
        assert_eq!(parse_seconds("99999999999999999999"), Duration::ZERO);
    }

    #[test]
    fn test_parse_nanoseconds() {
        assert_eq!(parse_nanoseconds("1234"), Duration::from_nanos(1234));
        assert_eq!(parse_nanoseconds("1234.9"), Duration::from_nanos(1234));
        assert_eq!(parse_nanoseconds("0.5"), Duration::ZERO);
        assert_eq!(parse_nanoseconds(""), Duration::ZERO);
        assert_eq!(parse_nanoseconds("n/a"), Duration::ZERO);
    }
}
