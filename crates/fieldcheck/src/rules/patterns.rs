//! Pre-compiled format patterns for the built-in string-format rules
//!
//! These are opaque, swappable assets — the engine's contract is only that
//! `digits`/`dateISO`/`url`/`email` match "the corresponding format", not any
//! particular regex. Compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Digit-only strings: one or more ASCII digits, nothing else.
pub static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern compiles"));

/// ISO calendar dates in `YYYY-MM-DD` form.
pub static DATE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("dateISO pattern compiles"));

/// Absolute http(s)/ftp URLs.
pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?|ftp)://[^\s/$.?#][^\s]*$").expect("url pattern compiles")
});

/// Email addresses: local part, `@`, domain with at least one dot.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// ============================================================================
// TESTS
// ============================================================================
