// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formats used in log files.

use chrono::{DateTime, FixedOffset};

/// Sortable timestamp used in entry headings: `2026-01-30 08:14:09`.
pub fn format_heading_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// RFC 2822 timestamp used in the file header:
/// `Fri, 30 Jan 2026 08:14:09 +0000`.
pub fn format_header_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc2822()
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
