// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text layout of the log file.
//!
//! ```text
//! <caption>
//! (timestamp: Fri, 30 Jan 2026 08:14:09 +0000)<separator>
//! 2026-01-30 08:14:09 [/invoices/42] >> main > render
//! <message><separator>
//! ```

/// Joins frames in the stack summary of a heading.
pub const STACK_JOIN: &str = " > ";

/// Header written when a writer opens in overwrite mode.
pub fn format_header(caption: &str, timestamp: &str, separator: &str) -> String {
    format!("{}\n(timestamp: {}){}", caption, timestamp, separator)
}

/// Context fragment of a heading: `[<request>] >> <stack summary>`.
pub fn format_context(request_id: &str, stack: &str) -> String {
    format!("[{}] >> {}", request_id, stack)
}

/// Heading line: present parts joined by a space, newline-terminated.
///
/// Returns an empty string when neither part is present.
pub fn format_heading(timestamp: Option<&str>, context: Option<&str>) -> String {
    let parts: Vec<&str> = [timestamp, context].into_iter().flatten().collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("{}\n", parts.join(" "))
    }
}

/// A complete entry as appended to the file.
pub fn format_entry(heading: &str, message: &str, separator: &str) -> String {
    format!("\n{}{}{}", heading, message, separator)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
