// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry layout: heading composition and separators.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn entry_round_trip() {
    let scratch = Scratch::new();
    let writer = scratch
        .writer("app.log")
        .caption("T")
        .separator("|END|")
        .timestamps(false)
        .open()
        .unwrap();

    writer.log("hello").unwrap();

    let content = scratch.read("app.log");
    assert!(content.ends_with("\nhello|END|"));
    assert_eq!(content.matches("hello").count(), 1);
}

#[test]
fn stack_heading_has_timestamp_and_double_arrow() {
    let scratch = Scratch::new();
    let writer = scratch
        .writer("app.log")
        .overwrite(false)
        .request_context(StaticRequest("/orders".to_string()))
        .open()
        .unwrap();

    writer.log_with_stack("m").unwrap();

    let content = scratch.read("app.log");
    let heading = content.lines().nth(1).unwrap();
    assert!(heading.starts_with("2026-01-30 08:14:09 [/orders] >> "), "{}", heading);
    assert!(heading.len() > "2026-01-30 08:14:09 [/orders] >> ".len());
    assert!(content.ends_with("\nm\n----"));
}

#[test]
fn bare_entry_is_preceded_by_single_newline() {
    let scratch = Scratch::new();
    let writer = scratch
        .writer("app.log")
        .overwrite(false)
        .timestamps(false)
        .open()
        .unwrap();

    writer.log("m").unwrap();

    assert_eq!(scratch.read("app.log"), "\nm\n----");
}

#[test]
fn full_file_layout() {
    let scratch = Scratch::new();
    let clock = FakeClock::new();
    let writer = LogWriter::builder(scratch.path("app.log"))
        .clock(clock.clone())
        .caption("Billing")
        .request_context(|| "GET /invoices".to_string())
        .stack_formatter(|_: &std::panic::Location<'_>, join: &str| {
            ["handler", "render"].join(join)
        })
        .open()
        .unwrap();

    writer.log("started").unwrap();
    clock.advance(std::time::Duration::from_secs(5));
    writer.log_with_stack("rendering").unwrap();

    assert_eq!(
        scratch.read("app.log"),
        "Billing\n\
         (timestamp: Fri, 30 Jan 2026 08:14:09 +0000)\n----\n\
         2026-01-30 08:14:09\n\
         started\n----\n\
         2026-01-30 08:14:14 [GET /invoices] >> handler > render\n\
         rendering\n----"
    );
}

#[test]
fn default_stack_heading_names_the_calling_code() {
    let scratch = Scratch::new();
    let writer = scratch
        .writer("app.log")
        .overwrite(false)
        .timestamps(false)
        .open()
        .unwrap();

    writer.log_with_stack("m").unwrap();

    let content = scratch.read("app.log");
    let heading = content.lines().nth(1).unwrap();
    assert!(heading.starts_with("[] >> "), "{}", heading);
    assert!(heading.contains("entries"), "{}", heading);
    for junk in ["<unknown>", "call_once", "core::ops::function", "<fn"] {
        assert!(!heading.contains(junk), "{junk} in {heading}");
    }
}
