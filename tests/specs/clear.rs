// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clearing the log file.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn clear_twice_leaves_empty_file() {
    let scratch = Scratch::new();
    let writer = scratch.writer("app.log").caption("T").open().unwrap();
    writer.log("entry").unwrap();

    writer.clear().unwrap();
    assert_eq!(std::fs::metadata(scratch.path("app.log")).unwrap().len(), 0);

    writer.clear().unwrap();
    assert_eq!(std::fs::metadata(scratch.path("app.log")).unwrap().len(), 0);
}

#[test]
fn clear_applies_to_disabled_writer() {
    let scratch = Scratch::new();
    scratch.write("app.log", "OLD");
    let writer = scratch.writer("app.log").enabled(false).open().unwrap();

    writer.clear().unwrap();

    assert_eq!(scratch.read("app.log"), "");
}

#[test]
fn clear_without_destination_is_noop() {
    let scratch = Scratch::new();
    let writer = LogWriter::inert();

    writer.clear().unwrap();

    assert_eq!(scratch.entries(), 0);
    assert!(scratch.root().exists());
}
