// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Disabled writers and writers without a destination never touch disk.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn disabled_writer_creates_nothing() {
    let scratch = Scratch::new();
    let mut writer = scratch.writer("app.log").enabled(false).open().unwrap();

    writer.log("a").unwrap();
    writer.log_with_stack("b").unwrap();
    writer.enable(false);
    writer.log("c").unwrap();

    assert_eq!(scratch.entries(), 0);
}

#[test]
fn disabled_writer_does_not_modify_existing_file() {
    let scratch = Scratch::new();
    scratch.write("app.log", "OLD");

    let writer = scratch
        .writer("app.log")
        .enabled(false)
        .size_limit(2u64)
        .open()
        .unwrap();
    writer.log("new").unwrap();

    assert_eq!(scratch.read("app.log"), "OLD");
}

#[test]
fn writer_without_destination_is_inert() {
    let scratch = Scratch::new();
    let mut writer = LogWriterBuilder::new(None).open().unwrap();

    writer.log("a").unwrap();
    writer.enable(true);
    writer.log("b").unwrap();

    assert_eq!(writer.destination(), None);
    assert_eq!(scratch.entries(), 0);
}

#[test]
fn enabling_resumes_writes_without_header() {
    let scratch = Scratch::new();
    let mut writer = scratch
        .writer("app.log")
        .caption("Never written")
        .enabled(false)
        .timestamps(false)
        .open()
        .unwrap();

    writer.enable(true);
    writer.log("now").unwrap();

    assert_eq!(scratch.read("app.log"), "\nnow\n----");
}
