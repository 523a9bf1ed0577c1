// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size-bounded retention at open.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn history(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'0' + (i % 10) as u8).collect()
}

#[test]
fn oversized_file_keeps_marker_and_tail() {
    let scratch = Scratch::new();
    let old = history(10_000);
    scratch.write("app.log", &old);

    scratch
        .writer("app.log")
        .overwrite(false)
        .size_limit(4000u64)
        .open()
        .unwrap();

    let trimmed = scratch.read_bytes("app.log");
    assert_eq!(trimmed.len(), TRIM_MARKER.len() + 3000);
    assert_eq!(&trimmed[..TRIM_MARKER.len()], TRIM_MARKER.as_bytes());
    assert_eq!(&trimmed[TRIM_MARKER.len()..], &old[7000..]);
}

#[test]
fn file_below_limit_is_unchanged() {
    let scratch = Scratch::new();
    let old = history(3999);
    scratch.write("app.log", &old);

    scratch
        .writer("app.log")
        .overwrite(false)
        .size_limit(4000u64)
        .open()
        .unwrap();

    assert_eq!(scratch.read_bytes("app.log"), old);
}

#[test]
fn default_limit_is_one_mebibyte() {
    let scratch = Scratch::new();
    let old = history(1024 * 1024);
    scratch.write("app.log", &old);

    scratch.writer("app.log").overwrite(false).open().unwrap();

    let trimmed = scratch.read_bytes("app.log");
    assert_eq!(trimmed.len(), TRIM_MARKER.len() + 786_432);
    assert!(trimmed[TRIM_MARKER.len()..] == old[1024 * 1024 - 786_432..]);
}

#[test]
fn reopening_appends_after_trimmed_tail() {
    let scratch = Scratch::new();
    scratch.write("app.log", history(100));

    let writer = scratch
        .writer("app.log")
        .overwrite(false)
        .timestamps(false)
        .size_limit(SizeLimit::Bytes(100))
        .open()
        .unwrap();
    writer.log("fresh").unwrap();

    let content = scratch.read("app.log");
    assert!(content.starts_with(TRIM_MARKER));
    assert!(content.ends_with("\nfresh\n----"));
}
