// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opening a writer: overwrite vs append, directory creation, config files.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn overwrite_replaces_content_with_header() {
    let scratch = Scratch::new();
    scratch.write("app.log", "OLD");

    scratch
        .writer("app.log")
        .caption("Report")
        .separator("|SEP|")
        .open()
        .unwrap();

    let content = scratch.read("app.log");
    assert_eq!(
        content,
        "Report\n(timestamp: Fri, 30 Jan 2026 08:14:09 +0000)|SEP|"
    );
    assert!(content.ends_with("|SEP|"));
}

#[test]
fn append_keeps_old_content() {
    let scratch = Scratch::new();
    scratch.write("app.log", "OLD");

    let writer = scratch
        .writer("app.log")
        .overwrite(false)
        .timestamps(false)
        .open()
        .unwrap();
    writer.log("new").unwrap();

    assert_eq!(scratch.read("app.log"), "OLD\nnew\n----");
}

#[test]
fn open_creates_directory_tree() {
    let scratch = Scratch::new();
    let path = scratch.path("a/b/c/app.log");

    LogWriter::builder(&path).open().unwrap();

    assert!(path.is_file());
}

#[test]
fn open_surfaces_bootstrap_failure() {
    let scratch = Scratch::new();
    let blocker = scratch.write("file", "x");

    let err = LogWriter::builder(blocker.join("app.log")).open().err().unwrap();

    assert!(matches!(err, LogError::CreateDir { .. }));
}

#[test]
fn config_file_drives_writer() {
    let scratch = Scratch::new();
    let log_path = scratch.path("logs/worker.log");
    let config_path = scratch.write(
        "log.toml",
        format!(
            "destination = {:?}\ncaption = \"Worker\"\ntimestamps = false\nseparator = \"#\"\n",
            log_path.display().to_string()
        ),
    );

    let writer = LogWriterConfig::load(&config_path).unwrap().open().unwrap();
    writer.log("ready").unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.starts_with("Worker\n(timestamp: "));
    assert!(content.ends_with(")#\nready#"));
}
