// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tl-writer: append-only text log with size-bounded retention
//!
//! A [`LogWriter`] owns one destination file. Opening it prepares the file
//! (fresh header or append-preserve) and trims it once if it grew past the
//! configured [`SizeLimit`]; every [`LogWriter::log`] call then appends a
//! single entry.

pub mod config;
pub mod entry;
pub mod env;
pub mod error;
pub mod retention;
pub mod writer;

pub use config::LogWriterConfig;
pub use error::{LogError, Result};
pub use retention::{TrimOutcome, MAX_RETAINED_BYTES, TRIM_MARKER};
pub use writer::{LogWriter, LogWriterBuilder, DEFAULT_SEPARATOR};

pub use tl_core::{
    CallSite, Clock, FakeClock, NoRequest, RequestContext, ShortBacktrace, SizeLimit,
    StackFormatter, StaticRequest, SystemClock,
};
