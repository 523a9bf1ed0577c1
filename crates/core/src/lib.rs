// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tl-core: shared building blocks for the tail-preserving log writer

pub mod macros;

pub mod clock;
pub mod context;
pub mod size;
pub mod time_fmt;

pub use clock::{Clock, FakeClock, SystemClock};
pub use context::{
    CallSite, NoRequest, RequestContext, ShortBacktrace, StackFormatter, StaticRequest,
};
pub use size::{SizeLimit, SizeLimitError, DEFAULT_SIZE_LIMIT};
pub use time_fmt::{format_header_timestamp, format_heading_timestamp};
