// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic context attached to entries logged with a stack heading.
//!
//! Two collaborators are injected into the writer:
//! - [`RequestContext`] names the request being served (may be empty)
//! - [`StackFormatter`] renders a short call-stack summary
//!
//! Both are only consulted when an entry asks for stack context.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;

/// Supplies the identifier of the request currently being served.
pub trait RequestContext: Send + Sync {
    fn request_id(&self) -> String;
}

/// No request context; always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequest;

impl RequestContext for NoRequest {
    fn request_id(&self) -> String {
        String::new()
    }
}

/// A fixed request identifier, e.g. the URI a worker was started for.
#[derive(Debug, Clone, Default)]
pub struct StaticRequest(pub String);

impl RequestContext for StaticRequest {
    fn request_id(&self) -> String {
        self.0.clone()
    }
}

impl<F> RequestContext for F
where
    F: Fn() -> String + Send + Sync,
{
    fn request_id(&self) -> String {
        self()
    }
}

/// Renders a call-stack summary, frames joined by `join`.
///
/// `caller` is the source location of the logging call.
pub trait StackFormatter: Send + Sync {
    fn format_stack(&self, caller: &Location<'_>, join: &str) -> String;
}

/// Reports only the logging call site as `file:line`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallSite;

impl StackFormatter for CallSite {
    fn format_stack(&self, caller: &Location<'_>, _join: &str) -> String {
        format!("{}:{}", caller.file(), caller.line())
    }
}

/// Function names from a captured backtrace, outermost first.
///
/// Runtime and logging frames are dropped. Falls back to [`CallSite`] when
/// the platform cannot capture symbols.
#[derive(Debug, Clone, Copy)]
pub struct ShortBacktrace {
    max_frames: usize,
}

impl ShortBacktrace {
    pub const DEFAULT_MAX_FRAMES: usize = 8;

    pub fn new(max_frames: usize) -> Self {
        Self { max_frames }
    }
}

impl Default for ShortBacktrace {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FRAMES)
    }
}

impl StackFormatter for ShortBacktrace {
    fn format_stack(&self, caller: &Location<'_>, join: &str) -> String {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            return CallSite.format_stack(caller, join);
        }
        let summary = summarize_backtrace(&backtrace.to_string(), join, self.max_frames);
        if summary.is_empty() {
            CallSite.format_stack(caller, join)
        } else {
            summary
        }
    }
}

impl<F> StackFormatter for F
where
    F: Fn(&Location<'_>, &str) -> String + Send + Sync,
{
    fn format_stack(&self, caller: &Location<'_>, join: &str) -> String {
        self(caller, join)
    }
}

/// Symbol prefixes belonging to the runtime or to this logging stack.
const SKIPPED_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "test::",
    "tl_core::",
    "tl_writer::",
    "<std::",
    "<core::",
    "<alloc::",
    "<tl_core::",
    "<tl_writer::",
    "__",
];

/// Whole symbols that never name application code.
const SKIPPED_SYMBOLS: &[&str] = &[
    "<unknown>",
    "main",
    "_start",
    "start_thread",
    "clone",
    "clone3",
    "thread_start",
];

/// Reduce a rendered [`Backtrace`] to `outer > ... > inner` function names.
pub(crate) fn summarize_backtrace(rendered: &str, join: &str, max_frames: usize) -> String {
    let mut frames: Vec<&str> = rendered
        .lines()
        .filter_map(frame_symbol)
        .filter(|symbol| !is_noise(symbol))
        .map(strip_hash)
        .take(max_frames)
        .collect();
    frames.reverse();
    frames.join(join)
}

/// Runtime, unsymbolized, or closure-call shim frames.
fn is_noise(symbol: &str) -> bool {
    SKIPPED_SYMBOLS.contains(&symbol)
        || SKIPPED_PREFIXES.iter().any(|p| symbol.starts_with(p))
        // `<fn() -> T as FnOnce<()>>::call_once`, `<F as FnOnce<A>>::call_once`
        || symbol.starts_with("<fn")
        || symbol.contains(" as core::ops::function::")
}

/// Extract the symbol from a `  12: crate::module::func` frame line.
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.trim_start().split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let symbol = symbol.trim();
    (!symbol.is_empty()).then_some(symbol)
}

/// Drop a trailing `::h0123456789abcdef` symbol hash.
fn strip_hash(symbol: &str) -> &str {
    match symbol.rsplit_once("::") {
        Some((head, tail))
            if tail.len() == 17
                && tail.starts_with('h')
                && tail[1..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            head
        }
        _ => symbol,
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
