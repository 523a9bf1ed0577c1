// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable wall-clock time

use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Epoch seconds of the instant a fresh [`FakeClock`] reports
/// (2026-01-30T08:14:09Z).
const FAKE_EPOCH_SECS: i64 = 1_769_760_849;

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Real system clock, in the host's local timezone
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        let start = DateTime::from_timestamp(FAKE_EPOCH_SECS, 0).unwrap_or_default();
        Self::at(start.fixed_offset())
    }

    /// Create a clock frozen at the given time
    pub fn at(time: DateTime<FixedOffset>) -> Self {
        Self {
            current: Arc::new(Mutex::new(time)),
        }
    }

    /// Advance the clock by the given duration.
    ///
    /// Durations that would overflow the calendar leave the clock unchanged.
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock();
        let next = TimeDelta::from_std(duration)
            .ok()
            .and_then(|delta| current.checked_add_signed(delta));
        if let Some(next) = next {
            *current = next;
        }
    }

    /// Set the clock to a specific time
    pub fn set(&self, time: DateTime<FixedOffset>) {
        *self.current.lock() = time;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
