// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The log writer: one destination file, a header, appended entries.

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use tl_core::{
    format_header_timestamp, format_heading_timestamp, Clock, NoRequest, RequestContext,
    ShortBacktrace, SizeLimit, StackFormatter, SystemClock,
};

use crate::entry::{self, STACK_JOIN};
use crate::error::{LogError, Result};
use crate::retention;

/// Separator appended after the header and after every entry.
pub const DEFAULT_SEPARATOR: &str = "\n----";

/// Append-only text log with size-bounded retention.
///
/// Each operation opens, writes, and closes the file; no handle is held
/// between calls. A writer assumes it is the only one appending to its file.
///
/// A writer without a destination, or one that is disabled, performs no I/O
/// in [`log`](Self::log).
pub struct LogWriter<C: Clock = SystemClock> {
    enabled: bool,
    destination: Option<PathBuf>,
    separator: String,
    timestamps: bool,
    lock_appends: bool,
    clock: C,
    request: Box<dyn RequestContext>,
    stack: Box<dyn StackFormatter>,
}

impl<C: Clock> std::fmt::Debug for LogWriter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("enabled", &self.enabled)
            .field("destination", &self.destination)
            .field("separator", &self.separator)
            .field("timestamps", &self.timestamps)
            .field("lock_appends", &self.lock_appends)
            .finish_non_exhaustive()
    }
}

impl LogWriter<SystemClock> {
    /// Start configuring a writer for `destination`.
    pub fn builder(destination: impl Into<PathBuf>) -> LogWriterBuilder<SystemClock> {
        LogWriterBuilder::new(Some(destination.into()))
    }

    /// A writer with no destination; every write is skipped.
    pub fn inert() -> Self {
        LogWriterBuilder::new(None).build()
    }
}

impl<C: Clock> LogWriter<C> {
    /// Append `message` as a new entry.
    ///
    /// Format: `\n<heading?><message><separator>`, heading being the
    /// timestamp when enabled.
    pub fn log(&self, message: &str) -> Result<()> {
        self.append_entry(message, None)
    }

    /// Append `message` with a context heading:
    /// `<timestamp> [<request>] >> <stack summary>`.
    ///
    /// The request context and stack formatter are only consulted here.
    #[track_caller]
    pub fn log_with_stack(&self, message: &str) -> Result<()> {
        self.append_entry(message, Some(Location::caller()))
    }

    /// Turn writing on or off for subsequent entries.
    ///
    /// Enabling a writer that was opened disabled does not write the header
    /// it skipped.
    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Empty the destination file.
    ///
    /// Works whether or not the writer is enabled. Without a destination
    /// this is a no-op.
    pub fn clear(&self) -> Result<()> {
        let Some(path) = self.destination.as_deref() else {
            return Ok(());
        };
        let write_err = |source| LogError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(write_err)?;
        if self.lock_appends {
            file.lock_exclusive().map_err(|source| LogError::Lock {
                path: path.to_path_buf(),
                source,
            })?;
        }
        file.set_len(0).map_err(write_err)?;
        tracing::debug!(path = %path.display(), "cleared log file");
        Ok(())
    }

    /// Destination to write to, if writing is enabled.
    fn active_path(&self) -> Option<&Path> {
        if self.enabled {
            self.destination.as_deref()
        } else {
            None
        }
    }

    fn append_entry(&self, message: &str, caller: Option<&Location<'_>>) -> Result<()> {
        let Some(path) = self.active_path() else {
            return Ok(());
        };

        let timestamp = self
            .timestamps
            .then(|| format_heading_timestamp(&self.clock.now()));
        let context = caller.map(|caller| {
            entry::format_context(
                &self.request.request_id(),
                &self.stack.format_stack(caller, STACK_JOIN),
            )
        });
        let heading = entry::format_heading(timestamp.as_deref(), context.as_deref());
        let dump = entry::format_entry(&heading, message, &self.separator);

        self.append(path, dump.as_bytes())
    }

    fn append(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let write_err = |source| LogError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_err)?;
        if self.lock_appends {
            file.lock_exclusive().map_err(|source| LogError::Lock {
                path: path.to_path_buf(),
                source,
            })?;
        }
        file.write_all(bytes).map_err(write_err)?;
        Ok(())
    }
}

/// Configures and opens a [`LogWriter`].
///
/// Defaults: empty caption, enabled, overwrite, `"\n----"` separator,
/// timestamps on, 1 MiB size limit, no file locking.
pub struct LogWriterBuilder<C: Clock = SystemClock> {
    destination: Option<PathBuf>,
    caption: String,
    enabled: bool,
    overwrite: bool,
    separator: String,
    timestamps: bool,
    size_limit: SizeLimit,
    lock_appends: bool,
    clock: C,
    request: Box<dyn RequestContext>,
    stack: Box<dyn StackFormatter>,
}

impl LogWriterBuilder<SystemClock> {
    /// A builder for `destination`; `None` or an empty path yields an inert
    /// writer.
    pub fn new(destination: Option<PathBuf>) -> Self {
        Self {
            destination,
            caption: String::new(),
            enabled: true,
            overwrite: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            timestamps: true,
            size_limit: SizeLimit::default(),
            lock_appends: false,
            clock: SystemClock,
            request: Box::new(NoRequest),
            stack: Box::new(ShortBacktrace::default()),
        }
    }
}

impl<C: Clock> LogWriterBuilder<C> {
    tl_core::setters! {
        into {
            caption: String,
            separator: String,
            size_limit: SizeLimit,
        }
        set {
            enabled: bool,
            overwrite: bool,
            timestamps: bool,
            lock_appends: bool,
        }
    }

    /// Source of the request identifier shown in stack headings.
    pub fn request_context(mut self, request: impl RequestContext + 'static) -> Self {
        self.request = Box::new(request);
        self
    }

    /// Renders the stack summary shown in stack headings.
    pub fn stack_formatter(mut self, stack: impl StackFormatter + 'static) -> Self {
        self.stack = Box::new(stack);
        self
    }

    /// Replace the wall clock used for header and heading timestamps.
    pub fn clock<C2: Clock>(self, clock: C2) -> LogWriterBuilder<C2> {
        LogWriterBuilder {
            destination: self.destination,
            caption: self.caption,
            enabled: self.enabled,
            overwrite: self.overwrite,
            separator: self.separator,
            timestamps: self.timestamps,
            size_limit: self.size_limit,
            lock_appends: self.lock_appends,
            clock,
            request: self.request,
            stack: self.stack,
        }
    }

    /// Prepare the destination and return the writer.
    ///
    /// When enabled with a destination: creates the parent directory if
    /// missing, writes the header (overwrite) or ensures the file exists
    /// (append), then trims the file once against the size limit. Disabled
    /// or destination-less writers touch nothing.
    pub fn open(self) -> Result<LogWriter<C>> {
        let caption = self.caption.clone();
        let overwrite = self.overwrite;
        let size_limit = self.size_limit;
        let writer = self.build();

        let Some(path) = writer.active_path() else {
            tracing::debug!(
                enabled = writer.enabled,
                "log writer inactive, skipping file preparation"
            );
            return Ok(writer);
        };

        ensure_parent_dir(path)?;
        if overwrite {
            let header = entry::format_header(
                &caption,
                &format_header_timestamp(&writer.clock.now()),
                &writer.separator,
            );
            fs::write(path, header).map_err(|source| LogError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        } else {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        if let Some(limit) = size_limit.bytes() {
            retention::trim_to_limit(path, limit, writer.lock_appends)?;
        }

        tracing::debug!(
            path = %path.display(),
            overwrite,
            size_limit = %size_limit,
            "opened log file"
        );
        Ok(writer)
    }

    fn build(self) -> LogWriter<C> {
        LogWriter {
            enabled: self.enabled,
            destination: self.destination.filter(|p| !p.as_os_str().is_empty()),
            separator: self.separator,
            timestamps: self.timestamps,
            lock_appends: self.lock_appends,
            clock: self.clock,
            request: self.request,
            stack: self.stack,
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
