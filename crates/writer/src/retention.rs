// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size-bounded retention for a single log file.
//!
//! Once the file reaches its limit, the oldest content is discarded and the
//! newest three quarters of the limit are kept, behind a marker showing that
//! something was cut. The cut is a raw byte offset: the first retained line
//! may start mid-entry.
//!
//! Trimming reads the retained tail into memory and rewrites the whole file,
//! so it only runs when a writer opens, never per entry.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{LogError, Result};

/// Prepended to the retained tail after a trim.
pub const TRIM_MARKER: &str = "   .   .  .  . . . ......";

/// Upper bound on the bytes kept by a trim, whatever the limit.
pub const MAX_RETAINED_BYTES: u64 = 8 * 1024 * 1024;

/// What a trim pass did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimOutcome {
    /// File missing or below the limit; left untouched.
    Unchanged,
    /// File rewritten as marker + tail.
    Trimmed { before: u64, after: u64 },
}

/// Bytes of tail kept when trimming against `limit`:
/// `min(floor(limit * 0.75), MAX_RETAINED_BYTES)`.
pub fn retained_len(limit: u64) -> u64 {
    let three_quarters = (limit / 4) * 3 + (limit % 4) * 3 / 4;
    three_quarters.min(MAX_RETAINED_BYTES)
}

/// Trim `path` if it has reached `limit` bytes.
///
/// A missing file is treated as empty and left alone. With `lock` set, an
/// exclusive advisory lock is held for the rewrite.
pub fn trim_to_limit(path: &Path, limit: u64, lock: bool) -> Result<TrimOutcome> {
    let mut file = match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TrimOutcome::Unchanged),
        Err(source) => {
            return Err(LogError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if lock {
        file.lock_exclusive().map_err(|source| LogError::Lock {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let before = file
        .metadata()
        .map_err(|source| LogError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if before < limit {
        return Ok(TrimOutcome::Unchanged);
    }

    let keep = retained_len(limit).min(before);
    let tail = read_tail(&mut file, keep).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dump = Vec::with_capacity(TRIM_MARKER.len() + tail.len());
    dump.extend_from_slice(TRIM_MARKER.as_bytes());
    dump.extend_from_slice(&tail);
    rewrite(&mut file, &dump).map_err(|source| LogError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let after = dump.len() as u64;
    tracing::info!(
        path = %path.display(),
        limit,
        before,
        after,
        "trimmed log file"
    );
    Ok(TrimOutcome::Trimmed { before, after })
}

/// Read the last `len` bytes of `file`.
fn read_tail(file: &mut File, len: u64) -> io::Result<Vec<u8>> {
    // len <= MAX_RETAINED_BYTES, well inside i64
    file.seek(SeekFrom::End(-(len as i64)))?;
    let mut tail = Vec::with_capacity(len as usize);
    file.take(len).read_to_end(&mut tail)?;
    Ok(tail)
}

/// Replace the whole content of `file` with `content`.
fn rewrite(file: &mut File, content: &[u8]) -> io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content)?;
    file.set_len(content.len() as u64)?;
    file.flush()
}

#[cfg(test)]
#[path = "retention_tests.rs"]
mod tests;
