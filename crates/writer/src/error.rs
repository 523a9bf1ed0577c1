// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the log writer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tl_core::SizeLimitError;

pub type Result<T> = std::result::Result<T, LogError>;

/// Errors surfaced by log writer operations.
///
/// Disabled writers and missing destinations are not errors; only genuine
/// filesystem or configuration failures end up here.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write log file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read log file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to stat log file {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("failed to lock log file {}: {source}", path.display())]
    Lock { path: PathBuf, source: io::Error },

    #[error("failed to read log config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid log config ({origin}): {source}")]
    ConfigParse {
        origin: String,
        source: toml::de::Error,
    },

    #[error("invalid size limit in {origin}: {source}")]
    InvalidSizeLimit {
        origin: String,
        source: SizeLimitError,
    },
}
