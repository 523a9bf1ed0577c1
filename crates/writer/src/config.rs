// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative writer configuration, loadable from TOML.
//!
//! ```toml
//! destination = "/var/log/billing/debug.log"
//! caption = "Billing worker"
//! overwrite = false
//! size_limit = "4MiB"   # or a byte count, or false for no limit
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tl_core::{SizeLimit, SystemClock};

use crate::env;
use crate::error::{LogError, Result};
use crate::writer::{LogWriter, LogWriterBuilder, DEFAULT_SEPARATOR};

/// Options for a [`LogWriter`]; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogWriterConfig {
    /// Target log file. Absent or empty disables writing.
    pub destination: Option<PathBuf>,
    /// Header title written when the file is reset.
    pub caption: String,
    pub enabled: bool,
    /// Reset the file with a header on open, instead of appending.
    pub overwrite: bool,
    pub separator: String,
    pub timestamps: bool,
    /// Trimming threshold, checked once on open.
    pub size_limit: SizeLimit,
    /// Hold an advisory lock while appending or trimming.
    pub lock_appends: bool,
}

impl Default for LogWriterConfig {
    fn default() -> Self {
        Self {
            destination: None,
            caption: String::new(),
            enabled: true,
            overwrite: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            timestamps: true,
            size_limit: SizeLimit::default(),
            lock_appends: false,
        }
    }
}

impl LogWriterConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, "inline")
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| LogError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Apply `TL_LOG_FILE`, `TL_LOG_ENABLED` and `TL_LOG_SIZE_LIMIT`.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(path) = env::log_file() {
            self.destination = Some(path);
        }
        if let Some(enabled) = env::log_enabled() {
            self.enabled = enabled;
        }
        if let Some(limit) = env::log_size_limit()? {
            self.size_limit = limit;
        }
        Ok(self)
    }

    /// A builder preloaded with these options.
    pub fn builder(&self) -> LogWriterBuilder<SystemClock> {
        LogWriterBuilder::new(self.destination.clone())
            .caption(self.caption.as_str())
            .enabled(self.enabled)
            .overwrite(self.overwrite)
            .separator(self.separator.as_str())
            .timestamps(self.timestamps)
            .size_limit(self.size_limit)
            .lock_appends(self.lock_appends)
    }

    /// Open a writer with these options.
    pub fn open(&self) -> Result<LogWriter> {
        self.builder().open()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
