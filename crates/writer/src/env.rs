// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for log writer overrides.

use std::path::PathBuf;

use tl_core::SizeLimit;

use crate::error::{LogError, Result};

/// Destination override. Set but empty disables writing.
pub const LOG_FILE: &str = "TL_LOG_FILE";
/// Master switch override: `1/0`, `true/false`, `yes/no`, `on/off`.
pub const LOG_ENABLED: &str = "TL_LOG_ENABLED";
/// Size limit override, e.g. `4MiB` or `unlimited`.
pub const LOG_SIZE_LIMIT: &str = "TL_LOG_SIZE_LIMIT";

/// Destination from `TL_LOG_FILE`, if set.
pub fn log_file() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE).map(PathBuf::from)
}

/// Switch from `TL_LOG_ENABLED`. Unrecognized values are ignored.
pub fn log_enabled() -> Option<bool> {
    let raw = std::env::var(LOG_ENABLED).ok()?;
    let parsed = parse_flag(&raw);
    if parsed.is_none() {
        tracing::warn!(var = LOG_ENABLED, value = %raw, "ignoring unrecognized flag value");
    }
    parsed
}

/// Size limit from `TL_LOG_SIZE_LIMIT`, if set.
pub fn log_size_limit() -> Result<Option<SizeLimit>> {
    let Ok(raw) = std::env::var(LOG_SIZE_LIMIT) else {
        return Ok(None);
    };
    raw.parse()
        .map(Some)
        .map_err(|source| LogError::InvalidSizeLimit {
            origin: LOG_SIZE_LIMIT.to_string(),
            source,
        })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
