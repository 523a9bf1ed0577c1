// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size limit for log retention.
//!
//! Accepted spellings (config files and environment):
//! - an integer byte count: `1048576`
//! - a human size with a binary unit: `512KiB`, `2MiB`, `1GiB`, `10kb`, `3m`
//! - no limit: `false`, `"unlimited"`, `"none"`, `"off"`
//!
//! Every unit is binary (`kb` and `KiB` both mean 1024 bytes).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default retention threshold: 1 MiB.
pub const DEFAULT_SIZE_LIMIT: u64 = 1024 * 1024;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Byte threshold above which the log file is trimmed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSizeLimit", into = "RawSizeLimit")]
pub enum SizeLimit {
    Unlimited,
    Bytes(u64),
}

impl SizeLimit {
    /// The byte threshold, or `None` when unlimited.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            SizeLimit::Unlimited => None,
            SizeLimit::Bytes(n) => Some(*n),
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, SizeLimit::Unlimited)
    }
}

impl Default for SizeLimit {
    fn default() -> Self {
        SizeLimit::Bytes(DEFAULT_SIZE_LIMIT)
    }
}

impl From<u64> for SizeLimit {
    fn from(bytes: u64) -> Self {
        SizeLimit::Bytes(bytes)
    }
}

impl From<Option<u64>> for SizeLimit {
    fn from(bytes: Option<u64>) -> Self {
        bytes.map_or(SizeLimit::Unlimited, SizeLimit::Bytes)
    }
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SizeLimit::Unlimited => f.write_str("unlimited"),
            SizeLimit::Bytes(0) => f.write_str("0"),
            SizeLimit::Bytes(n) if n % GIB == 0 => write!(f, "{}GiB", n / GIB),
            SizeLimit::Bytes(n) if n % MIB == 0 => write!(f, "{}MiB", n / MIB),
            SizeLimit::Bytes(n) if n % KIB == 0 => write!(f, "{}KiB", n / KIB),
            SizeLimit::Bytes(n) => write!(f, "{}", n),
        }
    }
}

/// Errors from parsing a size limit literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SizeLimitError {
    #[error("size limit is empty")]
    Empty,

    #[error("invalid size limit '{0}': expected a byte count like 1048576 or 1MiB")]
    InvalidNumber(String),

    #[error("unknown size unit '{unit}' in '{input}'")]
    UnknownUnit { input: String, unit: String },

    #[error("size limit '{0}' does not fit in 64 bits")]
    Overflow(String),
}

impl FromStr for SizeLimit {
    type Err = SizeLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SizeLimitError::Empty);
        }
        let lower = trimmed.to_ascii_lowercase();
        if matches!(lower.as_str(), "unlimited" | "none" | "off" | "false") {
            return Ok(SizeLimit::Unlimited);
        }

        let split = lower.find(|c: char| !c.is_ascii_digit()).unwrap_or(lower.len());
        let (digits, unit) = lower.split_at(split);
        if digits.is_empty() {
            return Err(SizeLimitError::InvalidNumber(trimmed.to_string()));
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| SizeLimitError::Overflow(trimmed.to_string()))?;

        let multiplier = match unit.trim_start() {
            "" | "b" => 1,
            "k" | "kb" | "kib" => KIB,
            "m" | "mb" | "mib" => MIB,
            "g" | "gb" | "gib" => GIB,
            other => {
                return Err(SizeLimitError::UnknownUnit {
                    input: trimmed.to_string(),
                    unit: other.to_string(),
                })
            }
        };

        value
            .checked_mul(multiplier)
            .map(SizeLimit::Bytes)
            .ok_or_else(|| SizeLimitError::Overflow(trimmed.to_string()))
    }
}

/// Wire shape for serde: integer, boolean, or size string.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSizeLimit {
    Bytes(u64),
    Flag(bool),
    Text(String),
}

impl TryFrom<RawSizeLimit> for SizeLimit {
    type Error = SizeLimitError;

    fn try_from(raw: RawSizeLimit) -> Result<Self, Self::Error> {
        match raw {
            RawSizeLimit::Bytes(n) => Ok(SizeLimit::Bytes(n)),
            RawSizeLimit::Flag(false) => Ok(SizeLimit::Unlimited),
            RawSizeLimit::Flag(true) => Ok(SizeLimit::default()),
            RawSizeLimit::Text(s) => s.parse(),
        }
    }
}

impl From<SizeLimit> for RawSizeLimit {
    fn from(limit: SizeLimit) -> Self {
        match limit {
            SizeLimit::Unlimited => RawSizeLimit::Flag(false),
            SizeLimit::Bytes(n) => RawSizeLimit::Bytes(n),
        }
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
