// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lapse-core operations.

use thiserror::Error;

/// All possible errors that can occur in lapse-core operations.
///
/// Every variant is a caller error: the messages carry hints because they
/// surface to template authors through the host engine's rendering
/// failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown duration unit '{0}'\n  hint: valid units are: days, seconds, microseconds, milliseconds, minutes, hours, weeks")]
    InvalidUnit(String),

    #[error("invalid magnitude for '{unit}': {reason}")]
    InvalidMagnitude { unit: &'static str, reason: String },

    #[error("invalid timestamp: '{input}'\n  hint: expected RFC 3339 or YYYY-MM-DDTHH:MM:SS[.ffffff]")]
    InvalidTimestamp { input: String },

    #[error("duration offset out of range")]
    OffsetOutOfRange,

    #[error("timestamp out of range after applying offset")]
    TimestampOutOfRange,
}

/// A specialized Result type for lapse-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
