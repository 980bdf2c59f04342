// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp parsing, formatting, and offset arithmetic.
//!
//! Template values carry timestamps as strings, so [`Timestamp`]
//! preserves the textual form an input arrived in: a value with an
//! explicit UTC offset keeps that exact offset through arithmetic and
//! formatting, and a naive value stays naive. No timezone conversion
//! happens in either case.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::error::{Error, Result};
use crate::offset::Offset;

/// Accepted formats for timestamps without a UTC offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An absolute point in time, at microsecond precision or better.
///
/// Immutable: arithmetic produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// RFC 3339 with an explicit UTC offset (`2024-01-01T00:00:00+02:00`).
    Zoned(DateTime<FixedOffset>),
    /// Date and time without an offset (`2024-01-01T00:00:00`).
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Parse a timestamp string.
    ///
    /// Tries RFC 3339 first, then the naive forms with `T` or space
    /// separator, with an optional fractional-second part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] when no format matches.
    pub fn parse(input: &str) -> Result<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Timestamp::Zoned(dt));
        }
        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Timestamp::Naive(dt));
            }
        }
        Err(Error::InvalidTimestamp {
            input: input.to_string(),
        })
    }

    /// This timestamp advanced by `offset` (receded, when negative).
    ///
    /// Flat linear addition of elapsed time: no daylight-saving
    /// correction, no month-length awareness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] when the result falls
    /// outside the representable datetime range.
    pub fn checked_add(&self, offset: Offset) -> Result<Self> {
        let delta = offset.to_duration();
        match self {
            Timestamp::Zoned(dt) => dt
                .checked_add_signed(delta)
                .map(Timestamp::Zoned)
                .ok_or(Error::TimestampOutOfRange),
            Timestamp::Naive(dt) => dt
                .checked_add_signed(delta)
                .map(Timestamp::Naive)
                .ok_or(Error::TimestampOutOfRange),
        }
    }
}

impl fmt::Display for Timestamp {
    /// Round-trips the textual form. Whole-second values print without a
    /// fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
