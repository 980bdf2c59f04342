// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recognized duration units for offset construction.
//!
//! The unit set is closed: each unit is a fixed number of microseconds,
//! so offsets compose by flat linear addition with no calendar awareness
//! (no month or year units, no daylight-saving adjustment).

use crate::error::{Error, Result};

/// A recognized duration-unit keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Days,
    Seconds,
    Microseconds,
    Milliseconds,
    Minutes,
    Hours,
    Weeks,
}

impl DurationUnit {
    /// All recognized units, in documentation order.
    pub const ALL: [DurationUnit; 7] = [
        DurationUnit::Days,
        DurationUnit::Seconds,
        DurationUnit::Microseconds,
        DurationUnit::Milliseconds,
        DurationUnit::Minutes,
        DurationUnit::Hours,
        DurationUnit::Weeks,
    ];

    /// Parse a unit keyword as it appears in filter keyword arguments.
    ///
    /// Keywords are case-sensitive, matching how the host engine passes
    /// them through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] for anything outside the recognized
    /// set.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "days" => Ok(DurationUnit::Days),
            "seconds" => Ok(DurationUnit::Seconds),
            "microseconds" => Ok(DurationUnit::Microseconds),
            "milliseconds" => Ok(DurationUnit::Milliseconds),
            "minutes" => Ok(DurationUnit::Minutes),
            "hours" => Ok(DurationUnit::Hours),
            "weeks" => Ok(DurationUnit::Weeks),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }

    /// The keyword for this unit.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Seconds => "seconds",
            DurationUnit::Microseconds => "microseconds",
            DurationUnit::Milliseconds => "milliseconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Weeks => "weeks",
        }
    }

    /// Exact length of this unit in microseconds.
    #[must_use]
    pub fn micros(&self) -> i64 {
        match self {
            DurationUnit::Microseconds => 1,
            DurationUnit::Milliseconds => 1_000,
            DurationUnit::Seconds => 1_000_000,
            DurationUnit::Minutes => 60 * 1_000_000,
            DurationUnit::Hours => 3_600 * 1_000_000,
            DurationUnit::Days => 86_400 * 1_000_000,
            DurationUnit::Weeks => 7 * 86_400 * 1_000_000,
        }
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
