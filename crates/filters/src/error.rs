// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for filter invocations.
//!
//! Nothing is caught or translated here: errors propagate to the host
//! engine, which presents them as template rendering failures.

use thiserror::Error;

/// All possible errors that can occur when invoking a lapse filter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("filter input must be a timestamp string, got {got}\n  hint: pass a timestamp value like \"2024-01-01T00:00:00\"")]
    BaseNotTimestamp { got: &'static str },

    #[error("{0}")]
    Offset(#[from] lapse_core::Error),
}

/// A specialized Result type for lapse filter invocations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
