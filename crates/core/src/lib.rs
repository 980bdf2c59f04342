// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lapse-core: timestamp and offset arithmetic for the lapse filters.
//!
//! This crate provides the value-independent half of the `add_time`
//! template filter: the recognized duration units, signed offsets built
//! from per-unit magnitudes, and timestamp parsing and arithmetic. The
//! host-engine-facing surface lives in the `lapse-filters` crate.

pub mod error;
pub mod offset;
pub mod timestamp;
pub mod units;

pub use error::{Error, Result};
pub use offset::{Magnitude, Offset};
pub use timestamp::Timestamp;
pub use units::DurationUnit;
