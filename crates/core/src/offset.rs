// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Signed time offsets built from per-unit magnitudes.
//!
//! An [`Offset`] is the algebraic sum of caller-supplied contributions
//! like `(Hours, 1)` or `(Days, -1.5)`, held as whole microseconds. It is
//! built fresh on every filter invocation and never outlives the call.

use chrono::Duration;

use crate::error::{Error, Result};
use crate::units::DurationUnit;

/// A single numeric magnitude supplied for one duration unit.
///
/// Integer magnitudes multiply exactly. Fractional magnitudes decompose
/// to whole microseconds with round-to-nearest, so `Fractional(1.5)`
/// hours means exactly 90 minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    Integer(i64),
    Fractional(f64),
}

impl Magnitude {
    /// This magnitude's contribution for `unit`, in whole microseconds.
    fn contribution(self, unit: DurationUnit) -> Result<i64> {
        match self {
            Magnitude::Integer(n) => {
                let micros = i128::from(n) * i128::from(unit.micros());
                i64::try_from(micros).map_err(|_| Error::OffsetOutOfRange)
            }
            Magnitude::Fractional(v) => {
                if !v.is_finite() {
                    return Err(Error::InvalidMagnitude {
                        unit: unit.as_str(),
                        reason: "not a finite number".to_string(),
                    });
                }
                // i64::MAX is not exactly representable as f64; the >=
                // bound keeps the cast below in range.
                let micros = (v * unit.micros() as f64).round();
                if micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
                    return Err(Error::OffsetOutOfRange);
                }
                Ok(micros as i64)
            }
        }
    }
}

/// A signed span of elapsed time, held as whole microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    micros: i64,
}

impl Offset {
    /// The zero offset.
    #[must_use]
    pub fn zero() -> Self {
        Offset { micros: 0 }
    }

    /// Build an offset as the algebraic sum of per-unit contributions.
    ///
    /// An empty iterator yields the zero offset. Order does not matter:
    /// every contribution is converted to microseconds before summing.
    ///
    /// # Errors
    ///
    /// Returns an error when a magnitude is not finite or when a
    /// contribution or the running sum exceeds the representable span.
    pub fn from_units<I>(units: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DurationUnit, Magnitude)>,
    {
        let mut total: i64 = 0;
        for (unit, magnitude) in units {
            let part = magnitude.contribution(unit)?;
            total = total.checked_add(part).ok_or(Error::OffsetOutOfRange)?;
        }
        Ok(Offset { micros: total })
    }

    /// The additive inverse of this offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetOutOfRange`] when the inverse is not
    /// representable (negating the minimum span).
    pub fn negated(self) -> Result<Self> {
        let micros = self.micros.checked_neg().ok_or(Error::OffsetOutOfRange)?;
        Ok(Offset { micros })
    }

    /// Signed length in whole microseconds.
    #[must_use]
    pub fn as_micros(&self) -> i64 {
        self.micros
    }

    /// Convert to a chrono [`Duration`]. Exact for every offset.
    #[must_use]
    pub fn to_duration(&self) -> Duration {
        Duration::microseconds(self.micros)
    }
}

#[cfg(test)]
#[path = "offset_tests.rs"]
mod tests;
