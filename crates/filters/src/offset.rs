// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `add_time` filter: advance a timestamp by named duration amounts.
//!
//! Templates invoke it with a timestamp value and keyword arguments
//! naming duration units:
//!
//! ```text
//! {{ deploy_at | add_time(minutes=30) }}
//! {{ expires | add_time(days=-1, hours=12) }}
//! ```
//!
//! Recognized units are days, seconds, microseconds, milliseconds,
//! minutes, hours, and weeks. Magnitudes may be negative (the result
//! precedes the base) or fractional (`hours=1.5` is 90 minutes). The
//! addition is flat elapsed time: no daylight-saving correction and no
//! month-length awareness.

use serde_json::Value;

use lapse_core::{DurationUnit, Magnitude, Offset, Timestamp};

use crate::error::{Error, Result};
use crate::registry::Kwargs;

/// Advance `base` by the algebraic sum of the unit magnitudes in `kwargs`.
///
/// With empty `kwargs` the result equals `base`. Unknown unit names and
/// non-numeric magnitudes fail before any arithmetic, so a failing call
/// never produces a partial result.
///
/// # Errors
///
/// Returns an error when `base` is not a parseable timestamp string, a
/// kwarg key is not a recognized unit, a magnitude is not numeric, or the
/// result falls outside the representable range.
pub fn add_time(base: &Value, kwargs: &Kwargs) -> Result<Value> {
    let input = match base {
        Value::String(s) => s,
        other => {
            return Err(Error::BaseNotTimestamp {
                got: json_type_name(other),
            })
        }
    };
    let timestamp = Timestamp::parse(input)?;

    let mut units = Vec::with_capacity(kwargs.len());
    for (key, value) in kwargs {
        let unit = DurationUnit::parse(key)?;
        units.push((unit, magnitude(unit, value)?));
    }

    let offset = Offset::from_units(units)?;
    let result = timestamp.checked_add(offset)?;
    tracing::trace!("add_time: {} {:+}us -> {}", timestamp, offset.as_micros(), result);
    Ok(Value::String(result.to_string()))
}

/// Coerce a kwarg value into a magnitude for `unit`.
fn magnitude(unit: DurationUnit, value: &Value) -> Result<Magnitude> {
    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(lapse_core::Error::InvalidMagnitude {
                unit: unit.as_str(),
                reason: format!("expected a number, got {}", json_type_name(other)),
            }
            .into())
        }
    };
    if let Some(n) = number.as_i64() {
        Ok(Magnitude::Integer(n))
    } else if let Some(v) = number.as_f64() {
        Ok(Magnitude::Fractional(v))
    } else {
        Err(lapse_core::Error::InvalidMagnitude {
            unit: unit.as_str(),
            reason: "number is not representable".to_string(),
        }
        .into())
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "offset_tests.rs"]
mod tests;
