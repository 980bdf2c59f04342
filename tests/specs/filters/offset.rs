// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `add_time` filter, invoked through the registry the
//! way a host templating engine invokes it.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use lapse::{FilterRegistry, Kwargs};
use serde_json::{json, Value};
use yare::parameterized;

// =============================================================================
// Helpers
// =============================================================================

/// Resolve and invoke a filter as the engine's rendering step would.
fn render(name: &str, base: Value, args: Value) -> lapse::Result<Value> {
    let registry = FilterRegistry::builtin();
    let filter = registry.get(name).expect("filter must be registered");
    filter(&base, &to_kwargs(args))
}

fn to_kwargs(args: Value) -> Kwargs {
    match args {
        Value::Object(map) => map,
        _ => panic!("kwargs fixture must be a JSON object"),
    }
}

fn rendered(base: &str, args: Value) -> String {
    render("add_time", json!(base), args)
        .unwrap()
        .as_str()
        .unwrap()
        .to_string()
}

// =============================================================================
// Identity and arithmetic laws
// =============================================================================

#[parameterized(
    naive = { "2024-01-01T00:00:00" },
    naive_fraction = { "2024-06-15T08:00:00.250" },
    zoned = { "2024-01-01T00:00:00+02:00" },
)]
fn empty_units_is_identity(base: &str) {
    assert_eq!(rendered(base, json!({})), base);
}

#[parameterized(
    hours = { json!({"hours": 2, "minutes": -15}) },
    days = { json!({"days": 3}) },
    mixed = { json!({"weeks": 1, "seconds": -42, "milliseconds": 500}) },
    fractional = { json!({"hours": 1.5}) },
)]
fn applying_negated_units_restores_base(units: Value) {
    let base = "2024-06-15T08:30:00";

    let negated: Value = units
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| {
            let flipped = if let Some(n) = v.as_i64() {
                json!(-n)
            } else {
                json!(-v.as_f64().unwrap())
            };
            (k.clone(), flipped)
        })
        .collect::<serde_json::Map<_, _>>()
        .into();

    let there = rendered(base, units);
    assert_eq!(rendered(&there, negated), base);
}

#[test]
fn hour_equals_sixty_minutes() {
    let base = "2024-01-01T00:00:00";
    assert_eq!(
        rendered(base, json!({"hours": 1})),
        rendered(base, json!({"minutes": 60}))
    );
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn now_plus_ninety_minutes() {
    assert_eq!(
        rendered("2024-01-01T00:00:00", json!({"minutes": 90})),
        "2024-01-01T01:30:00"
    );
}

#[test]
fn day_before_march_first_in_leap_year() {
    assert_eq!(
        rendered("2024-03-01T00:00:00", json!({"days": -1})),
        "2024-02-29T00:00:00"
    );
}

#[test]
fn expiry_window_a_week_and_a_half_out() {
    assert_eq!(
        rendered("2024-01-01T12:00:00", json!({"weeks": 1, "days": 3, "hours": 12})),
        "2024-01-12T00:00:00"
    );
}

// =============================================================================
// Error surfacing
// =============================================================================

#[test]
fn month_unit_fails_rendering() {
    let err = render("add_time", json!("2024-01-01T00:00:00"), json!({"months": 1})).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown duration unit 'months'"));
    assert!(msg.contains("hint: valid units are:"));
}

#[test]
fn non_numeric_magnitude_fails_rendering() {
    let err = render(
        "add_time",
        json!("2024-01-01T00:00:00"),
        json!({"minutes": "ninety"}),
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid magnitude for 'minutes'"));
}

#[test]
fn non_timestamp_base_fails_rendering() {
    let err = render("add_time", json!(12345), json!({"minutes": 1})).unwrap_err();
    assert!(err.to_string().contains("must be a timestamp string"));
}
