// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the lapse filter crates.
//!
//! The test sources under `filters/` are wired into `lapse-filters` as
//! `[[test]]` targets, so they exercise the crate the way a host engine
//! would: resolve a filter from the registry, invoke it with template
//! values, assert on the rendered result or the surfaced error.
