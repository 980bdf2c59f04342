// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lapse - time-offset filters for template engines.
//!
//! This crate provides the `add_time` template filter and the registry a
//! host templating/configuration engine queries to discover it.
//!
//! # Main Components
//!
//! - [`add_time`] - advance a timestamp by named duration amounts
//! - [`FilterRegistry`] - name-to-callable table, queried at engine load time
//! - [`Error`] - errors surfaced as template rendering failures
//!
//! # Usage from a host engine
//!
//! The engine resolves a filter by name once at load time, then invokes it
//! with the template expression's value and keyword arguments:
//!
//! ```rust,ignore
//! use lapse::FilterRegistry;
//!
//! let registry = FilterRegistry::builtin();
//! let filter = registry.get("add_time").expect("built-in filter");
//! let rendered = filter(&base_value, &kwargs)?;
//! ```

pub mod error;
pub mod offset;
pub mod registry;

pub use error::{Error, Result};
pub use offset::add_time;
pub use registry::{FilterFn, FilterRegistry, Kwargs};
