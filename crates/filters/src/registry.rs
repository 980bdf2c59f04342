// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter registration for host template engines.
//!
//! The host engine queries the registry once at load time to populate its
//! filter namespace, then invokes filters by name while rendering.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;
use crate::offset::add_time;

/// Keyword arguments of a filter call: unit name to numeric magnitude.
pub type Kwargs = serde_json::Map<String, Value>;

/// The shape of every filter callable this crate exports.
///
/// Plain function pointers: filters hold no state, so concurrent renders
/// share them without coordination.
pub type FilterFn = fn(&Value, &Kwargs) -> Result<Value>;

/// Name-to-callable table the host engine queries at load time.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: BTreeMap<&'static str, FilterFn>,
}

impl FilterRegistry {
    /// Build the registry of built-in filters. Cannot fail.
    #[must_use]
    pub fn builtin() -> Self {
        let mut filters = BTreeMap::new();
        filters.insert("add_time", add_time as FilterFn);
        tracing::debug!("registered {} template filters", filters.len());
        FilterRegistry { filters }
    }

    /// Look up a filter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FilterFn> {
        self.filters.get(name).copied()
    }

    /// Registered filter names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when no filters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        FilterRegistry::builtin()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
