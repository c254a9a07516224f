// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable query state (Tier 2: DYNAMIC).

use crate::state::{OuterCache, PhiCache, Statistics};

/// Caches and counters filled in while one query runs.
///
/// Starts empty and is dropped with its [`QueryContext`](super::QueryContext).
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Memoized `phi(x, a)` values.
    pub phi_cache: PhiCache,

    /// Memoized square-free counts for outer sub-bounds.
    pub outer_cache: OuterCache,

    pub statistics: Statistics,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }
}
