// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Write-once memo tables for one query.
//!
//! An entry, once present, is the exact answer for its key and is never
//! replaced. Writing a different value under an existing key is a bug in the
//! recurrence and trips a debug assertion.

use std::collections::HashMap;

/// `(x, a)` → number of integers in [1, x] surviving the first `a` prime squares.
#[derive(Debug, Default, Clone)]
pub struct PhiCache {
    entries: HashMap<(u64, usize), u64>,
}

impl PhiCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, x: u64, a: usize) -> Option<u64> {
        self.entries.get(&(x, a)).copied()
    }

    /// Record `phi(x, a) = value`.
    #[inline]
    pub fn insert(&mut self, x: u64, a: usize, value: u64) {
        let previous = self.entries.insert((x, a), value);
        debug_assert!(
            previous.map_or(true, |old| old == value),
            "phi({}, {}) rewritten from {:?} to {}",
            x,
            a,
            previous,
            value
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sub-bound `x` → number of square-free integers in [1, x].
#[derive(Debug, Default, Clone)]
pub struct OuterCache {
    entries: HashMap<u64, u64>,
}

impl OuterCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, x: u64) -> Option<u64> {
        self.entries.get(&x).copied()
    }

    #[inline]
    pub fn insert(&mut self, x: u64, value: u64) {
        let previous = self.entries.insert(x, value);
        debug_assert!(
            previous.map_or(true, |old| old == value),
            "Q({}) rewritten from {:?} to {}",
            x,
            previous,
            value
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
