// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one query).
//!
//! - PhiCache: memoized `phi(x, a)` values
//! - OuterCache: memoized square-free counts per sub-bound
//! - Statistics: cache and recursion counters

pub mod caches;
pub mod statistics;

pub use caches::{OuterCache, PhiCache};
pub use statistics::{Counters, Statistics};
