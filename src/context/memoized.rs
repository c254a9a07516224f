// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use tracing::trace;

use crate::errors::Result;
use crate::memo::SquaredPrimeList;
use crate::primes::{isqrt, PrimeList, PrimeSource};

/// Prime tables for one query.
///
/// Computed once from the query bound and never changed while counting. Any
/// bound `y <= bound` can be answered from these tables, which is what lets
/// the outer decomposition share them across its sub-bounds.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Largest integer this data covers.
    pub bound: u64,

    /// All primes ≤ ⌊√bound⌋.
    pub primes: PrimeList,

    /// Squares of `primes`, index-aligned.
    pub squared_primes: SquaredPrimeList,
}

impl MemoizedData {
    /// Fetch primes ≤ ⌊√bound⌋ from `source` and square them.
    ///
    /// Primes the source returns above ⌊√bound⌋ are dropped; their squares
    /// exceed `bound` and could overflow.
    pub fn for_bound<S: PrimeSource + ?Sized>(bound: u64, source: &S) -> Result<Self> {
        let root = isqrt(bound);
        let mut primes = source.primes_up_to(root as i64)?;
        primes.truncate_to(root);
        Ok(Self::from_primes(bound, primes))
    }

    /// Build from an already-supplied prime list.
    pub fn from_primes(bound: u64, primes: PrimeList) -> Self {
        let squared_primes = SquaredPrimeList::from_primes(&primes);
        trace!(
            bound,
            primes = primes.len(),
            largest_square = squared_primes.as_slice().last().copied().unwrap_or(0),
            "[MemoizedData] squared prime table ready"
        );
        Self {
            bound,
            primes,
            squared_primes,
        }
    }
}
