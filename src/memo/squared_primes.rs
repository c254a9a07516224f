// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Squared primes, the "excluded events" of the phi recurrence.
//!
//! Entry `i` is `pᵢ²` for the `i`-th prime of the query's [`PrimeList`].
//! Distinct prime squares are pairwise coprime, which is what lets the phi
//! recurrence remove their multiples one at a time.

use crate::primes::PrimeList;

/// Strictly increasing table of prime squares.
///
/// # Memory
///
/// One `u64` per prime ≤ √N: about 1.6 MB at the top of the `i64` range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquaredPrimeList {
    squares: Vec<u64>,
}

impl SquaredPrimeList {
    /// Square every prime of `primes`.
    ///
    /// Callers truncate `primes` to √(bound) first, so every square fits in a `u64`.
    pub fn from_primes(primes: &PrimeList) -> Self {
        let squares = primes
            .iter()
            .map_while(|p| p.checked_mul(p))
            .collect::<Vec<_>>();
        debug_assert_eq!(squares.len(), primes.len(), "prime square overflowed u64");
        Self { squares }
    }

    /// Get the `index`-th square (0-based).
    #[inline]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.squares.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.squares
    }

    /// Number of squares that are `<= x`.
    ///
    /// Squares above `x` cannot divide anything in [1, x], so this is the
    /// largest exclusion count that still changes `phi(x, ·)`.
    #[inline]
    pub fn count_at_most(&self, x: u64) -> usize {
        self.squares.partition_point(|&sq| sq <= x)
    }
}
