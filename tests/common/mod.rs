// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use squarefree_count::oracle::count_squarefree_below_naive;

/// Ground truth for the fast counter below `n`.
///
/// Follows the fast counter's convention that bounds 0, 1 and 2 count nothing.
pub fn oracle_below(n: i64) -> u64 {
    if n <= 2 {
        return 0;
    }
    count_squarefree_below_naive(n).expect("non-negative bound")
}

/// Square-free counts for 1..=10^k, k = 1..=8.
pub const POWERS_OF_TEN: [(i64, u64); 8] = [
    (10, 7),
    (100, 61),
    (1_000, 608),
    (10_000, 6_083),
    (100_000, 60_794),
    (1_000_000, 607_926),
    (10_000_000, 6_079_291),
    (100_000_000, 60_792_694),
];
