// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive square-free tests by trial division.
//!
//! O(N·√N). Useful as ground truth for the fast counter and for listing
//! the square-free numbers themselves, which the fast counter never does.

use crate::errors::{CountError, Result};

/// True if no prime square divides `n`. 0 is not square-free; 1 is.
pub fn is_squarefree(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let mut n = n;
    let mut p = 2u64;
    while p.checked_mul(p).map_or(false, |sq| sq <= n) {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return false;
            }
        }
        p += 1;
    }
    true
}

/// Square-free integers `i` with `1 <= i < n`, ascending.
pub fn squarefree_below(n: u64) -> impl Iterator<Item = u64> {
    (1..n).filter(|&i| is_squarefree(i))
}

/// Count square-free integers in [1, n) one at a time.
///
/// Unlike the fast counter, `n = 2` gives 1 (the integer 1 itself).
///
/// # Errors
///
/// [`CountError::InvalidBound`] when `n < 0`.
pub fn count_squarefree_below_naive(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(CountError::InvalidBound { bound: n });
    }
    Ok(squarefree_below(n as u64).count() as u64)
}
