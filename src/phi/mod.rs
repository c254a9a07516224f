// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Legendre-style phi over prime squares.
//!
//! `phi(x, a)` counts the integers in [1, x] divisible by none of the first
//! `a` squared primes:
//!
//! ```text
//! phi(x, 0) = x
//! phi(x, a) = 0                                  for x <= 0
//! phi(x, a) = phi(x, a-1) - phi(⌊x / p_a²⌋, a-1)
//! ```
//!
//! The last line removes the multiples of the newest square from the set
//! already filtered by the previous ones. Prime squares are pairwise coprime,
//! so the recursion tree performs inclusion-exclusion over all 2^a subsets
//! without listing them, and the PhiCache collapses the branches that meet
//! at the same `(x, a)`.
//!
//! Two evaluation strategies share the cache and give identical results:
//! - [`stack`]: heap-allocated work stack (default)
//! - [`recursive`]: direct recursion

pub mod recursive;
pub mod stack;

use crate::config::PhiStrategy;
use crate::context::QueryContext;
use crate::errors::{CountError, Result};
use crate::memo::SquaredPrimeList;
use crate::state::Counters;

/// Evaluate `phi(x, a)` against the context's squared primes and cache.
///
/// # Errors
///
/// [`CountError::PrimeIndexOutOfRange`] if `a` exceeds the squared-prime table.
/// The index is validated before any shortcut, including `x <= 0`.
pub fn phi(ctx: &mut QueryContext, x: i64, a: usize) -> Result<u64> {
    let available = ctx.memo.squared_primes.len();
    if a > available {
        return Err(CountError::PrimeIndexOutOfRange {
            requested: a,
            available,
        });
    }
    if x <= 0 {
        ctx.state.statistics.increment_counter(Counters::PhiBaseCases);
        return Ok(0);
    }
    Ok(phi_unchecked(ctx, x as u64, a))
}

/// `phi` for a non-negative `x` and an `a` already known to be in range.
pub(crate) fn phi_unchecked(ctx: &mut QueryContext, x: u64, a: usize) -> u64 {
    debug_assert!(a <= ctx.memo.squared_primes.len());
    match ctx.config.phi_strategy {
        PhiStrategy::ExplicitStack => stack::phi(ctx, x, a),
        PhiStrategy::CallRecursion => recursive::phi(ctx, x, a),
    }
}

/// Drop exclusions whose square exceeds `x`.
///
/// For `p_a² > x` the subtracted term is `phi(0, a-1) = 0`, so
/// `phi(x, a) = phi(x, a-1)`; reducing first also merges cache keys.
#[inline]
fn effective_exclusions(squares: &SquaredPrimeList, x: u64, a: usize) -> usize {
    a.min(squares.count_at_most(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CounterConfig;
    use crate::primes::Eratosthenes;

    fn context(bound: u64, strategy: PhiStrategy) -> QueryContext {
        QueryContext::new(
            bound,
            &Eratosthenes,
            CounterConfig::default().with_phi_strategy(strategy),
        )
        .unwrap()
    }

    /// Integers in [1, x] divisible by none of `squares`.
    fn survivors(x: u64, squares: &[u64]) -> u64 {
        (1..=x)
            .filter(|n| squares.iter().all(|sq| n % sq != 0))
            .count() as u64
    }

    #[test]
    fn test_phi_zero_exclusions_is_identity() {
        for strategy in [PhiStrategy::ExplicitStack, PhiStrategy::CallRecursion] {
            let mut ctx = context(10_000, strategy);
            for x in [0i64, 1, 2, 3, 17, 100, 9_999, 10_000] {
                assert_eq!(ctx.phi(x, 0).unwrap(), x as u64);
            }
        }
    }

    #[test]
    fn test_phi_non_positive_is_zero() {
        let mut ctx = context(10_000, PhiStrategy::ExplicitStack);
        let k = ctx.memo.squared_primes.len();
        for a in 0..=k {
            for x in [0i64, -1, -2, -1_000, i64::MIN] {
                assert_eq!(ctx.phi(x, a).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_phi_index_out_of_range() {
        let mut ctx = context(100, PhiStrategy::ExplicitStack);
        assert_eq!(ctx.memo.squared_primes.len(), 4);
        assert_eq!(
            ctx.phi(100, 5),
            Err(CountError::PrimeIndexOutOfRange {
                requested: 5,
                available: 4
            })
        );
        // Validation precedes the x <= 0 shortcut.
        assert!(ctx.phi(-3, 5).is_err());
    }

    #[test]
    fn test_phi_matches_direct_filter() {
        for strategy in [PhiStrategy::ExplicitStack, PhiStrategy::CallRecursion] {
            let mut ctx = context(2_000, strategy);
            let squares = ctx.memo.squared_primes.as_slice().to_vec();
            for a in 0..=squares.len() {
                for x in (0..=2_000u64).step_by(37) {
                    assert_eq!(
                        ctx.phi(x as i64, a).unwrap(),
                        survivors(x, &squares[..a]),
                        "phi({}, {}) with {:?}",
                        x,
                        a,
                        strategy
                    );
                }
            }
        }
    }

    #[test]
    fn test_phi_small_literals() {
        let mut ctx = context(100, PhiStrategy::ExplicitStack);
        // Multiples of 4 removed from 1..=10: 4 and 8.
        assert_eq!(ctx.phi(10, 1).unwrap(), 8);
        // Then multiples of 9: only 9.
        assert_eq!(ctx.phi(10, 2).unwrap(), 7);
        assert_eq!(ctx.phi(100, 4).unwrap(), 61);
    }

    #[test]
    fn test_strategies_agree_and_share_statistics() {
        let mut by_stack = context(250_000, PhiStrategy::ExplicitStack);
        let mut by_recursion = context(250_000, PhiStrategy::CallRecursion);
        let k = by_stack.memo.squared_primes.len();

        assert_eq!(
            by_stack.phi(250_000, k).unwrap(),
            by_recursion.phi(250_000, k).unwrap()
        );
        assert_eq!(by_stack.statistics(), by_recursion.statistics());
        assert_eq!(
            by_stack.state.phi_cache.len(),
            by_recursion.state.phi_cache.len()
        );
    }

    #[test]
    fn test_effective_exclusions() {
        let ctx = context(100, PhiStrategy::ExplicitStack);
        let squares = &ctx.memo.squared_primes;
        assert_eq!(effective_exclusions(squares, 100, 4), 4);
        assert_eq!(effective_exclusions(squares, 30, 4), 3);
        assert_eq!(effective_exclusions(squares, 30, 1), 1);
        assert_eq!(effective_exclusions(squares, 3, 4), 0);
    }
}
