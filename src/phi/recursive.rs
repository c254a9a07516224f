// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct recursive evaluation of phi.

use super::effective_exclusions;
use crate::context::QueryContext;
use crate::state::Counters;

/// Recursion depth is at most `a`, the number of primes ≤ √x.
pub(super) fn phi(ctx: &mut QueryContext, x: u64, a: usize) -> u64 {
    let a = effective_exclusions(&ctx.memo.squared_primes, x, a);
    if a == 0 {
        ctx.state.statistics.increment_counter(Counters::PhiBaseCases);
        return x;
    }
    if let Some(value) = ctx.state.phi_cache.get(x, a) {
        ctx.state.statistics.increment_counter(Counters::PhiCacheHits);
        return value;
    }
    ctx.state.statistics.increment_counter(Counters::PhiCacheMisses);

    let square = ctx.memo.squared_primes.as_slice()[a - 1];
    let kept = phi(ctx, x, a - 1);
    let removed = phi(ctx, x / square, a - 1);
    let value = kept - removed;

    ctx.state.phi_cache.insert(x, a, value);
    value
}
