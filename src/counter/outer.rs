// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outer decomposition of a square-free count.
//!
//! Every `n <= x` factors uniquely as `n = d²·m` with `m` square-free, so
//!
//! ```text
//! Σ_{d≥1} Q(⌊x/d²⌋) = x        hence        Q(x) = x - Σ_{d≥2, d²≤x} Q(⌊x/d²⌋)
//! ```
//!
//! where `Q(y)` counts square-free integers in [1, y]. Consecutive `d` that
//! share a quotient are summed in one step, leaving O(x^{1/3}) distinct
//! sub-bounds per level. Sub-bounds at or below the split threshold go to
//! phi on the shared cache; larger ones recurse here through the OuterCache.
//! Every sub-bound is ≤ x/4, so call depth stays under 32.

use crate::context::QueryContext;
use crate::phi::phi_unchecked;
use crate::primes::isqrt;
use crate::state::Counters;

/// `Q(x)`: square-free integers in [1, x]. `x` must be covered by `ctx`.
pub(super) fn count_up_to(ctx: &mut QueryContext, x: u64, threshold: u64) -> u64 {
    debug_assert!(x <= ctx.memo.bound);

    if x <= threshold {
        ctx.state
            .statistics
            .increment_counter(Counters::OuterPhiDelegations);
        let a = ctx.memo.squared_primes.count_at_most(x);
        return phi_unchecked(ctx, x, a);
    }
    if let Some(count) = ctx.state.outer_cache.get(x) {
        ctx.state.statistics.increment_counter(Counters::OuterCacheHits);
        return count;
    }
    ctx.state.statistics.increment_counter(Counters::OuterCacheMisses);

    let root = isqrt(x);
    let mut total = x;
    let mut d = 2u64;
    while d <= root {
        let quotient = x / (d * d);
        // Largest d' with ⌊x/d'²⌋ == quotient.
        let last = isqrt(x / quotient).min(root);
        let sub = count_up_to(ctx, quotient, threshold);
        total -= (last - d + 1) * sub;
        d = last + 1;
    }

    ctx.state.outer_cache.insert(x, total);
    total
}
