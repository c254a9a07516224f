// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Phi evaluated on an explicit work stack.
//!
//! Each `(x, a)` that misses the cache becomes three tasks: expand
//! `(x, a-1)`, expand `(⌊x/p_a²⌋, a-1)`, then combine. Expansions push their
//! value on a value stack; a combine pops the two child values and caches
//! the difference. Tasks run in exactly the order the recursive version
//! makes its calls, so the cache and statistics evolve identically.

use super::effective_exclusions;
use crate::context::QueryContext;
use crate::state::Counters;

#[derive(Debug, Clone, Copy)]
enum Task {
    Expand { x: u64, a: usize },
    Combine { x: u64, a: usize },
}

pub(super) fn phi(ctx: &mut QueryContext, x: u64, a: usize) -> u64 {
    let mut tasks = vec![Task::Expand { x, a }];
    let mut values: Vec<u64> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Expand { x, a } => {
                let a = effective_exclusions(&ctx.memo.squared_primes, x, a);
                if a == 0 {
                    ctx.state.statistics.increment_counter(Counters::PhiBaseCases);
                    values.push(x);
                    continue;
                }
                if let Some(value) = ctx.state.phi_cache.get(x, a) {
                    ctx.state.statistics.increment_counter(Counters::PhiCacheHits);
                    values.push(value);
                    continue;
                }
                ctx.state.statistics.increment_counter(Counters::PhiCacheMisses);

                let square = ctx.memo.squared_primes.as_slice()[a - 1];
                // LIFO: (x, a-1) runs first, its value lands below the quotient's.
                tasks.push(Task::Combine { x, a });
                tasks.push(Task::Expand {
                    x: x / square,
                    a: a - 1,
                });
                tasks.push(Task::Expand { x, a: a - 1 });
            }
            Task::Combine { x, a } => {
                let (kept, removed) = pop_pair(&mut values);
                let value = kept - removed;
                ctx.state.phi_cache.insert(x, a, value);
                values.push(value);
            }
        }
    }

    debug_assert_eq!(values.len(), 1);
    values.pop().unwrap_or(0)
}

/// Pop `(kept, removed)`, pushed in that order.
#[inline]
fn pop_pair(values: &mut Vec<u64>) -> (u64, u64) {
    match (values.pop(), values.pop()) {
        (Some(removed), Some(kept)) => (kept, removed),
        _ => unreachable!("combine task without two child values"),
    }
}
