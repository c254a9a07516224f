// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-level square-free counting.
//!
//! A query for N:
//!
//! 1. rejects negative N and answers N ≤ 2 with 0 directly,
//! 2. builds a fresh [`QueryContext`] with primes ≤ ⌊√(N−1)⌋,
//! 3. evaluates `phi(N−1, k)`, either directly or through the outer
//!    decomposition `Q(x) = x − Σ_{d≥2} Q(⌊x/d²⌋)`, depending on
//!    [`Decomposition`],
//! 4. drops the context.
//!
//! # Example
//!
//! ```
//! use squarefree_count::count_squarefree_below;
//!
//! // 1, 2, 3, 5, 6, 7, 10
//! assert_eq!(count_squarefree_below(11).unwrap(), 7);
//! assert!(count_squarefree_below(-1).is_err());
//! ```

mod outer;

use tracing::debug;

use crate::config::{CounterConfig, Decomposition};
use crate::context::QueryContext;
use crate::errors::{CountError, Result};
use crate::phi::phi_unchecked;
use crate::primes::{Eratosthenes, PrimeSource};
use crate::state::Statistics;

/// Result of one query, with the work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    pub count: u64,
    pub statistics: Statistics,
    pub phi_cache_entries: usize,
    pub outer_cache_entries: usize,
}

impl QueryReport {
    fn trivial() -> Self {
        Self {
            count: 0,
            statistics: Statistics::new(),
            phi_cache_entries: 0,
            outer_cache_entries: 0,
        }
    }
}

/// Counts square-free integers using a [`PrimeSource`] and a [`CounterConfig`].
///
/// The counter holds no query state; every call builds and drops its own
/// context, so one counter can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct SquarefreeCounter<S = Eratosthenes> {
    source: S,
    config: CounterConfig,
}

impl SquarefreeCounter<Eratosthenes> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CounterConfig) -> Self {
        Self::with_source(Eratosthenes, config)
    }
}

impl<S: PrimeSource> SquarefreeCounter<S> {
    pub fn with_source(source: S, config: CounterConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Number of square-free `i` with `1 <= i < n`.
    ///
    /// `n` of 0, 1 and 2 all give 0.
    ///
    /// # Errors
    ///
    /// [`CountError::InvalidBound`] when `n < 0`.
    pub fn count_below(&self, n: i64) -> Result<u64> {
        Ok(self.count_below_with_report(n)?.count)
    }

    /// Number of square-free `i` with `1 <= i <= n`, i.e. `count_below(n + 1)`.
    ///
    /// Works for `n = i64::MAX` without overflowing.
    pub fn count_up_to(&self, n: i64) -> Result<u64> {
        if n < 0 {
            return Err(CountError::InvalidBound { bound: n });
        }
        if n <= 1 {
            return Ok(0);
        }
        Ok(self.query(n as u64)?.count)
    }

    /// Like [`count_below`](Self::count_below), also returning statistics.
    pub fn count_below_with_report(&self, n: i64) -> Result<QueryReport> {
        if n < 0 {
            return Err(CountError::InvalidBound { bound: n });
        }
        if n <= 2 {
            return Ok(QueryReport::trivial());
        }
        self.query(n as u64 - 1)
    }

    /// Count square-free integers in [1, x] with a fresh context.
    fn query(&self, x: u64) -> Result<QueryReport> {
        let mut ctx = QueryContext::new(x, &self.source, self.config)?;
        let count = match self.config.decomposition {
            Decomposition::Direct => {
                let k = ctx.memo.squared_primes.len();
                phi_unchecked(&mut ctx, x, k)
            }
            Decomposition::Split { threshold } => outer::count_up_to(&mut ctx, x, threshold),
        };

        debug!(
            x,
            count,
            phi_cache = ctx.state.phi_cache.len(),
            outer_cache = ctx.state.outer_cache.len(),
            "[SquarefreeCounter] query complete"
        );

        Ok(QueryReport {
            count,
            phi_cache_entries: ctx.state.phi_cache.len(),
            outer_cache_entries: ctx.state.outer_cache.len(),
            statistics: ctx.state.statistics,
        })
    }
}

/// Number of square-free integers in [1, n), with the default counter.
///
/// # Errors
///
/// [`CountError::InvalidBound`] when `n < 0`.
pub fn count_squarefree_below(n: i64) -> Result<u64> {
    SquarefreeCounter::new().count_below(n)
}

/// Number of square-free integers in [1, n], with the default counter.
pub fn count_squarefree_up_to(n: i64) -> Result<u64> {
    SquarefreeCounter::new().count_up_to(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhiStrategy;
    use crate::primes::PrimeList;
    use crate::state::Counters;

    fn brute_force_below(n: u64) -> u64 {
        (1..n)
            .filter(|&i| (2..).take_while(|d| d * d <= i).all(|d| i % (d * d) != 0))
            .count() as u64
    }

    fn all_configs() -> Vec<CounterConfig> {
        let mut configs = Vec::new();
        for strategy in [PhiStrategy::ExplicitStack, PhiStrategy::CallRecursion] {
            for decomposition in [
                Decomposition::Direct,
                Decomposition::Split { threshold: 0 },
                Decomposition::Split { threshold: 16 },
                Decomposition::Split {
                    threshold: crate::config::DEFAULT_SPLIT_THRESHOLD,
                },
            ] {
                configs.push(
                    CounterConfig::new()
                        .with_phi_strategy(strategy)
                        .with_decomposition(decomposition),
                );
            }
        }
        configs
    }

    #[test]
    fn test_trivial_bounds() {
        for n in 0..=2 {
            assert_eq!(count_squarefree_below(n).unwrap(), 0);
        }
    }

    #[test]
    fn test_negative_bound() {
        assert_eq!(
            count_squarefree_below(-1),
            Err(CountError::InvalidBound { bound: -1 })
        );
        assert_eq!(
            count_squarefree_up_to(-5),
            Err(CountError::InvalidBound { bound: -5 })
        );
    }

    #[test]
    fn test_small_literals() {
        assert_eq!(count_squarefree_below(3).unwrap(), 2);
        assert_eq!(count_squarefree_below(5).unwrap(), 3);
        assert_eq!(count_squarefree_below(10).unwrap(), 6);
        assert_eq!(count_squarefree_below(11).unwrap(), 7);
        assert_eq!(count_squarefree_below(101).unwrap(), 61);
    }

    #[test]
    fn test_every_config_matches_brute_force() {
        for config in all_configs() {
            let counter = SquarefreeCounter::with_config(config);
            for n in 3..=400u64 {
                assert_eq!(
                    counter.count_below(n as i64).unwrap(),
                    brute_force_below(n),
                    "n = {} with {:?}",
                    n,
                    config
                );
            }
        }
    }

    #[test]
    fn test_boundary_prime_squares() {
        // N − 1 equal to, just above and just below a prime square.
        for p in [2u64, 3, 5, 7, 11, 13, 31, 97] {
            let sq = p * p;
            for n in [sq, sq + 1, sq + 2] {
                assert_eq!(
                    count_squarefree_below(n as i64).unwrap(),
                    brute_force_below(n),
                    "n = {}",
                    n
                );
            }
        }
    }

    #[test]
    fn test_count_up_to_is_shifted_below() {
        for n in 0..200 {
            assert_eq!(
                count_squarefree_up_to(n).unwrap(),
                count_squarefree_below(n + 1).unwrap()
            );
        }
    }

    #[test]
    fn test_trivial_report_is_empty() {
        let report = SquarefreeCounter::new().count_below_with_report(2).unwrap();
        assert_eq!(report.count, 0);
        assert_eq!(report.statistics, Statistics::new());
        assert_eq!(report.phi_cache_entries, 0);
    }

    #[test]
    fn test_report_statistics() {
        let counter = SquarefreeCounter::with_config(CounterConfig::new().with_split_threshold(1_000));
        let report = counter.count_below_with_report(1_000_001).unwrap();
        assert_eq!(report.count, 607_926);
        assert!(report.outer_cache_entries > 0);
        assert!(report.phi_cache_entries > 0);
        assert_eq!(
            report.statistics.get(Counters::OuterCacheMisses) as usize,
            report.outer_cache_entries
        );
    }

    #[test]
    fn test_direct_report_never_touches_outer_cache() {
        let counter = SquarefreeCounter::with_config(CounterConfig::new().direct());
        let report = counter.count_below_with_report(100_000).unwrap();
        assert_eq!(report.outer_cache_entries, 0);
        assert_eq!(report.statistics.get(Counters::OuterPhiDelegations), 0);
        assert_eq!(
            report.statistics.get(Counters::PhiCacheMisses) as usize,
            report.phi_cache_entries
        );
    }

    #[test]
    fn test_cache_transparency() {
        // A warm context gives the same answers as cold ones.
        let bound = 50_000u64;
        let mut warm = QueryContext::new(bound, &Eratosthenes, CounterConfig::default()).unwrap();
        let k = warm.memo.squared_primes.len();
        for _ in 0..3 {
            for x in [bound, 40_000, 12_345, 999, 1] {
                let mut cold =
                    QueryContext::new(bound, &Eratosthenes, CounterConfig::default()).unwrap();
                assert_eq!(
                    phi_unchecked(&mut warm, x, k),
                    phi_unchecked(&mut cold, x, k)
                );
            }
        }
        assert!(warm.statistics().get(Counters::PhiCacheHits) > 0);
    }

    #[test]
    fn test_custom_prime_source() {
        struct Table;
        impl PrimeSource for Table {
            fn primes_up_to(&self, bound: i64) -> Result<PrimeList> {
                let mut list = PrimeList::new(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31])?;
                list.truncate_to(bound as u64);
                Ok(list)
            }
        }
        let counter = SquarefreeCounter::with_source(Table, CounterConfig::default());
        assert_eq!(counter.count_below(1_001).unwrap(), 608);
    }

    #[test]
    fn test_malformed_source_is_reported() {
        struct Broken;
        impl PrimeSource for Broken {
            fn primes_up_to(&self, _bound: i64) -> Result<PrimeList> {
                PrimeList::new(vec![2, 5, 3])
            }
        }
        let counter = SquarefreeCounter::with_source(Broken, CounterConfig::default());
        assert_eq!(
            counter.count_below(100),
            Err(CountError::MalformedPrimeList { index: 2 })
        );
    }
}
