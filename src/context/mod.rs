// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query context combining MEMO and DYNAMIC state.
//!
//! The QueryContext is the bundle every recursive step receives:
//! - Tier 1 (MEMO): the prime and squared-prime tables for the query bound
//! - Tier 2 (DYNAMIC): the phi cache, the outer cache and statistics
//!
//! One context serves one top-level query and is dropped when it returns.
//! Independent queries each build their own context, so they can run on
//! separate threads without sharing anything mutable.

pub mod dynamic;
pub mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use tracing::debug;

use crate::config::CounterConfig;
use crate::errors::Result;
use crate::phi;
use crate::primes::PrimeSource;
use crate::state::Statistics;

/// Per-query state passed by `&mut` through the recursion.
///
/// # Memory Model
///
/// ```text
/// QueryContext {
///     memo: MemoizedData,    // Tier 1: immutable for the query
///     state: DynamicState,   // Tier 2: caches, written once per key
///     config: CounterConfig, // evaluation strategy
/// }
/// ```
///
/// # Example
///
/// ```
/// use squarefree_count::context::QueryContext;
/// use squarefree_count::config::CounterConfig;
/// use squarefree_count::primes::Eratosthenes;
///
/// let mut ctx = QueryContext::new(99, &Eratosthenes, CounterConfig::default()).unwrap();
/// let k = ctx.memo.squared_primes.len();
/// // Square-free integers in [1, 99].
/// assert_eq!(ctx.phi(99, k).unwrap(), 61);
/// ```
#[derive(Debug)]
pub struct QueryContext {
    pub memo: MemoizedData,
    pub state: DynamicState,
    pub config: CounterConfig,
}

impl QueryContext {
    /// Create a context covering every integer up to `bound`.
    pub fn new<S: PrimeSource + ?Sized>(
        bound: u64,
        source: &S,
        config: CounterConfig,
    ) -> Result<Self> {
        let memo = MemoizedData::for_bound(bound, source)?;
        debug!(
            bound,
            primes = memo.primes.len(),
            ?config,
            "[QueryContext] initialized"
        );
        Ok(Self::with_memo(memo, config))
    }

    /// Create a context over existing MEMO data, with empty caches.
    pub fn with_memo(memo: MemoizedData, config: CounterConfig) -> Self {
        Self {
            memo,
            state: DynamicState::new(),
            config,
        }
    }

    /// `phi(x, a)`: integers in [1, x] divisible by none of the first `a`
    /// squared primes.
    ///
    /// # Errors
    ///
    /// [`CountError::PrimeIndexOutOfRange`](crate::CountError::PrimeIndexOutOfRange)
    /// when `a` exceeds the squared-prime table.
    pub fn phi(&mut self, x: i64, a: usize) -> Result<u64> {
        phi::phi(self, x, a)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.state.statistics
    }
}
