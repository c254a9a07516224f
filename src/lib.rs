// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sub-linear counting of square-free integers.
//!
//! A positive integer is square-free when no prime square divides it. Testing
//! each integer below N costs O(N·√N); this crate counts them without looking
//! at individual integers, using a Meissel–Lehmer-style phi recurrence over
//! prime squares.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model per query:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once from the query bound:
//! - PrimeList - primes ≤ ⌊√(N−1)⌋, from a [`PrimeSource`]
//! - SquaredPrimeList - their squares, index-aligned
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Filled while counting, write-once per key:
//! - PhiCache - `(x, a)` → survivors of the first `a` prime squares in [1, x]
//! - OuterCache - sub-bound → square-free count, for the outer decomposition
//! - Statistics - cache hits and misses
//!
//! Both tiers live in a [`QueryContext`] that is created for one query and
//! dropped when it returns.
//!
//! # Counting Algorithm
//!
//! 1. **PrimeSource**: supply primes ≤ ⌊√(N−1)⌋ ([`primes::Eratosthenes`] by default)
//! 2. **PhiCounter**: `phi(x, a) = phi(x, a−1) − phi(⌊x/p_a²⌋, a−1)`, memoized ([`phi`])
//! 3. **SquarefreeCounter**: `phi(N−1, k)`, optionally split through
//!    `Q(x) = x − Σ_{d≥2} Q(⌊x/d²⌋)` for large bounds ([`counter`])
//!
//! # Example
//!
//! ```
//! use squarefree_count::{count_squarefree_below, count_squarefree_up_to};
//!
//! assert_eq!(count_squarefree_below(100).unwrap(), 61);
//! assert_eq!(count_squarefree_up_to(1_000_000).unwrap(), 607_926);
//! ```

pub mod config;
pub mod context;
pub mod counter;
pub mod errors;
pub mod memo;
pub mod oracle;
pub mod phi;
pub mod primes;
pub mod state;

// Re-export commonly used types
pub use config::{CounterConfig, Decomposition, PhiStrategy};
pub use context::QueryContext;
pub use counter::{count_squarefree_below, count_squarefree_up_to, QueryReport, SquarefreeCounter};
pub use errors::CountError;
pub use primes::{primes_up_to, PrimeList, PrimeSource};
