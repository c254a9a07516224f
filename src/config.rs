// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tuning knobs for a counting query.
//!
//! None of these change the answer, only how it is computed.

/// Suggested split threshold: sub-bounds at or below it go to phi.
///
/// Smaller thresholds trade phi cache entries for outer cache entries; at 0
/// the outer identity does all the work and the phi cache stays empty.
pub const DEFAULT_SPLIT_THRESHOLD: u64 = 1 << 16;

/// How `phi(x, a)` is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhiStrategy {
    /// Heap-allocated work stack; recursion depth never touches the call stack.
    #[default]
    ExplicitStack,
    /// Direct recursive restatement of the recurrence.
    ///
    /// Depth is bounded by the number of primes ≤ √N, which is fine for
    /// moderate N but can exhaust a small thread stack for very large N.
    CallRecursion,
}

/// How the top-level query is split.
///
/// `Direct` is the faster of the two up to at least 10^14; `Split` keeps far
/// fewer cache entries, which matters as N approaches the top of the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decomposition {
    /// A single `phi(N − 1, k)` call.
    #[default]
    Direct,
    /// Outer recursion over `x − Σ_{d≥2} Q(⌊x/d²⌋)` for bounds above
    /// `threshold`, phi below it.
    Split { threshold: u64 },
}

/// Configuration for [`SquarefreeCounter`](crate::SquarefreeCounter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterConfig {
    pub phi_strategy: PhiStrategy,
    pub decomposition: Decomposition,
}

impl CounterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phi_strategy(mut self, phi_strategy: PhiStrategy) -> Self {
        self.phi_strategy = phi_strategy;
        self
    }

    pub fn with_decomposition(mut self, decomposition: Decomposition) -> Self {
        self.decomposition = decomposition;
        self
    }

    /// Shorthand for `Decomposition::Split { threshold }`.
    pub fn with_split_threshold(self, threshold: u64) -> Self {
        self.with_decomposition(Decomposition::Split { threshold })
    }

    /// Shorthand for `Decomposition::Direct`.
    pub fn direct(self) -> Self {
        self.with_decomposition(Decomposition::Direct)
    }
}
