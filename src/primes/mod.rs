// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime supply for the counting engine.
//!
//! The engine never generates primes itself. It consumes an ascending,
//! duplicate-free [`PrimeList`] through the [`PrimeSource`] trait, which keeps
//! the sieve swappable (tests plug in fixed tables, callers may bring their own
//! segmented or cached sieve).
//!
//! [`Eratosthenes`] is the default source.

pub mod sieve;

pub use sieve::{isqrt, Eratosthenes};

use crate::errors::{CountError, Result};

/// Ordered sequence of distinct primes p₁ < p₂ < … < pₖ.
///
/// Immutable once constructed. Lists built through [`PrimeList::new`] are
/// validated; the sieve builds them directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeList {
    primes: Vec<u64>,
}

impl PrimeList {
    /// Build a prime list from an arbitrary vector.
    ///
    /// Primality is not re-checked, but the values must start at 2 or above
    /// and be strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::MalformedPrimeList`] naming the first offending index.
    pub fn new(primes: Vec<u64>) -> Result<Self> {
        if let Some(&first) = primes.first() {
            if first < 2 {
                return Err(CountError::MalformedPrimeList { index: 0 });
            }
        }
        if let Some(index) = primes.windows(2).position(|w| w[0] >= w[1]) {
            return Err(CountError::MalformedPrimeList { index: index + 1 });
        }
        Ok(Self { primes })
    }

    /// Wrap a vector already known to be ascending primes.
    pub(crate) fn from_sorted(primes: Vec<u64>) -> Self {
        debug_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        Self { primes }
    }

    /// Drop every prime greater than `bound`.
    pub fn truncate_to(&mut self, bound: u64) {
        let keep = self.primes.partition_point(|&p| p <= bound);
        self.primes.truncate(keep);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }
}

/// Supplier of the ascending primes not exceeding a bound.
///
/// Implementations must be deterministic: the same bound always yields the
/// same list.
pub trait PrimeSource {
    /// All primes `p` with `p <= bound`, ascending, without duplicates.
    ///
    /// # Errors
    ///
    /// [`CountError::InvalidBound`] when `bound` is negative. Bounds 0 and 1
    /// yield an empty list.
    fn primes_up_to(&self, bound: i64) -> Result<PrimeList>;
}

impl<S: PrimeSource + ?Sized> PrimeSource for &S {
    fn primes_up_to(&self, bound: i64) -> Result<PrimeList> {
        (**self).primes_up_to(bound)
    }
}

/// Primes not exceeding `bound`, from the default [`Eratosthenes`] source.
pub fn primes_up_to(bound: i64) -> Result<PrimeList> {
    Eratosthenes.primes_up_to(bound)
}
