// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for square-free counting.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Errors that can occur while supplying primes or counting.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum CountError {
    /// A counting query or prime request received a negative bound.
    #[error("invalid bound {bound}: bounds must be non-negative")]
    InvalidBound { bound: i64 },

    /// An exclusion count beyond the squared-prime table was requested.
    ///
    /// This is an invariant violation in the decomposition, not an input problem.
    #[error("prime index {requested} out of range: only {available} squared primes available")]
    PrimeIndexOutOfRange { requested: usize, available: usize },

    /// A prime source returned values that are not strictly ascending.
    #[error("prime list is not strictly ascending at index {index}")]
    MalformedPrimeList { index: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CountError>;
