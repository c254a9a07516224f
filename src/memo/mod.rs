// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed per query).
//!
//! - Squared prime table, index-aligned with the query's prime list

pub mod squared_primes;

pub use squared_primes::SquaredPrimeList;
