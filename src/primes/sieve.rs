// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-packed sieve of Eratosthenes over odd numbers.
//!
//! Bit `i` of the sieve stands for the odd number `2i + 1`; 2 is pushed by
//! hand. Memory is one bit per odd candidate, so the √N tables needed for
//! 64-bit bounds stay under 200 MB even at the top of the range.

use super::{PrimeList, PrimeSource};
use crate::errors::{CountError, Result};

/// Integer square root, exact for every `u64`.
///
/// Seeds from `f64` and corrects with checked arithmetic, so values near
/// `u64::MAX` where the float rounds up are handled.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Upper estimate of π(n), for pre-allocation.
#[inline]
fn prime_count_upper(n: u64) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (nf / nf.ln() * 1.15) as usize + 1
}

/// The default [`PrimeSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Eratosthenes;

impl Eratosthenes {
    /// Sieve all primes `<= n`.
    pub fn sieve(n: u64) -> Vec<u64> {
        if n < 2 {
            return Vec::new();
        }

        // Highest index whose odd number 2i + 1 is still <= n.
        let half = (n - 1) / 2;
        let num_words = (half / 64 + 1) as usize;
        let mut bits = vec![!0u64; num_words];
        // 1 is not prime.
        bits[0] &= !1;

        let mut i = 1u64;
        loop {
            let p = 2 * i + 1;
            if p > n / p {
                break;
            }
            if (bits[(i >> 6) as usize] >> (i & 63)) & 1 == 1 {
                // Index of p², then every 2p in value is p in index.
                let mut j = (p * p - 1) / 2;
                while j <= half {
                    bits[(j >> 6) as usize] &= !(1u64 << (j & 63));
                    j += p;
                }
            }
            i += 1;
        }

        let mut primes = Vec::with_capacity(prime_count_upper(n));
        primes.push(2);
        for (w, &word) in bits.iter().enumerate() {
            let mut word = word;
            while word != 0 {
                let idx = ((w as u64) << 6) + u64::from(word.trailing_zeros());
                if idx > half {
                    break;
                }
                primes.push(2 * idx + 1);
                word &= word - 1;
            }
        }
        primes
    }
}

impl PrimeSource for Eratosthenes {
    fn primes_up_to(&self, bound: i64) -> Result<PrimeList> {
        if bound < 0 {
            return Err(CountError::InvalidBound { bound });
        }
        Ok(PrimeList::from_sorted(Self::sieve(bound as u64)))
    }
}
