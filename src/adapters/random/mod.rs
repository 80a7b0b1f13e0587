//! Seeded XorShift64 random source.
//!
//! Same seed, same schedule. Bounded draws use Lemire's multiply-high method
//! with rejection, so `below(n)` is uniform for every `n`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::RandomSource;

/// Deterministic RNG for schedule decisions.
///
/// Not `Copy`: copying would duplicate the stream and repeat "random" decisions.
#[derive(Clone, Debug)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed 0 is mapped to a non-zero value to avoid the all-zero lockup state.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Marsaglia's (13, 7, 17) full-period generator.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn bounded_u64(&mut self, upper: u64) -> u64 {
        // 2^64 mod upper: products whose low half falls below this are biased
        let threshold = upper.wrapping_neg() % upper;

        loop {
            let m = (self.next_u64() as u128) * (upper as u128);
            if m as u64 >= threshold {
                return (m >> 64) as u64;
            }
        }
    }
}

impl RandomSource for XorShift64 {
    fn below(&mut self, upper: u32) -> u32 {
        debug_assert!(upper > 0, "upper bound must be > 0");
        self.bounded_u64(u64::from(upper)) as u32
    }
}

/// Seed derived from the wall clock, scrambled so nearby instants diverge.
pub fn time_seed() -> u64 {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    splitmix64(nanos as u64 ^ (nanos >> 64) as u64)
}

/// SplitMix64 finalizer (Vigna, 2017).
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
