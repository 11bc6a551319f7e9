//! Universal hash parameters.
//!
//! A parameter set is the triple `(multiplier, increment, bucket_count)`
//! drawn against the fixed prime [`PRIME`]. Keys map to buckets with
//!
//! ```text
//!   h(k) = ((multiplier * k + increment) mod PRIME) mod bucket_count
//! ```
//!
//! For a random choice of `multiplier` in `[1, PRIME)` and `increment` in
//! `[0, PRIME)`, two distinct keys collide with probability at most
//! `1 / bucket_count`, which keeps expected chain length O(1). This is a
//! bound in expectation only; a single unlucky draw can still degrade a
//! bucket to O(n).
//!
//! Parameters are a plain value. Every table copies the set it was built
//! from, so drawing a new set never affects existing tables.

use crate::key::IntKey;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Prime modulus of the hash family. Bucket counts above it still work but
/// lose the collision bound, and buckets at index `>= PRIME` are never used.
pub const PRIME: u64 = 15_733;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("bucket count must be positive")]
    ZeroBuckets,
    #[error("multiplier {0} outside [1, {p})", p = PRIME)]
    MultiplierOutOfRange(u64),
    #[error("increment {0} outside [0, {p})", p = PRIME)]
    IncrementOutOfRange(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashParams {
    multiplier: u64,
    increment: u64,
    bucket_count: usize,
}

impl HashParams {
    /// Draw a fresh parameter set for `bucket_count` buckets from an
    /// entropy-seeded RNG.
    pub fn initialize(bucket_count: usize) -> Result<Self, ParamsError> {
        Self::builder(bucket_count).build()
    }

    pub fn builder(bucket_count: usize) -> HashParamsBuilder {
        HashParamsBuilder::new(bucket_count)
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// True when the bucket count is larger than [`PRIME`].
    pub fn exceeds_prime(&self) -> bool {
        self.bucket_count as u64 > PRIME
    }

    /// Bucket index for `key`, always in `[0, bucket_count)`.
    #[inline]
    pub fn hash<K: IntKey>(&self, key: K) -> usize {
        let p = PRIME as i128;
        // rem_euclid keeps negative keys in [0, p).
        let h = (self.multiplier as i128 * key.widen() + self.increment as i128).rem_euclid(p);
        (h as u64 % self.bucket_count as u64) as usize
    }
}

/// Builder for [`HashParams`].
///
/// By default the coefficients are drawn from an entropy-seeded RNG. Set a
/// `seed` for reproducible draws, or pin both `coefficients` directly.
#[derive(Debug, Clone)]
pub struct HashParamsBuilder {
    bucket_count: usize,
    seed: Option<u64>,
    coefficients: Option<(u64, u64)>,
}

impl HashParamsBuilder {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count,
            seed: None,
            coefficients: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use explicit coefficients instead of drawing them. `multiplier` must
    /// be in `[1, PRIME)`, `increment` in `[0, PRIME)`.
    pub fn coefficients(mut self, multiplier: u64, increment: u64) -> Self {
        self.coefficients = Some((multiplier, increment));
        self
    }

    pub fn build(self) -> Result<HashParams, ParamsError> {
        if self.bucket_count == 0 {
            return Err(ParamsError::ZeroBuckets);
        }
        let (multiplier, increment) = match self.coefficients {
            Some((a, b)) => {
                if a == 0 || a >= PRIME {
                    return Err(ParamsError::MultiplierOutOfRange(a));
                }
                if b >= PRIME {
                    return Err(ParamsError::IncrementOutOfRange(b));
                }
                (a, b)
            }
            None => {
                let mut rng = match self.seed {
                    Some(s) => StdRng::seed_from_u64(s),
                    None => StdRng::from_entropy(),
                };
                (rng.gen_range(1..PRIME), rng.gen_range(0..PRIME))
            }
        };
        if self.bucket_count as u64 > PRIME {
            warn!(
                "bucket count {} exceeds hash prime {}; operations may degrade from O(1) to O(n)",
                self.bucket_count, PRIME
            );
        }
        debug!(
            "hash params: multiplier={} increment={} buckets={}",
            multiplier, increment, self.bucket_count
        );

        Ok(HashParams {
            multiplier,
            increment,
            bucket_count: self.bucket_count,
        })
    }
}
