//! Injectable secure randomness sources
//!
//! Key material is always built from raw seed bytes drawn through the
//! [`SecureRandom`] trait, never through the dalek crates' own RNG hooks.
//! This keeps the pipeline independent of `rand_core` version skew and lets
//! tests substitute a fixed-seed source for reproducible records.

use crate::error::{VectorError, VectorResult};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of cryptographically secure random bytes.
///
/// A failure here is fatal for the whole run: a degraded RNG invalidates
/// the purpose of a reference vector generator, so no retry is attempted.
pub trait SecureRandom {
    /// Fill `buf` with random bytes, or fail with [`VectorError::Randomness`].
    fn fill(&mut self, buf: &mut [u8]) -> VectorResult<()>;
}

/// Production randomness source backed by OS entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> VectorResult<()> {
        getrandom::getrandom(buf)
            .map_err(|e| VectorError::Randomness(format!("OS entropy unavailable: {}", e)))
    }
}

/// Deterministic randomness source seeded from a fixed 32-byte seed.
///
/// Test-only in spirit: the same seed always yields the same byte stream,
/// making generated records reproducible.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source that replays the stream determined by `seed`.
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            rng: StdRng::from_seed(seed),
        }
    }
}

impl SecureRandom for SeededRandom {
    fn fill(&mut self, buf: &mut [u8]) -> VectorResult<()> {
        self.rng.fill_bytes(buf);
        Ok(())
    }
}
