//! Injected randomness.
//!
//! The spec treats the random-bit source as an external dependency: a
//! uniform sampler over arbitrary bit-widths and arbitrary integer ranges.
//! `RandomSource` is that seam; [`ChaChaSource`] is the concrete
//! implementation this crate ships, following the teacher crate's habit of
//! layering small sampling traits over `rand`/`rand_chacha` rather than
//! hand-rolling a generator.

use num_bigint_dig::{BigUint, RandBigInt};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform sampling over non-negative integers, injected into `Key::new`
/// and reused internally (sharded per worker) during parallel setup.
pub trait RandomSource {
    /// Uniform sample in `[0, 2^bits)`. `bits == 0` yields `0`.
    fn random_bits(&mut self, bits: u64) -> BigUint;

    /// Uniform sample in `[0, bound)`. `bound` must be positive.
    fn random_below(&mut self, bound: &BigUint) -> BigUint;

    /// A fresh 64-bit value, used to derive independent per-worker seeds
    /// for the parallel phases of key setup.
    fn random_u64(&mut self) -> u64;
}

/// `ChaCha8`-backed `RandomSource`.
///
/// Cloning a seed reproduces an identical stream, which is what key setup
/// relies on to shard randomness across `rayon` workers: each worker gets
/// its own `ChaChaSource` seeded from a value drawn (sequentially, before
/// the parallel region starts) from the caller-supplied source.
pub struct ChaChaSource(ChaCha8Rng);

impl ChaChaSource {
    pub fn from_seed(seed: u64) -> Self {
        ChaChaSource(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        ChaChaSource(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for ChaChaSource {
    fn random_bits(&mut self, bits: u64) -> BigUint {
        if bits == 0 {
            return BigUint::from(0u32);
        }
        self.0.gen_biguint(bits as usize)
    }

    fn random_below(&mut self, bound: &BigUint) -> BigUint {
        self.0.gen_biguint_below(bound)
    }

    fn random_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

/// Derives a child stream seed from a parent seed and a purpose tag, so a
/// single per-slot seed can drive several independent draws (e.g. `p_i`
/// generation and `v`'s `h_i` generation for the same slot `i`) without
/// correlating them.
pub(crate) fn child_seed(seed: u64, tag: u64) -> u64 {
    seed ^ tag.wrapping_mul(0x9E3779B97F4A7C15)
}

pub(crate) const TAG_P: u64 = 1;
pub(crate) const TAG_G: u64 = 2;
pub(crate) const TAG_V: u64 = 3;
pub(crate) const TAG_XP: u64 = 4;
pub(crate) const TAG_VARPI: u64 = 5;
