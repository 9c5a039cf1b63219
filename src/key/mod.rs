//! `Key`: the trusted-setup output holding both `SecretState` and
//! `PublicState` (spec §3).

mod decrypt;
mod encode;
mod rerandomize;
mod setup;
mod zerotest;

use num_bigint_dig::{BigInt, BigUint};

use crate::bigint;
use crate::encoding::Encoding;
use crate::params::{Instantiation, Params};
use crate::random::RandomSource;

/// Owned by the key, never exposed to callers.
pub(crate) struct SecretState {
    pub(crate) p: Vec<BigUint>,
    pub(crate) crt_coeff: Vec<BigUint>,
    pub(crate) g: Vec<BigUint>,
    pub(crate) z: BigUint,
    pub(crate) zinv: BigUint,
    pub(crate) zkappa: BigUint,
}

/// Freely copyable (kept behind `&Key` here, but nothing here is
/// confidential).
pub(crate) struct PublicState {
    pub(crate) x0: BigUint,
    pub(crate) xp: Vec<BigUint>,
    pub(crate) y: BigUint,
    /// Rerandomization pool, `2*delta` entries: first half are level-0
    /// zero-encodings, second half are level-1 encodings of a fresh
    /// alpha-bit random per slot.
    pub(crate) varpi: Vec<BigUint>,
    pub(crate) v: BigUint,
    /// ℓ × N matrix of α-bit centered entries behind `xp`. Kept for audit
    /// / re-encoding; spec §3 leaves secrecy of this an implementation
    /// choice, we keep it `pub(crate)` only.
    #[allow(dead_code)]
    pub(crate) a: Vec<Vec<BigInt>>,
}

/// A trusted-setup key: secret primes, CRT coefficients, and the public
/// encodings/zero-tester derived from them.
///
/// `Encoding`s created from a `Key` borrow it (`Encoding<'k>`); the key
/// must outlive every encoding derived from it, which the borrow checker
/// enforces directly instead of through a reference count.
pub struct Key {
    pub(crate) params: Params,
    pub(crate) secret: SecretState,
    pub(crate) public: PublicState,
}

impl Key {
    /// Runs trusted setup (spec §4.1) for the given instantiation, drawing
    /// randomness from `rng`. Deterministic given `rng`'s seed.
    pub fn new(rng: &mut impl RandomSource, instantiation: Instantiation) -> Key {
        setup::setup(instantiation.params(), rng)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn x0(&self) -> &BigUint {
        &self.public.x0
    }

    pub fn nb_bits(&self, v: &BigUint) -> u64 {
        bigint::nb_bits(v)
    }

    /// Canonical reduction of a signed value into `[0, x0)`.
    pub fn reduce(&self, c: &BigInt) -> BigUint {
        bigint::mod_floor(c, &self.public.x0)
    }

    pub(crate) fn reduce_biguint(&self, c: BigUint) -> BigUint {
        c % &self.public.x0
    }

    /// Public encoding of a bit vector: the subset sum of `xp_i` for set
    /// bits (spec §4.2, `EncodePublic`). Level 0.
    pub fn encode_public<'k>(&'k self, bits: &[bool]) -> Encoding<'k> {
        assert_eq!(bits.len(), self.params.ell, "bit vector must have length ell");
        let mut acc = BigUint::from(0u32);
        for (i, &b) in bits.iter().enumerate() {
            if b {
                acc = self.reduce_biguint(acc + &self.public.xp[i]);
            }
        }
        Encoding::new(self, acc, 0)
    }

    /// `EncodeWithSK(m[0..N), nbBits, degree)`: a secret-key encoding of an
    /// explicit per-slot plaintext vector.
    pub fn encode_secret_array<'k>(
        &'k self,
        m: &[BigInt],
        nb_bits: u64,
        degree: u64,
        rng: &mut impl RandomSource,
    ) -> Encoding<'k> {
        let c = encode::encode_with_sk_array(
            &self.secret.g,
            &self.secret.crt_coeff,
            &self.secret.zinv,
            &self.public.x0,
            m,
            nb_bits,
            degree,
            rng,
        );
        Encoding::new(self, c, degree)
    }

    /// `EncodeWithSK(m: scalar, nbBits, degree)`: the scalar/broadcast
    /// overload. `m <= 1` embeds the constant `m` in every slot; `m > 1`
    /// gives every slot a fresh centered `m`-bit random (spec §4.2, §9).
    pub fn encode_secret_scalar<'k>(
        &'k self,
        m: u64,
        nb_bits: u64,
        degree: u64,
        rng: &mut impl RandomSource,
    ) -> Encoding<'k> {
        let c = encode::encode_with_sk_scalar(
            &self.secret.g,
            &self.secret.crt_coeff,
            &self.secret.zinv,
            &self.public.x0,
            m,
            nb_bits,
            degree,
            rng,
        );
        Encoding::new(self, c, degree)
    }

    /// A fresh secret-key encoding of a random plaintext vector at level
    /// `k`, noised at the scheme's standard `rho` bitsize.
    pub fn sample<'k>(&'k self, k: u64, rng: &mut impl RandomSource) -> Encoding<'k> {
        self.encode_secret_scalar(self.params.alpha, self.params.rho, k, rng)
    }

    /// Level-1 encoding of the all-ones plaintext vector.
    pub fn y<'k>(&'k self) -> Encoding<'k> {
        Encoding::new(self, self.public.y.clone(), 1)
    }

    /// Rerandomizes a level-1 encoding (spec §4.4). Panics if `c.degree()
    /// != 1`.
    pub fn rerandomize<'k>(&'k self, c: &Encoding<'k>, rng: &mut impl RandomSource) -> Encoding<'k> {
        assert_eq!(c.degree(), 1, "rerandomize requires a level-1 encoding");
        let c = rerandomize::rerandomize(
            &c.c,
            &self.public.varpi,
            &self.public.x0,
            self.params.delta,
            self.params.theta,
            rng,
        );
        Encoding::new(self, c, 1)
    }

    /// `zero_test(c, d)`: multiplies by the zero-tester `v`, lifting `c` to
    /// level κ first by repeated multiplication by `y` (spec §4.5). Signed:
    /// the magnitude of the centered result is what distinguishes zero from
    /// nonzero plaintexts.
    pub fn zero_test(&self, c: &BigUint, degree: u64) -> BigInt {
        zerotest::zero_test(c, degree, &self.public.v, &self.public.y, &self.public.x0, self.params.kappa)
    }

    /// `true` iff `zero_test(c.value(), c.degree())` is small, i.e. `c`
    /// encodes the zero plaintext.
    pub fn is_zero(&self, c: &Encoding<'_>) -> bool {
        let w = self.zero_test(&c.c, c.d);
        bigint::nb_bits_signed(&w) < self.nb_bits(&self.public.x0) - self.params.bound
    }

    pub(crate) fn decrypt(&self, c: &BigUint, degree: u64) -> Vec<BigInt> {
        decrypt::decrypt(c, degree, &self.secret, &self.public.x0)
    }

    pub(crate) fn noise(&self, c: &BigUint, degree: u64) -> u64 {
        decrypt::noise(c, degree, &self.secret, &self.public.x0)
    }
}
