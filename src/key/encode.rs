//! Secret- and public-key encoding primitives (spec §4.2).

use num_bigint_dig::{BigInt, BigUint};
use num_traits::Zero;

use crate::bigint::{centered_random, mod_floor};
use crate::random::RandomSource;

/// `EncodeWithSK(m[0..N), nbBits, degree)` for an explicit per-slot
/// plaintext array `m`.
pub(crate) fn encode_with_sk_array(
    g: &[BigUint],
    crt_coeff: &[BigUint],
    zinv: &BigUint,
    x0: &BigUint,
    m: &[BigInt],
    nb_bits: u64,
    degree: u64,
    rng: &mut impl RandomSource,
) -> BigUint {
    assert_eq!(m.len(), g.len());
    let mut res = BigInt::zero();
    for i in 0..g.len() {
        let noise = centered_random(rng, nb_bits);
        let term = &m[i] + BigInt::from(g[i].clone()) * noise;
        res += term * BigInt::from(crt_coeff[i].clone());
    }
    lift(mod_floor(&res, x0), zinv, x0, degree)
}

/// `EncodeWithSK(m: scalar, nbBits, degree)`. When `m <= 1` every slot
/// gets the constant `m`; otherwise every slot gets a fresh centered
/// `m`-bit random (spec §4.2, §9 — "this overloading is unusual" but is
/// load-bearing for the `varpi` pool, which calls this with `m = alpha`).
pub(crate) fn encode_with_sk_scalar(
    g: &[BigUint],
    crt_coeff: &[BigUint],
    zinv: &BigUint,
    x0: &BigUint,
    m: u64,
    nb_bits: u64,
    degree: u64,
    rng: &mut impl RandomSource,
) -> BigUint {
    let mut res = BigInt::zero();
    for i in 0..g.len() {
        let slot_val = if m <= 1 {
            BigInt::from(m)
        } else {
            centered_random(rng, m)
        };
        let noise = centered_random(rng, nb_bits);
        let term = slot_val + BigInt::from(g[i].clone()) * noise;
        res += term * BigInt::from(crt_coeff[i].clone());
    }
    lift(mod_floor(&res, x0), zinv, x0, degree)
}

fn lift(mut res: BigUint, zinv: &BigUint, x0: &BigUint, degree: u64) -> BigUint {
    for _ in 0..degree {
        res = (res * zinv) % x0;
    }
    res
}
