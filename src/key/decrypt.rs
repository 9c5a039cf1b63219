//! Decryption and noise measurement with the secret key (spec §4.6).

use itertools::izip;
use num_bigint_dig::{BigInt, BigUint};

use super::SecretState;
use crate::bigint::{mod_centered, nb_bits_signed, quot_near};

/// Lifts `c` to level 0 by repeated multiplication by `z`, then recovers
/// each slot's plaintext as `modNear(modNear(value, p_i), g_i)`.
pub(crate) fn decrypt(c: &BigUint, degree: u64, secret: &SecretState, x0: &BigUint) -> Vec<BigInt> {
    let mut value = BigInt::from(c.clone());
    for _ in 0..degree {
        value = mod_centered(&(value * BigInt::from(secret.z.clone())), x0);
    }
    izip!(secret.p.iter(), secret.g.iter())
        .map(|(pi, gi)| {
            let inner = mod_centered(&value, pi);
            mod_centered(&inner, gi)
        })
        .collect()
}

/// Diagnostic measurement of the largest per-slot noise term, in bits.
pub(crate) fn noise(c: &BigUint, degree: u64, secret: &SecretState, _x0: &BigUint) -> u64 {
    let mut value = BigInt::from(c.clone());
    for _ in 0..degree {
        value *= BigInt::from(secret.z.clone());
    }
    izip!(secret.p.iter(), secret.g.iter())
        .map(|(pi, gi)| {
            let reduced = mod_centered(&value, pi);
            let noise = quot_near(&reduced, gi);
            nb_bits_signed(&noise)
        })
        .max()
        .unwrap_or(0)
}
