//! Small helpers layered on top of `num-bigint-dig`'s `BigUint`/`BigInt`,
//! matching the handful of primitives the original GMP-based source leans
//! on: `mod`, `modNear`, `quotNear`, `nbBits`, and `nextprime`.

use num_bigint_dig::{BigInt, BigUint, ModInverse};
use num_bigint_dig::prime::probably_prime;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::random::RandomSource;

/// Number of Miller-Rabin rounds for `next_prime`'s primality test. GMP's
/// `mpz_nextprime` (the function this mirrors) performs a comparable mix of
/// trial division and Miller-Rabin/BPSW rounds; 25 rounds is the
/// conventional choice for primes this large (RustCrypto's `rsa` crate,
/// also built on `num-bigint-dig`, uses the same figure).
const MILLER_RABIN_ROUNDS: usize = 25;

/// Canonical non-negative representative of `a mod m`.
pub fn mod_floor(a: &BigInt, m: &BigUint) -> BigUint {
    let m_signed = BigInt::from(m.clone());
    let r = ((a % &m_signed) + &m_signed) % &m_signed;
    r.to_biguint()
        .expect("mod_floor result is non-negative by construction")
}

/// Representative of `a mod m` in `(-m/2, m/2]`, matching the original
/// `modNear`.
pub fn mod_centered(a: &BigInt, m: &BigUint) -> BigInt {
    let r = BigInt::from(mod_floor(a, m));
    let half = BigInt::from(m.clone()) >> 1u32;
    if r > half {
        r - BigInt::from(m.clone())
    } else {
        r
    }
}

/// Nearest integer to `a / b`, i.e. `(a - modNear(a, b)) / b`.
pub fn quot_near(a: &BigInt, b: &BigUint) -> BigInt {
    let centered = mod_centered(a, b);
    (a - centered) / BigInt::from(b.clone())
}

/// Bit length of `v` (`0` has bit length `0`).
pub fn nb_bits(v: &BigUint) -> u64 {
    v.bits() as u64
}

/// Bit length of a (possibly negative) `BigInt`, by magnitude.
pub fn nb_bits_signed(v: &BigInt) -> u64 {
    nb_bits(&v.abs().to_biguint().unwrap_or_else(BigUint::zero))
}

/// Modular inverse of `a` mod `m`, canonicalized into `[0, m)`. Returns
/// `None` iff `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a_int = BigInt::from(a.clone());
    let m_int = BigInt::from(m.clone());
    a_int
        .mod_inverse(m_int)
        .map(|inv| mod_floor(&inv, m))
}

/// Smallest probable prime strictly greater than `start`, mirroring GMP's
/// `mpz_nextprime` (which always advances past `start` even when `start`
/// is itself prime). `num-bigint-dig`'s `prime` feature only gives us a
/// primality test (`probably_prime`), not a "next prime from here" walk, so
/// this crate provides the walk itself, the same way consumers of
/// `num-bigint-dig` (e.g. RSA key generation) build prime search on top of
/// `probably_prime`.
pub fn next_prime(start: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if start < &two {
        return two;
    }
    let mut candidate = start + BigUint::one();
    if candidate.is_even() {
        candidate += BigUint::one();
    }
    loop {
        if probably_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
        candidate += &two;
    }
}

/// Centered random of `bits` bits: uniform in `[0, 2^bits)` shifted down by
/// `2^(bits-1)`, except the degenerate `bits <= 1` case which returns a
/// uniform bit, matching the original `generateRandom`.
pub fn centered_random(rng: &mut impl RandomSource, bits: u64) -> BigInt {
    if bits <= 1 {
        return BigInt::from(rng.random_bits(1));
    }
    let u = BigInt::from(rng.random_bits(bits));
    u - (BigInt::one() << (bits - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ChaChaSource;

    #[test]
    fn mod_centered_boundaries() {
        let m = BigUint::from(10u32);
        assert_eq!(mod_centered(&BigInt::from(5), &m), BigInt::from(5));
        assert_eq!(mod_centered(&BigInt::from(6), &m), BigInt::from(-4));
        assert_eq!(mod_centered(&BigInt::from(-1), &m), BigInt::from(-1));
    }

    #[test]
    fn next_prime_basic() {
        assert_eq!(next_prime(&BigUint::from(1u32)), BigUint::from(2u32));
        assert_eq!(next_prime(&BigUint::from(8u32)), BigUint::from(11u32));
        // Strictly greater than the input, even when the input is itself
        // prime, matching mpz_nextprime.
        assert_eq!(next_prime(&BigUint::from(13u32)), BigUint::from(17u32));
    }

    #[test]
    fn mod_inverse_roundtrip() {
        let m = next_prime(&BigUint::from(10_000u32));
        let a = BigUint::from(1234u32);
        let inv = mod_inverse(&a, &m).expect("invertible");
        let check = (a * inv) % &m;
        assert_eq!(check, BigUint::one());
    }

    #[test]
    fn centered_random_within_range() {
        let mut rng = ChaChaSource::from_seed(42);
        for _ in 0..100 {
            let v = centered_random(&mut rng, 8);
            assert!(v >= BigInt::from(-128) && v < BigInt::from(128));
        }
    }
}
