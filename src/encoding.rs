//! The `Encoding` value type and its arithmetic (spec §3, §4.3).

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint_dig::{BigInt, BigUint};

use crate::key::Key;

/// An element of the graded encoding scheme: a big integer in `[0, x0)`
/// tagged with a degree, plus a borrow of the key whose CRT structure
/// governs reduction.
///
/// `Encoding` is value-like: cheap to clone (a `BigUint` clone plus a
/// degree and a reference copy), freely copyable, and never outlives the
/// `Key` it borrows from — the borrow checker enforces invariant 1 of §3
/// (the key must still exist for any reduction to be meaningful) at
/// compile time rather than at runtime.
#[derive(Clone)]
pub struct Encoding<'k> {
    pub(crate) c: BigUint,
    pub(crate) d: u64,
    pub(crate) key: &'k Key,
}

impl<'k> Encoding<'k> {
    pub(crate) fn new(key: &'k Key, c: BigUint, d: u64) -> Self {
        debug_assert!(c < *key.x0(), "encoding value must be canonical mod x0");
        Encoding { c, d, key }
    }

    /// Degree (level) of this encoding.
    pub fn degree(&self) -> u64 {
        self.d
    }

    /// Canonical value in `[0, x0)`.
    pub fn value(&self) -> &BigUint {
        &self.c
    }

    /// Top `sessionKeyBits` bits of `zero_test(c, d)`. Requires `d == κ`
    /// (spec §4.5, invariant 4).
    pub fn derive_session_key(&self) -> BigInt {
        assert_eq!(
            self.d, self.key.params().kappa,
            "derive_session_key requires a level-kappa encoding"
        );
        let w = self.key.zero_test(&self.c, self.d);
        let shift = self.key.nb_bits(self.key.x0()) - self.key.params().session_key_bits;
        w >> shift as usize
    }

    /// Diagnostic noise measurement, delegating to the secret key.
    pub fn noise(&self) -> u64 {
        self.key.noise(&self.c, self.d)
    }

    /// Decrypts this encoding into its N-slot plaintext vector.
    pub fn decrypt(&self) -> Vec<BigInt> {
        self.key.decrypt(&self.c, self.d)
    }

    pub fn add(&self, other: &Encoding<'k>) -> Encoding<'k> {
        assert_eq!(self.d, other.d, "addition requires equal degree");
        let c = self.key.reduce_biguint(&self.c + &other.c);
        Encoding::new(self.key, c, self.d)
    }

    pub fn sub(&self, other: &Encoding<'k>) -> Encoding<'k> {
        assert_eq!(self.d, other.d, "subtraction requires equal degree");
        let c = self.key.reduce(&(BigInt::from(self.c.clone()) - BigInt::from(other.c.clone())));
        Encoding::new(self.key, c, self.d)
    }

    pub fn mul(&self, other: &Encoding<'k>) -> Encoding<'k> {
        let d = if self.d + other.d > 0 { self.d + other.d } else { 0 };
        let c = self.key.reduce_biguint(&self.c * &other.c);
        Encoding::new(self.key, c, d)
    }

    pub fn add_scalar(&self, m: &BigInt) -> Encoding<'k> {
        let c = self.key.reduce(&(BigInt::from(self.c.clone()) + m));
        Encoding::new(self.key, c, self.d)
    }

    pub fn sub_scalar(&self, m: &BigInt) -> Encoding<'k> {
        let c = self.key.reduce(&(BigInt::from(self.c.clone()) - m));
        Encoding::new(self.key, c, self.d)
    }

    pub fn mul_scalar(&self, m: &BigInt) -> Encoding<'k> {
        let c = self.key.reduce(&(BigInt::from(self.c.clone()) * m));
        Encoding::new(self.key, c, self.d)
    }
}

impl<'k> fmt::Debug for Encoding<'k> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoding(degree={})", self.d)
    }
}

impl<'k> Encoding<'k> {
    /// Human-readable summary, mirroring the original `operator<<`: just
    /// the degree, or (`verbose`) also the noise and decrypted slots.
    pub fn describe(&self, verbose: bool) -> String {
        if !verbose {
            return format!("Encoding(degree={})", self.d);
        }
        format!(
            "Encoding(degree={}, noise={}, m={:?})",
            self.d,
            self.noise(),
            self.decrypt()
        )
    }
}

impl<'k> fmt::Display for Encoding<'k> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(false))
    }
}

macro_rules! forward_binop {
    ($trait_:ident, $method:ident, $inherent:ident) => {
        impl<'k> $trait_<&Encoding<'k>> for &Encoding<'k> {
            type Output = Encoding<'k>;
            fn $method(self, rhs: &Encoding<'k>) -> Encoding<'k> {
                self.$inherent(rhs)
            }
        }
        impl<'k> $trait_<Encoding<'k>> for Encoding<'k> {
            type Output = Encoding<'k>;
            fn $method(self, rhs: Encoding<'k>) -> Encoding<'k> {
                self.$inherent(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);

impl<'k> Add<&BigInt> for &Encoding<'k> {
    type Output = Encoding<'k>;
    fn add(self, rhs: &BigInt) -> Encoding<'k> {
        self.add_scalar(rhs)
    }
}

impl<'k> Mul<&BigInt> for &Encoding<'k> {
    type Output = Encoding<'k>;
    fn mul(self, rhs: &BigInt) -> Encoding<'k> {
        self.mul_scalar(rhs)
    }
}
