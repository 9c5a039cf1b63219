//! Zero-test and extraction (spec §4.5).

use num_bigint_dig::{BigInt, BigUint};

use crate::bigint::mod_centered;

/// `w = (c*v) mod_centered x0`, then lifted from `degree` to `kappa` by
/// repeated multiplication by `y` (a level-1 encoding of 1).
pub(crate) fn zero_test(c: &BigUint, degree: u64, v: &BigUint, y: &BigUint, x0: &BigUint, kappa: u64) -> BigInt {
    assert!(degree <= kappa, "zero_test is only defined up to level kappa");
    let mut w = mod_centered(&(BigInt::from(c.clone()) * BigInt::from(v.clone())), x0);
    for _ in 0..(kappa - degree) {
        w = mod_centered(&(w * BigInt::from(y.clone())), x0);
    }
    w
}
