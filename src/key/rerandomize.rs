//! Rerandomization (spec §4.4). Uses explicit rejection sampling for
//! distinct indices, the "prefer explicit rejection sampling" alternative
//! the spec's Open Questions call out over the original's index-decrement
//! back-off.

use std::collections::HashSet;

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::random::RandomSource;

pub(crate) fn rerandomize(
    c: &BigUint,
    varpi: &[BigUint],
    x0: &BigUint,
    delta: usize,
    theta: usize,
    rng: &mut impl RandomSource,
) -> BigUint {
    let pool_size = (delta * delta) as u64;
    let bound = BigUint::from(pool_size);

    let mut seen = HashSet::with_capacity(theta);
    while seen.len() < theta {
        let idx = rng
            .random_below(&bound)
            .to_u64()
            .expect("index fits in u64: delta*delta is small");
        seen.insert(idx as usize);
    }

    let mut acc = c.clone();
    for idx in seen {
        let row = idx % delta;
        let col = idx / delta;
        acc = (acc + &varpi[row] * &varpi[delta + col]) % x0;
    }
    acc
}
