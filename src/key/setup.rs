//! Trusted setup (spec §4.1). Parallel across the `N` CRT slots; `x0` and
//! `v` are produced via parallel reductions rather than a manual critical
//! section, following the pattern the pack's other embarrassingly-parallel
//! numeric code (sieving, multi-threaded FHE setup) uses `rayon` for.

use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};
use rayon::prelude::*;
use tracing::{debug, info_span};

use super::{Key, PublicState, SecretState};
use crate::bigint::{centered_random, mod_floor, mod_inverse, next_prime};
use crate::key::encode;
use crate::params::Params;
use crate::random::{child_seed, ChaChaSource, RandomSource, TAG_G, TAG_P, TAG_V, TAG_VARPI, TAG_XP};

pub(crate) fn setup(params: Params, rng: &mut impl RandomSource) -> Key {
    let _span = info_span!("key_setup", n = params.n, eta = params.eta).entered();

    // Per-slot seeds are drawn sequentially from the injected source so the
    // whole setup is deterministic given rng's seed, then each worker gets
    // its own independent stream derived from its seed (spec §5: "shard it
    // per worker with distinct seeds").
    let slot_seeds: Vec<u64> = (0..params.n).map(|_| rng.random_u64()).collect();

    debug!("generating p_i and x0");
    let niter = params.eta / params.eta_p;
    let p: Vec<BigUint> = slot_seeds
        .par_iter()
        .map(|&seed| {
            let mut local = ChaChaSource::from_seed(child_seed(seed, TAG_P));
            let mut acc = BigUint::one();
            for j in 0..niter {
                let bits = if j + 1 < niter {
                    params.eta_p
                } else {
                    params.eta - params.eta_p * (niter - 1)
                };
                let candidate = local.random_bits(bits);
                acc *= next_prime(&candidate);
            }
            acc
        })
        .collect();

    let x0 = p
        .par_iter()
        .cloned()
        .reduce(|| BigUint::one(), |a, b| a * b);

    debug!("generating crtCoeff_i");
    let crt_coeff: Vec<BigUint> = p
        .par_iter()
        .map(|pi| {
            let q = &x0 / pi;
            let inv = mod_inverse(&q, pi).expect("gcd(x0/p_i, p_i) = 1 by construction");
            q * inv
        })
        .collect();

    debug!("generating g_i");
    let g: Vec<BigUint> = slot_seeds
        .par_iter()
        .map(|&seed| {
            let mut local = ChaChaSource::from_seed(child_seed(seed, TAG_G));
            let candidate = local.random_bits(params.alpha);
            next_prime(&candidate)
        })
        .collect();

    debug!("generating z, zinv");
    let (z, zinv) = loop {
        let candidate = rng.random_below(&x0);
        if let Some(inv) = mod_inverse(&candidate, &x0) {
            break (candidate, inv);
        }
    };

    debug!("generating A and xp_i");
    let a: Vec<Vec<BigInt>> = (0..params.ell)
        .map(|_| (0..params.n).map(|_| centered_random(rng, params.alpha)).collect())
        .collect();

    let ell_seeds: Vec<u64> = (0..params.ell).map(|_| rng.random_u64()).collect();
    let xp: Vec<BigUint> = ell_seeds
        .par_iter()
        .zip(a.par_iter())
        .map(|(&seed, row)| {
            let mut local = ChaChaSource::from_seed(child_seed(seed, TAG_XP));
            encode::encode_with_sk_array(&g, &crt_coeff, &zinv, &x0, row, params.rho, 0, &mut local)
        })
        .collect();

    debug!("generating varpi (rerandomization pool)");
    let delta = params.delta;
    let varpi_seeds: Vec<u64> = (0..2 * delta).map(|_| rng.random_u64()).collect();
    let varpi: Vec<BigUint> = varpi_seeds
        .par_iter()
        .enumerate()
        .map(|(idx, &seed)| {
            let mut local = ChaChaSource::from_seed(child_seed(seed, TAG_VARPI));
            if idx < delta {
                encode::encode_with_sk_scalar(&g, &crt_coeff, &zinv, &x0, 0, params.rho, 0, &mut local)
            } else {
                encode::encode_with_sk_scalar(&g, &crt_coeff, &zinv, &x0, params.alpha, params.rho, 1, &mut local)
            }
        })
        .collect();

    debug!("generating y");
    let y = encode::encode_with_sk_scalar(&g, &crt_coeff, &zinv, &x0, 1, params.rho, 1, rng);

    debug!("generating zero-tester v");
    let zkappa = {
        let mut acc = BigUint::one();
        for _ in 0..params.kappa {
            acc = (acc * &z) % &x0;
        }
        acc
    };
    let v = slot_seeds
        .par_iter()
        .zip(p.par_iter())
        .zip(g.par_iter())
        .map(|((&seed, pi), gi)| {
            let mut local = ChaChaSource::from_seed(child_seed(seed, TAG_V));
            let inv = mod_inverse(gi, pi).expect("g_i is coprime to p_i by construction");
            let h = centered_random(&mut local, params.h_bits);
            let reduced = mod_floor(&(BigInt::from(inv) * BigInt::from(zkappa.clone())), pi);
            let qi = &x0 / pi;
            BigInt::from(reduced) * h * BigInt::from(qi)
        })
        .reduce(BigInt::zero, |a, b| a + b);
    let v = mod_floor(&v, &x0);

    Key {
        params,
        secret: SecretState { p, crt_coeff, g, z, zinv, zkappa },
        public: PublicState { x0, xp, y, varpi, v, a },
    }
}
