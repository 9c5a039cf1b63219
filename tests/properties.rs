//! Scheme invariants, exercised against the `Small` instantiation with a
//! fixed seed so failures are reproducible.

use cltmap::{BigInt, ChaChaSource, Instantiation, Key};

fn small_key(seed: u64) -> (Key, ChaChaSource) {
    let mut rng = ChaChaSource::from_seed(seed);
    let key = Key::new(&mut rng, Instantiation::Small);
    (key, rng)
}

#[test]
fn y_is_a_nonzero_level_one_encoding() {
    let (key, _rng) = small_key(10);
    let y = key.y();
    assert_eq!(y.degree(), 1);
    assert!(!key.is_zero(&y));
}

#[test]
fn zero_message_encoding_is_detected_as_zero_at_level_kappa() {
    let (key, mut rng) = small_key(11);
    let kappa = key.params().kappa;
    let zero_vec = vec![BigInt::from(0); key.params().n];
    let zero = key.encode_secret_array(&zero_vec, key.params().rho, 0, &mut rng);
    let mut lifted = zero;
    let y = key.y();
    for _ in 0..kappa {
        lifted = &lifted * &y;
    }
    assert_eq!(lifted.degree(), kappa);
    assert!(key.is_zero(&lifted));
}

#[test]
fn fresh_sample_is_not_zero() {
    let (key, mut rng) = small_key(12);
    for k in 0..=key.params().kappa {
        let sample = key.sample(k, &mut rng);
        assert!(!key.is_zero(&sample), "a fresh nonzero sample must not test as zero");
    }
}

#[test]
fn noise_stays_within_the_scheme_bound() {
    let (key, mut rng) = small_key(13);
    let sample = key.sample(1, &mut rng);
    // Public/secret encodings are noised at rho bits per slot; a handful of
    // doublings in bit length is expected headroom, not a tight bound.
    assert!(sample.noise() <= key.params().rho + 8);
}

#[test]
fn encode_public_is_additively_homomorphic_over_bit_vectors() {
    let (key, _rng) = small_key(14);
    let ell = key.params().ell;

    let mut bits_a = vec![false; ell];
    let mut bits_b = vec![false; ell];
    bits_a[0] = true;
    bits_b[1] = true;
    let mut bits_both = vec![false; ell];
    bits_both[0] = true;
    bits_both[1] = true;

    let a = key.encode_public(&bits_a);
    let b = key.encode_public(&bits_b);
    let both = key.encode_public(&bits_both);

    let sum = &a + &b;
    assert_eq!(sum.value(), both.value());
}

#[test]
fn rerandomize_preserves_plaintext_across_many_draws() {
    let (key, mut rng) = small_key(15);
    let y = key.y();
    for _ in 0..100 {
        let sample = key.sample(0, &mut rng);
        let lifted = &sample * &y;
        let rerandomized = key.rerandomize(&lifted, &mut rng);
        assert_eq!(rerandomized.degree(), 1);

        let plain_before: Vec<BigInt> = sample.decrypt();
        let plain_after: Vec<BigInt> = rerandomized.decrypt();
        assert_eq!(plain_before, plain_after, "rerandomization must not change the plaintext");
    }
}

#[test]
fn deterministic_given_the_same_seed() {
    let (key_a, _) = small_key(99);
    let (key_b, _) = small_key(99);
    assert_eq!(key_a.x0(), key_b.x0());
    assert_eq!(key_a.y().value(), key_b.y().value());
}
