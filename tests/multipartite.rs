//! End-to-end multipartite non-interactive key exchange with `kappa + 1`
//! users, mirroring the scheme's reference usage: each user publishes a
//! level-0 secret encoding and a rerandomized level-1 public value, then
//! every user multiplies their own secret by everyone else's public value
//! to land on the same level-kappa product and the same session key.

use cltmap::{ChaChaSource, Instantiation, Key, RandomSource};

fn random_bits(rng: &mut ChaChaSource, ell: usize) -> Vec<bool> {
    (0..ell).map(|_| rng.random_bits(1) == num_bigint_dig::BigUint::from(1u32)).collect()
}

fn with_test_subscriber() -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::{fmt, EnvFilter};

    let subscriber = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[test]
fn kappa_plus_one_users_agree_on_a_session_key() {
    let _guard = with_test_subscriber();
    let mut rng = ChaChaSource::from_seed(1);
    let key = Key::new(&mut rng, Instantiation::Small);
    let kappa = key.params().kappa as usize;
    let ell = key.params().ell;
    let n_users = kappa + 1;

    let secrets: Vec<_> = (0..n_users)
        .map(|_| key.encode_public(&random_bits(&mut rng, ell)))
        .collect();

    let y = key.y();
    let publics: Vec<_> = secrets
        .iter()
        .map(|l0| key.rerandomize(&(l0 * &y), &mut rng))
        .collect();

    let mut session_keys = Vec::with_capacity(n_users);
    for j in 0..n_users {
        let mut acc = secrets[j].clone();
        for i in 0..n_users {
            if i != j {
                acc = &acc * &publics[i];
            }
        }
        assert_eq!(acc.degree(), kappa as u64);
        session_keys.push(acc.derive_session_key());
    }

    for pair in session_keys.windows(2) {
        assert_eq!(pair[0], pair[1], "all users must derive the same session key");
    }
}

#[test]
fn products_are_never_zero_encodings() {
    let mut rng = ChaChaSource::from_seed(2);
    let key = Key::new(&mut rng, Instantiation::Small);
    let kappa = key.params().kappa as usize;
    let ell = key.params().ell;
    let n_users = kappa + 1;

    let secrets: Vec<_> = (0..n_users)
        .map(|_| key.encode_public(&random_bits(&mut rng, ell)))
        .collect();
    let y = key.y();
    let publics: Vec<_> = secrets
        .iter()
        .map(|l0| key.rerandomize(&(l0 * &y), &mut rng))
        .collect();

    let mut acc = secrets[0].clone();
    for i in 1..n_users {
        acc = &acc * &publics[i];
    }
    assert!(!key.is_zero(&acc));
}
