//! A CLT-style graded encoding scheme (a multilinear map over the
//! integers), exposing the primitives a multipartite non-interactive key
//! exchange is built from: trusted setup, public/secret encodings,
//! rerandomization, and zero-testing.
//!
//! ```no_run
//! use cltmap::{ChaChaSource, Instantiation, Key, RandomSource};
//!
//! let mut rng = ChaChaSource::from_entropy();
//! let key = Key::new(&mut rng, Instantiation::Small);
//!
//! let a = key.y();
//! let b = key.rerandomize(&a, &mut rng);
//! assert!(!key.is_zero(&b));
//! ```

mod bigint;
mod encoding;
mod key;
mod params;
mod random;

pub use encoding::Encoding;
pub use key::Key;
pub use num_bigint_dig::{BigInt, BigUint};
pub use params::{Instantiation, Params};
pub use random::{ChaChaSource, RandomSource};
