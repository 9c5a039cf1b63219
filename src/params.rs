//! Compile-time-style configuration for the graded encoding scheme.
//!
//! [`Instantiation`] mirrors the original reference implementation's
//! `#define INSTANTIATION` discriminant: each variant selects one of four
//! parameter sets trading setup cost for the number of supported CRT
//! slots. [`Params`] is the resolved, immutable bundle consumed by
//! [`crate::key::Key::new`].

/// Security/size discriminant, matching the four instantiations of the
/// original construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instantiation {
    Small,
    Medium,
    Large,
    Extra,
}

/// Fully resolved parameter set for a `Key`.
///
/// Field names follow the Greek-letter names used throughout the
/// specification rather than expanding them, since every doc comment and
/// test in this crate cross-references the same symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// N: number of CRT slots (secret primes `p_i`).
    pub n: usize,
    /// η: bitsize of each `p_i`.
    pub eta: u64,
    /// η_p: bitsize of the sub-primes multiplied together to build `p_i`.
    pub eta_p: u64,
    /// α: bitsize of plaintext slot moduli `g_i` and of `A`'s entries.
    pub alpha: u64,
    /// ρ: noise bitsize used for public (level-0/1) encodings.
    pub rho: u64,
    /// β (hBits): bitsize of the hidden randomizers in the zero-tester.
    pub h_bits: u64,
    /// κ: maximum multiplication depth.
    pub kappa: u64,
    /// θ: rerandomization subset-sum weight.
    pub theta: usize,
    /// δ: side of the rerandomization matrix, ≈⌈√N⌉.
    pub delta: usize,
    /// ℓ: number of public level-0 encodings.
    pub ell: usize,
    /// Number of top bits extracted as the session key.
    pub session_key_bits: u64,
    /// Zero-test threshold; must be ≥ `session_key_bits`.
    pub bound: u64,
}

/// Shared across all four instantiations (spec §6).
const KAPPA: u64 = 6;
const H_BITS: u64 = 80;
const THETA: usize = 15;
const SESSION_KEY_BITS: u64 = 160;
const BOUND: u64 = 160;
const ALPHA: u64 = 80;

/// Number of public level-0 encodings. The spec leaves this
/// implementation-defined ("a small constant ≥ 1"); the demos in the
/// original source use a handful of bits per user's secret value.
const ELL: usize = 4;

impl Instantiation {
    pub fn params(self) -> Params {
        let (n, delta, eta, eta_p, rho) = match self {
            Instantiation::Small => (540, 23, 1838, 460, 41),
            Instantiation::Medium => (2085, 45, 2043, 409, 56),
            Instantiation::Large => (8250, 90, 2261, 453, 72),
            Instantiation::Extra => (26115, 161, 2438, 407, 85),
        };
        Params {
            n,
            eta,
            eta_p,
            alpha: ALPHA,
            rho,
            h_bits: H_BITS,
            kappa: KAPPA,
            theta: THETA,
            delta,
            ell: ELL,
            session_key_bits: SESSION_KEY_BITS,
            bound: BOUND,
        }
    }
}
