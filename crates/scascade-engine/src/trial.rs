//! Bernoulli trials and random stream derivation.
//!
//! Every (epidemic index, sample) pair draws from its own `ChaCha8Rng`,
//! seeded from the batch master seed via [`derive_stream_seed`]. A
//! stream's draws therefore do not depend on which worker runs it or on
//! how many workers exist.
//!
//! A trial succeeds when `U <= p` with `U` uniform on the closed
//! interval `[0, 1]`: 53 random bits scaled by `1 / (2^53 - 1)`, so both
//! endpoints are reachable and `p = 1` always succeeds.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used for every cascade stream.
pub type CascadeRng = ChaCha8Rng;

/// Stream index reserved for random seed selection.
///
/// Epidemic streams use `index < usize::MAX`, so this never collides.
pub const SEED_SELECTION_STREAM: u64 = u64::MAX;

const UNIT_SCALE: f64 = 1.0 / ((1u64 << 53) - 1) as f64;

/// Draw a uniform variate on `[0, 1]` (both ends inclusive).
#[inline]
pub fn closed_unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// One Bernoulli(`p`) trial: `true` iff `U <= p`.
#[inline]
pub fn trial<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    closed_unit(rng) <= p
}

/// SplitMix64 finaliser.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derive the seed of stream `(index, sample)` from the master seed.
pub fn derive_stream_seed(master: u64, index: u64, sample: u64) -> u64 {
    mix(mix(mix(master) ^ index) ^ sample)
}

/// Generator for stream `(index, sample)`.
pub fn stream_rng(master: u64, index: u64, sample: u64) -> CascadeRng {
    CascadeRng::seed_from_u64(derive_stream_seed(master, index, sample))
}

/// Master seed from the wall clock, for runs without an explicit seed.
pub fn wall_clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    mix(nanos as u64 ^ (nanos >> 64) as u64)
}
