//! RNG seed derivation for reproducible sessions.
//!
//! A session carries one base seed; every round derives its own seed from
//! it so replaying a session yields the same sequence of rounds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the seed for round `round_no` (1-based) of a session.
pub fn derive_round_seed(session_seed: u64, round_no: u32) -> u64 {
    // SplitMix64 finalizer over the combined input.
    let mut z = session_seed.wrapping_add((round_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// RNG used to generate round `round_no` of a session.
pub fn round_rng(session_seed: u64, round_no: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_round_seed(session_seed, round_no))
}
