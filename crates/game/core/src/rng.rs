//! Injectable randomness for AI decisions.
//!
//! Randomness is a pure function of a seed: the same seed always yields the
//! same value, so a game replayed with the same `game_seed` makes the same
//! choices.

/// Deterministic source of random values.
pub trait RngOracle: Send + Sync {
    /// Random u32 derived from `seed`.
    fn next_u32(&self, seed: u64) -> u32;

    /// Index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32(seed) as usize % len)
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the game seed with where a decision happens into a single seed.
///
/// * `nonce` - the deciding actor's decision counter
/// * `actor` - index of the deciding actor
/// * `context` - distinguishes independent rolls within one decision
pub fn compute_seed(game_seed: u64, nonce: u64, actor: usize, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // splitmix-style finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Seed-independent oracle that always returns the same value.
///
/// Useful in tests that need to pin an AI choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}
