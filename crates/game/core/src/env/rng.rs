//! RNG oracle for deterministic random number generation.
//!
//! Tile spawns are the only random events in the game. Every roll is derived
//! from a seed computed out of the session seed, the move nonce, and a
//! context tag, so the same inputs always spawn the same tile.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Pick an index in `0..len`. `len` must be non-zero.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty set");
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Distinguishes independent rolls made for the same spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SeedContext {
    /// Which empty cell receives the tile.
    SpawnCell = 0,
    /// Whether the tile is a 2 or a 4.
    SpawnValue = 1,
}

/// Compute deterministic seed from session components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set when the session starts
/// * `nonce` - Accepted-move counter of the session
/// * `spawn_index` - Which spawn within the step (level starts place two tiles)
/// * `context` - Which roll of that spawn
pub fn compute_seed(game_seed: u64, nonce: u64, spawn_index: u32, context: SeedContext) -> u64 {
    // SplitMix64 / FxHash style multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (spawn_index as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u32 as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
