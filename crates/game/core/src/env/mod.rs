//! Injected collaborators for non-deterministic engine steps.
//!
//! The engine never reaches for an ambient random generator. Every operation
//! that spawns tiles receives a [`GameEnv`] bundling the rules configuration
//! and an [`RngOracle`], so tests can swap in a scripted source and replays
//! stay bit-for-bit identical for a given seed.
mod rng;

pub use rng::{PcgRng, RngOracle, SeedContext, compute_seed};

use crate::config::GameConfig;

/// Aggregates the configuration and random source used by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
