//! Tile spawning driven by the injected [`RngOracle`](crate::env::RngOracle).

use crate::env::{GameEnv, SeedContext, compute_seed};
use crate::state::{Board, Position};

/// Identifies one spawn for seed derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnRoll {
    pub game_seed: u64,
    pub nonce: u64,
    pub spawn_index: u32,
}

impl SpawnRoll {
    pub const fn new(game_seed: u64, nonce: u64, spawn_index: u32) -> Self {
        Self {
            game_seed,
            nonce,
            spawn_index,
        }
    }

    /// The roll for the next tile placed in the same step.
    pub const fn next_spawn(self) -> Self {
        Self {
            spawn_index: self.spawn_index + 1,
            ..self
        }
    }

    fn seed(&self, context: SeedContext) -> u64 {
        compute_seed(self.game_seed, self.nonce, self.spawn_index, context)
    }
}

/// A tile placed on the board after an accepted move or at level start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnedTile {
    pub position: Position,
    pub value: u32,
}

impl Board {
    /// Places a 2 or 4 in a uniformly chosen empty cell, in place.
    ///
    /// Returns `None` and leaves the board untouched when it is full.
    pub fn insert_random_tile(&mut self, env: GameEnv<'_>, roll: SpawnRoll) -> Option<SpawnedTile> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let rng = env.rng();
        let position = empty[rng.pick_index(roll.seed(SeedContext::SpawnCell), empty.len())];

        let two_threshold = 100 - env.config().four_spawn_percent.min(100);
        let value = if rng.roll_d100(roll.seed(SeedContext::SpawnValue)) <= two_threshold {
            2
        } else {
            4
        };

        self.set(position, value);
        Some(SpawnedTile { position, value })
    }
}

/// Pure variant of [`Board::insert_random_tile`]: returns a new board.
pub fn add_random_tile(
    board: &Board,
    env: GameEnv<'_>,
    roll: SpawnRoll,
) -> (Board, Option<SpawnedTile>) {
    let mut next = board.clone();
    let spawned = next.insert_random_tile(env, roll);
    (next, spawned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{PcgRng, RngOracle};

    /// Oracle that always yields the same value.
    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    const ROLL: SpawnRoll = SpawnRoll::new(1, 0, 0);

    #[test]
    fn full_board_is_left_unchanged() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let full = Board::from_rows([[2u32, 4], [8, 16]]).unwrap();

        let (next, spawned) = add_random_tile(&full, env, ROLL);
        assert_eq!(next, full);
        assert!(spawned.is_none());
    }

    #[test]
    fn low_roll_spawns_two_in_first_empty_cell() {
        let config = GameConfig::default();
        let rng = FixedRng(0);
        let env = GameEnv::new(&config, &rng);
        let board = Board::from_rows([[2u32, 0], [0, 0]]).unwrap();

        let (next, spawned) = add_random_tile(&board, env, ROLL);
        let spawned = spawned.unwrap();
        assert_eq!(spawned.position, Position::new(0, 1));
        assert_eq!(spawned.value, 2);
        assert_eq!(next.get(Position::new(0, 1)), 2);
        // The input is not mutated.
        assert_eq!(board.get(Position::new(0, 1)), 0);
    }

    #[test]
    fn high_roll_spawns_four() {
        let config = GameConfig::default();
        // 95 % 100 + 1 = 96 > 90, and 95 % 3 = 2 picks the last empty cell.
        let rng = FixedRng(95);
        let env = GameEnv::new(&config, &rng);
        let mut board = Board::from_rows([[2u32, 0], [0, 0]]).unwrap();

        let spawned = board.insert_random_tile(env, ROLL).unwrap();
        assert_eq!(spawned.position, Position::new(1, 1));
        assert_eq!(spawned.value, 4);
        assert_eq!(board.get(Position::new(1, 1)), 4);
    }

    #[test]
    fn zero_four_percent_always_spawns_two() {
        let config = GameConfig::default().with_four_spawn_percent(0);
        let rng = FixedRng(99);
        let env = GameEnv::new(&config, &rng);
        let board = Board::empty(3);

        let (_, spawned) = add_random_tile(&board, env, ROLL);
        assert_eq!(spawned.unwrap().value, 2);
    }

    #[test]
    fn spawn_distribution_is_mostly_twos() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let board = Board::empty(4);

        let fours = (0..2_000)
            .filter_map(|nonce| add_random_tile(&board, env, SpawnRoll::new(9, nonce, 0)).1)
            .filter(|tile| tile.value == 4)
            .count();
        assert!((100..=300).contains(&fours), "got {fours} fours");
    }

    #[test]
    fn same_roll_same_tile() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let board = Board::empty(4);

        let first = add_random_tile(&board, env, SpawnRoll::new(5, 3, 0));
        let second = add_random_tile(&board, env, SpawnRoll::new(5, 3, 0));
        assert_eq!(first, second);
    }
}
