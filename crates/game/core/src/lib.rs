//! Deterministic 2048 rules shared by every frontend.
//!
//! `twenty48-core` defines the canonical board transforms (slide, merge,
//! spawn, score) and the session lifecycle around them (levels, win/loss,
//! high score, delayed level-up). All APIs are pure: randomness enters only
//! through the [`env::RngOracle`] carried by a [`GameEnv`], and every
//! transition returns a new value instead of mutating its input.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, move_down, move_left, move_right, move_up, slide};
pub use config::GameConfig;
pub use engine::{
    BoardStatus, MoveOutcome, SessionEvents, SessionTransition, SpawnRoll, SpawnedTile,
    add_random_tile, apply_move, apply_session, calculate_points,
};
pub use env::{GameEnv, PcgRng, RngOracle};
pub use error::{BoardError, ErrorSeverity, GameError};
pub use state::{Board, GameSession, Level, LevelUpTicket, Position};
