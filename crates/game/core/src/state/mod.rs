//! Authoritative game state representation.
//!
//! This module owns the board grid and the per-game session record. Frontends
//! read these values but obtain new ones exclusively through the engine.
mod board;
mod session;

pub use board::{Board, EmptyCells, Position, can_merge, is_tile_value};
pub use session::{GameSession, Level, LevelUpTicket};
