//! Move application, scoring, and session transitions.
//!
//! [`apply_move`] is the single orchestration entry point for a board: slide,
//! reject no-ops, spawn, score. [`apply_session`] layers level progression,
//! win/loss detection, and the high score on top of it without mutating the
//! input session.

mod session;
mod spawn;
mod status;

pub use session::{SessionEvents, SessionTransition, apply_session};
pub use spawn::{SpawnRoll, SpawnedTile, add_random_tile};
pub use status::BoardStatus;

use crate::action::{Direction, slide};
use crate::env::GameEnv;
use crate::state::Board;

/// Result of pushing a board in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Board after the slide and, when accepted, the spawn.
    pub board: Board,
    /// False when the slide left every cell where it was.
    pub changed: bool,
    /// Score awarded for this move, see [`calculate_points`].
    pub points: u64,
    /// Tile placed after an accepted move.
    pub spawned: Option<SpawnedTile>,
    /// Conditions of the resulting board.
    pub status: BoardStatus,
}

/// Sum of every per-cell increase from `old` to `new`.
///
/// A merge of two `v` tiles grows a cell from `v` to `2v` and contributes `v`.
/// Cells that were empty and received a sliding tile grow as well, so a slide
/// into open space scores the value of the tile that landed there.
///
/// # Panics
///
/// Panics if the boards differ in size.
pub fn calculate_points(old: &Board, new: &Board) -> u64 {
    assert_eq!(
        old.size(),
        new.size(),
        "cannot score boards of different sizes"
    );
    old.cells()
        .iter()
        .zip(new.cells())
        .filter(|(before, after)| after > before)
        .map(|(before, after)| u64::from(after - before))
        .sum()
}

/// Slides `board` toward `direction` and spawns a tile if anything moved.
///
/// A slide that changes nothing is rejected outright: the input board is
/// returned as-is with no spawn and no points.
pub fn apply_move(
    board: &Board,
    direction: Direction,
    env: GameEnv<'_>,
    roll: SpawnRoll,
) -> MoveOutcome {
    let moved = slide(board, direction);

    if moved == *board {
        return MoveOutcome {
            board: board.clone(),
            changed: false,
            points: 0,
            spawned: None,
            status: BoardStatus::evaluate(board, env.config()),
        };
    }

    let points = calculate_points(board, &moved);
    let (next, spawned) = add_random_tile(&moved, env, roll);
    let status = BoardStatus::evaluate(&next, env.config());

    tracing::debug!(
        %direction,
        points,
        ?spawned,
        board = %next,
        "move accepted"
    );

    MoveOutcome {
        board: next,
        changed: true,
        points,
        spawned,
        status,
    }
}
