use bitflags::bitflags;

use crate::config::GameConfig;
use crate::state::Board;

bitflags! {
    /// Conditions of a board the caller reacts to after a move.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BoardStatus: u8 {
        /// No direction changes the board anymore.
        const GAME_OVER     = 1 << 0;
        /// The level-up tile is on the board.
        const LEVEL_UP_TILE = 1 << 1;
        /// The win tile is on the board.
        const WIN_TILE      = 1 << 2;
    }
}

impl BoardStatus {
    pub fn evaluate(board: &Board, config: &GameConfig) -> Self {
        let mut status = Self::empty();
        if !board.has_available_moves() {
            status |= Self::GAME_OVER;
        }
        if board.has_reached_tile(config.level_up_tile) {
            status |= Self::LEVEL_UP_TILE;
        }
        if board.has_reached_tile(config.win_tile) {
            status |= Self::WIN_TILE;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_has_no_flags() {
        let board = Board::from_rows([[2u32, 0], [0, 0]]).unwrap();
        assert!(BoardStatus::evaluate(&board, &GameConfig::default()).is_empty());
    }

    #[test]
    fn flags_combine() {
        let board = Board::from_rows([[64u32, 2048], [2, 4]]).unwrap();
        let status = BoardStatus::evaluate(&board, &GameConfig::default());
        assert_eq!(
            status,
            BoardStatus::GAME_OVER | BoardStatus::LEVEL_UP_TILE | BoardStatus::WIN_TILE
        );
    }
}
