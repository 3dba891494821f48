use crate::state::{Board, can_merge};

use super::Direction;

/// Compacts one row toward index 0, merging equal neighbours.
///
/// Zeros are dropped first, then the row is scanned left to right: the first
/// tile of each equal adjacent pair doubles and its partner is consumed. A
/// merged tile never merges again in the same pass, and tiles already at
/// [`GameConfig::MAX_TILE`](crate::GameConfig::MAX_TILE) stay as they are. The
/// result is padded with zeros back to the input length.
pub fn merge_row_left(row: &[u32]) -> Vec<u32> {
    let tiles: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut merged = Vec::with_capacity(row.len());

    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && can_merge(tiles[i], tiles[i + 1]) {
            merged.push(tiles[i] * 2);
            i += 2;
        } else {
            merged.push(tiles[i]);
            i += 1;
        }
    }

    merged.resize(row.len(), 0);
    merged
}

/// Pushes every row to the left.
pub fn move_left(board: &Board) -> Board {
    let cells = board.rows().flat_map(merge_row_left).collect();
    Board::from_cells(board.size(), cells)
}

/// Mirror, push left, mirror back.
pub fn move_right(board: &Board) -> Board {
    move_left(&board.with_reversed_rows()).with_reversed_rows()
}

/// Transpose, push left, transpose back.
pub fn move_up(board: &Board) -> Board {
    move_left(&board.transposed()).transposed()
}

/// Transpose, push right, transpose back.
pub fn move_down(board: &Board) -> Board {
    move_right(&board.transposed()).transposed()
}

/// Applies the slide for `direction` without spawning anything.
pub fn slide(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().copied()).unwrap()
    }

    #[test]
    fn pairs_merge_once_each() {
        assert_eq!(merge_row_left(&[2, 2, 4, 4]), vec![4, 8, 0, 0]);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        assert_eq!(merge_row_left(&[2, 2, 2, 0]), vec![4, 2, 0, 0]);
        assert_eq!(merge_row_left(&[4, 4, 8, 0]), vec![8, 8, 0, 0]);
    }

    #[test]
    fn gaps_are_closed_before_merging() {
        assert_eq!(merge_row_left(&[2, 0, 0, 2]), vec![4, 0, 0, 0]);
        assert_eq!(merge_row_left(&[0, 4, 0, 2]), vec![4, 2, 0, 0]);
    }

    #[test]
    fn four_equal_tiles_make_two_merges() {
        assert_eq!(merge_row_left(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
    }

    #[test]
    fn empty_and_compact_rows_are_unchanged() {
        assert_eq!(merge_row_left(&[0, 0, 0]), vec![0, 0, 0]);
        assert_eq!(merge_row_left(&[2, 4, 8]), vec![2, 4, 8]);
    }

    #[test]
    fn move_right_is_reflected_move_left() {
        let start = board(&[
            &[2, 2, 4, 4],
            &[0, 2, 0, 2],
            &[8, 0, 8, 8],
            &[2, 4, 8, 16],
        ]);
        let expected = move_left(&start.with_reversed_rows()).with_reversed_rows();
        assert_eq!(move_right(&start), expected);
        assert_eq!(
            move_right(&start).to_rows(),
            vec![
                vec![0, 0, 4, 8],
                vec![0, 0, 0, 4],
                vec![0, 0, 8, 16],
                vec![2, 4, 8, 16],
            ]
        );
    }

    #[test]
    fn move_up_and_down_work_on_columns() {
        let start = board(&[&[2, 0, 4], &[2, 4, 0], &[4, 4, 4]]);
        assert_eq!(
            move_up(&start).to_rows(),
            vec![vec![4, 8, 8], vec![4, 0, 0], vec![0, 0, 0]]
        );
        assert_eq!(
            move_down(&start).to_rows(),
            vec![vec![0, 0, 0], vec![4, 0, 0], vec![4, 8, 8]]
        );
    }

    #[test]
    fn left_compacted_rows_are_stable() {
        let compact = board(&[&[2, 4, 0], &[8, 0, 0], &[16, 32, 64]]);
        assert_eq!(move_left(&compact), compact);
        assert_eq!(move_left(&move_left(&compact)), compact);
    }

    #[test]
    fn slide_dispatches_by_direction() {
        let start = board(&[&[0, 2], &[2, 0]]);
        assert_eq!(slide(&start, Direction::Left).to_rows(), vec![vec![2, 0], vec![2, 0]]);
        assert_eq!(slide(&start, Direction::Right).to_rows(), vec![vec![0, 2], vec![0, 2]]);
        assert_eq!(slide(&start, Direction::Up).to_rows(), vec![vec![2, 2], vec![0, 0]]);
        assert_eq!(slide(&start, Direction::Down).to_rows(), vec![vec![0, 0], vec![2, 2]]);
    }
}
