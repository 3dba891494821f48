use std::fmt;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::BoardError;

/// Empty cells of a board, bounded by [`GameConfig::MAX_CELLS`].
pub type EmptyCells = ArrayVec<Position, { GameConfig::MAX_CELLS }>;

/// Cell coordinate on the board, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns true for values a tile may hold: powers of two from 2 up to
/// [`GameConfig::MAX_TILE`].
#[inline]
pub const fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two() && value <= GameConfig::MAX_TILE
}

/// True if two adjacent tiles combine into one of double the value.
#[inline]
pub const fn can_merge(a: u32, b: u32) -> bool {
    a == b && is_tile_value(a) && a < GameConfig::MAX_TILE
}

/// Square grid of tiles where `0` marks an empty cell.
///
/// Every non-zero cell holds a power of two that is at least 2. The grid is
/// stored row-major; all transforms produce a new board of the same size.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Creates a `size`×`size` board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`GameConfig::MAX_BOARD_SIZE`].
    pub fn empty(size: usize) -> Self {
        assert!(
            size > 0 && size <= GameConfig::MAX_BOARD_SIZE,
            "board size must be in 1..={}, got {size}",
            GameConfig::MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a board from rows, validating shape and tile values.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u32]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size > GameConfig::MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge {
                size,
                max: GameConfig::MAX_BOARD_SIZE,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && !is_tile_value(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { size, cells })
    }

    /// Wraps already-validated row-major cells.
    pub(crate) fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        debug_assert!(cells.iter().all(|&v| v == 0 || is_tile_value(v)));
        Self { size, cells }
    }

    /// Edge length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at `position`, `0` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the board.
    #[inline]
    pub fn get(&self, position: Position) -> u32 {
        self.cells[self.index(position)]
    }

    pub(crate) fn set(&mut self, position: Position, value: u32) {
        debug_assert!(value == 0 || is_tile_value(value));
        let index = self.index(position);
        self.cells[index] = value;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(index, _)| self.position(index))
            .collect()
    }

    /// Largest tile on the board, `0` for an empty board.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any cell holds exactly `value`.
    pub fn has_reached_tile(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    /// True while at least one legal move remains.
    ///
    /// A move is available if any cell is empty or any two orthogonally
    /// adjacent tiles can merge.
    pub fn has_available_moves(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let value = self.cells[row * n + col];
                if value == 0 {
                    return true;
                }
                if col + 1 < n && can_merge(value, self.cells[row * n + col + 1]) {
                    return true;
                }
                if row + 1 < n && can_merge(value, self.cells[(row + 1) * n + col]) {
                    return true;
                }
            }
        }
        false
    }

    /// Rows become columns.
    pub fn transposed(&self) -> Self {
        let n = self.size;
        let cells = (0..n * n)
            .map(|index| {
                let (row, col) = (index / n, index % n);
                self.cells[col * n + row]
            })
            .collect();
        Self::from_cells(n, cells)
    }

    /// Every row mirrored left-to-right.
    pub fn with_reversed_rows(&self) -> Self {
        let cells = self
            .rows()
            .flat_map(|row| row.iter().rev().copied())
            .collect();
        Self::from_cells(self.size, cells)
    }

    #[inline]
    fn index(&self, position: Position) -> usize {
        assert!(
            position.row < self.size && position.col < self.size,
            "position {position} outside {n}x{n} board",
            n = self.size
        );
        position.row * self.size + position.col
    }

    #[inline]
    fn position(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().copied()).unwrap()
    }

    #[test]
    fn empty_board_has_only_zeros() {
        let board = Board::empty(3);
        assert_eq!(board.size(), 3);
        assert!(board.cells().iter().all(|&v| v == 0));
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    #[should_panic(expected = "board size")]
    fn empty_board_rejects_zero_size() {
        Board::empty(0);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Board::from_rows([vec![2u32, 0, 0], vec![0, 0], vec![0, 0, 0]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn from_rows_rejects_non_tile_values() {
        let err = Board::from_rows([[2u32, 3], [0, 0]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidTile {
                row: 0,
                col: 1,
                value: 3
            }
        );

        let err = Board::from_rows([[1u32, 0], [0, 0]]).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTile { value: 1, .. }));
    }

    #[test]
    fn from_rows_rejects_empty_and_oversized() {
        let none: [[u32; 0]; 0] = [];
        assert_eq!(Board::from_rows(none).unwrap_err(), BoardError::Empty);

        let rows = vec![vec![0u32; 9]; 9];
        assert!(matches!(
            Board::from_rows(rows).unwrap_err(),
            BoardError::TooLarge { size: 9, .. }
        ));
    }

    #[test]
    fn available_moves_with_empty_cell() {
        let board = board(&[&[2, 4], &[8, 0]]);
        assert!(board.has_available_moves());
    }

    #[test]
    fn available_moves_with_horizontal_pair() {
        let board = board(&[&[2, 2], &[4, 8]]);
        assert!(board.has_available_moves());
    }

    #[test]
    fn available_moves_with_vertical_pair() {
        let board = board(&[&[2, 4], &[2, 8]]);
        assert!(board.has_available_moves());
    }

    #[test]
    fn no_moves_on_full_checkerboard() {
        let board = board(&[&[2, 4, 2], &[4, 2, 4], &[2, 4, 2]]);
        assert!(board.empty_cells().is_empty());
        assert!(!board.has_available_moves());
    }

    #[test]
    fn max_tile_pairs_are_not_a_move() {
        let max = GameConfig::MAX_TILE;
        let board = board(&[&[max, max], &[max, max]]);
        assert!(!board.has_available_moves());
        assert!(!can_merge(max, max));
        assert!(can_merge(max / 2, max / 2));
    }

    #[test]
    fn reached_tile_requires_exact_value() {
        let board = board(&[&[64, 0], &[0, 128]]);
        assert!(board.has_reached_tile(64));
        assert!(board.has_reached_tile(128));
        assert!(!board.has_reached_tile(32));
        assert_eq!(board.max_tile(), 128);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let board = board(&[&[2, 4, 8], &[16, 32, 64], &[0, 0, 2]]);
        assert_eq!(
            board.transposed().to_rows(),
            vec![vec![2, 16, 0], vec![4, 32, 0], vec![8, 64, 2]]
        );
        assert_eq!(board.transposed().transposed(), board);
    }

    #[test]
    fn reverse_mirrors_each_row() {
        let board = board(&[&[2, 0, 4], &[0, 8, 0], &[16, 0, 0]]);
        assert_eq!(
            board.with_reversed_rows().to_rows(),
            vec![vec![4, 0, 2], vec![0, 8, 0], vec![0, 0, 16]]
        );
    }

    #[test]
    fn empty_cells_are_row_major() {
        let board = board(&[&[2, 0], &[0, 4]]);
        let empty: Vec<_> = board.empty_cells().into_iter().collect();
        assert_eq!(empty, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn display_joins_rows() {
        let board = board(&[&[2, 0], &[0, 4]]);
        assert_eq!(board.to_string(), "2 0 / 0 4");
    }
}
