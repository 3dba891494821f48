//! Common error infrastructure for twenty48-core.
//!
//! Engine operations are total over well-formed boards, so the only fallible
//! surface is construction of a [`Board`](crate::state::Board) from external
//! data. Programmer errors (zero-sized boards, mismatched board sizes passed
//! to the same operation) panic instead of being reported here.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: ragged rows, a tile that is not a power of two
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all twenty48-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building a board from raw rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "BOARD_EMPTY",
            Self::TooLarge { .. } => "BOARD_TOO_LARGE",
            Self::NotSquare { .. } => "BOARD_NOT_SQUARE",
            Self::InvalidTile { .. } => "BOARD_INVALID_TILE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_errors_are_validation_errors() {
        let err = BoardError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
        assert_eq!(err.error_code(), "BOARD_NOT_SQUARE");
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    }
}
