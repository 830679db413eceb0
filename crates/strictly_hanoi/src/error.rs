//! Puzzle-level errors.

use super::MoveError;

/// Error raised by [`Towers`](crate::Towers) construction or by the
/// unchecked disk transfer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// The puzzle needs at least one disk.
    #[display("Invalid configuration: {} disks (need at least 1)", disk_count)]
    InvalidConfiguration {
        /// The rejected disk count.
        disk_count: u32,
    },

    /// A transfer was attempted that the puzzle cannot perform.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// A position that no sequence of legal moves can reach.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(String),
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::InvalidMove(err) => Some(err),
            PuzzleError::InvalidConfiguration { .. } | PuzzleError::InvalidPosition(_) => None,
        }
    }
}

impl From<MoveError> for PuzzleError {
    fn from(err: MoveError) -> Self {
        PuzzleError::InvalidMove(err)
    }
}
