//! Error types for board construction and queries.

use thiserror::Error;

/// Errors raised by the board.
///
/// Illegal move targets are *not* errors: `Board::play` reports them as
/// `PlayOutcome::Rejected` without mutating anything, and the caller decides
/// whether to re-prompt. The variants here indicate a collaborator bug
/// (bad size or a query endpoint that can never be part of the game).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board edge size {edge_size} outside supported range [{min}, {max}]")]
    InvalidSize {
        edge_size: usize,
        min: usize,
        max: usize,
    },

    #[error("cell index {index} is a corner or out of range")]
    InvalidIndex { index: usize },
}
