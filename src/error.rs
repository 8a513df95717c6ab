//! Error types for game moves and engine requests

use thiserror::Error;

/// Everything the core can refuse.
///
/// Rejections happen before any mutation, so a returned error never leaves
/// the board in a half-applied state. Search timeouts are absorbed inside
/// the engine and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move at ({row}, {col}): occupied or off the board")]
    IllegalMove { row: i32, col: i32 },

    #[error("forbidden move at ({row}, {col}): double-three")]
    ForbiddenMove { row: i32, col: i32 },

    #[error("no legal moves left")]
    NoLegalMoves,
}
