//! PlyChess - Error types
//!
//! Every recoverable failure of the engine is a `ChessError`. Out-of-range
//! probes during move generation are not errors; they simply yield no move.

use crate::types::{Color, Coordinate};
use thiserror::Error;

/// Domain errors for the chess engine.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("coordinate ({x},{y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    #[error("no piece at {0}")]
    EmptySquare(Coordinate),

    #[error("invariant violated: no {0} king on the board")]
    MissingKing(Color),

    #[error("piece at {0} is not a pawn")]
    NotAPawn(Coordinate),

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChessError>;
