//! PlyChess - Chess Engine
//!
//! A two-player chess engine with:
//! - Per-piece move generation and a king-safety legality filter
//! - Check, checkmate and stalemate detection
//! - Material plus mobility evaluation
//! - Fixed-depth minimax search with single-bound pruning
//! - Optional position store for previously computed moves
//!
//! Castling, en passant and draw rules are not part of the game model.

pub mod types;
pub mod error;
pub mod board;
pub mod move_generator;
pub mod evaluation;
pub mod search;
pub mod store;
pub mod config;

pub use board::{Board, MoveOutcome, Piece};
pub use error::{ChessError, Result};
pub use move_generator::{GameStatus, MoveGenerator};
pub use search::{BestMove, SearchEngine};
pub use types::{Color, Coordinate, Handle, PieceKind};
