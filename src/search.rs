//! PlyChess - Search Engine Module
//!
//! Fixed-depth minimax over full board clones with single-bound pruning:
//! each node receives only its parent's best-so-far value and stops as soon
//! as its own best value reaches that bound (equality included).
//!
//! Two root entry points exist with deliberately different tie-breaks:
//! - `best_move` always searches for Black and keeps the first of equally
//!   scored moves.
//! - `best_move_for` searches for either side and keeps the last of equally
//!   scored moves.

use crate::board::Board;
use crate::error::{ChessError, Result};
use crate::evaluation::evaluate;
use crate::move_generator::MoveGenerator;
use crate::store::PositionStore;
use crate::types::*;
use tracing::{debug, info, trace};

/// Initial value of a minimizing node; also returned by a minimizing node
/// without moves
pub const INFINITY: i32 = i32::MAX;

/// Initial value of a maximizing node
pub const NEG_INFINITY: i32 = i32::MIN;

/// Search depth used by the reference game loop
pub const DEFAULT_DEPTH: u32 = 3;

/// Move chosen by a root search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub from: Coordinate,
    pub to: Coordinate,
    /// Handle of the piece to relocate
    pub handle: Option<Handle>,
    pub score: i32,
}

pub struct SearchEngine {
    move_generator: MoveGenerator,
    pub nodes_searched: u64,
    store: Option<Box<dyn PositionStore>>,
}

impl SearchEngine {
    pub fn new() -> Self {
        SearchEngine {
            move_generator: MoveGenerator::new(),
            nodes_searched: 0,
            store: None,
        }
    }

    /// Engine that consults and fills `store` on `best_move`
    pub fn with_store(store: Box<dyn PositionStore>) -> Self {
        SearchEngine {
            store: Some(store),
            ..SearchEngine::new()
        }
    }

    pub fn store(&self) -> Option<&dyn PositionStore> {
        self.store.as_deref()
    }

    pub fn take_store(&mut self) -> Option<Box<dyn PositionStore>> {
        self.store.take()
    }

    /// Best move for Black, searched `depth` plies deep.
    ///
    /// A candidate replaces the current best when it scores strictly lower,
    /// or when it scores `INFINITY` itself, so the first legal move is always
    /// taken when nothing improves on it.
    pub fn best_move(&mut self, board: &Board, depth: u32) -> Result<Option<BestMove>> {
        if depth == 0 {
            return Err(ChessError::InvalidDepth);
        }
        self.nodes_searched = 0;

        let key = board.encode();
        if let Some(hit) = self.stored_move(board, &key)? {
            debug!(from = %hit.from, to = %hit.to, "position store hit");
            return Ok(Some(hit));
        }

        let mut best: Option<BestMove> = None;
        let mut min = INFINITY;

        for piece in board.color_pieces(Color::Black) {
            for to in self.move_generator.legal_moves(board, &piece)? {
                let mut child = board.clone();
                child.move_piece(piece.location, to)?;

                let score = self.alphabeta(&child, depth - 1, true, min)?;
                debug!(from = %piece.location, to = %to, score, "root move scored");

                if score < min || score == INFINITY {
                    min = score;
                    best = Some(BestMove {
                        from: piece.location,
                        to,
                        handle: piece.handle,
                        score,
                    });
                }
            }
        }

        if let Some(mv) = best {
            info!(from = %mv.from, to = %mv.to, score = mv.score, nodes = self.nodes_searched, "best move");
            if let Some(store) = self.store.as_mut() {
                store.record_best_move(&key, mv.from, mv.to);
                store.record_score(&key, mv.score);
            }
        }

        Ok(best)
    }

    /// Best move for `color`, searched `depth` plies deep.
    ///
    /// White maximizes and Black minimizes. Updates use `>=` / `<=`, so among
    /// equally scored moves the last one enumerated wins.
    pub fn best_move_for(&mut self, board: &Board, depth: u32, color: Color) -> Result<Option<BestMove>> {
        if depth == 0 {
            return Err(ChessError::InvalidDepth);
        }
        self.nodes_searched = 0;

        let maximizing = color.is_white();
        let mut best: Option<BestMove> = None;
        let mut minmax = if maximizing { NEG_INFINITY } else { INFINITY };

        for piece in board.color_pieces(color) {
            for to in self.move_generator.legal_moves(board, &piece)? {
                let mut child = board.clone();
                child.move_piece(piece.location, to)?;

                let score = self.alphabeta(&child, depth - 1, !maximizing, minmax)?;
                debug!(from = %piece.location, to = %to, score, "root move scored");

                let better = if maximizing { score >= minmax } else { score <= minmax };
                if better {
                    minmax = score;
                    best = Some(BestMove {
                        from: piece.location,
                        to,
                        handle: piece.handle,
                        score,
                    });
                }
            }
        }

        if let Some(mv) = best {
            info!(%color, from = %mv.from, to = %mv.to, score = mv.score, nodes = self.nodes_searched, "best move");
        }

        Ok(best)
    }

    /// Minimax value of `board` with White maximizing.
    ///
    /// `bound` is the parent's best value so far. Folding uses strict
    /// comparison (first of equal values is kept), and the node returns as
    /// soon as its value reaches `bound`. A side without moves returns its
    /// initial sentinel.
    pub fn alphabeta(&mut self, board: &Board, depth: u32, maximizing: bool, bound: i32) -> Result<i32> {
        self.nodes_searched += 1;

        if depth == 0 {
            return evaluate(board);
        }

        let side = if maximizing { Color::White } else { Color::Black };
        let mut minmax = if maximizing { NEG_INFINITY } else { INFINITY };

        for piece in board.color_pieces(side) {
            for to in self.move_generator.legal_moves(board, &piece)? {
                let mut child = board.clone();
                child.move_piece(piece.location, to)?;

                let score = self.alphabeta(&child, depth - 1, !maximizing, minmax)?;

                let cutoff = if maximizing {
                    if score > minmax {
                        minmax = score;
                    }
                    minmax >= bound
                } else {
                    if score < minmax {
                        minmax = score;
                    }
                    minmax <= bound
                };

                if cutoff {
                    trace!(depth, minmax, bound, "cutoff");
                    return Ok(minmax);
                }
            }
        }

        Ok(minmax)
    }

    /// Stored move for this position, if one is recorded and still legal
    fn stored_move(&self, board: &Board, key: &str) -> Result<Option<BestMove>> {
        let Some(store) = self.store.as_deref() else {
            return Ok(None);
        };
        let (Some((from, to)), Some(score)) = (store.best_move(key), store.score(key)) else {
            return Ok(None);
        };
        let Some(piece) = board.piece_at(from).filter(|p| p.color == Color::Black) else {
            return Ok(None);
        };
        if !self.move_generator.legal_moves(board, piece)?.contains(&to) {
            return Ok(None);
        }

        Ok(Some(BestMove {
            from,
            to,
            handle: piece.handle,
            score,
        }))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new()
    }
}
