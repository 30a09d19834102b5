//! PlyChess - Move Generator Module
//!
//! This module handles the generation of pseudo-legal destinations per piece
//! kind, the king-safety filter that turns them into legal moves, and the
//! check / out-of-moves queries built on top of both.
//!
//! Generation order is part of the contract: search keeps the first of
//! several equally scored moves, so the probe order below decides ties.

use crate::board::{Board, Piece};
use crate::error::Result;
use crate::types::*;

/// Knight offsets, clockwise from one o'clock
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// Right, left, up, down
const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Down-right, up-right, down-left, up-left
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Outcome of the side to move's position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// In check with at least one legal reply
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Move generator for chess positions
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    /// Create a new move generator
    pub fn new() -> Self {
        MoveGenerator
    }

    /// Destinations following the piece's movement geometry, ignoring
    /// whether the move exposes its own king
    pub fn pseudo_legal_moves(&self, board: &Board, piece: &Piece) -> Vec<Coordinate> {
        let mut moves = Vec::with_capacity(28);
        let from = piece.location;
        let color = piece.color;

        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(board, from, color, &mut moves),
            PieceKind::Knight => {
                for &(dx, dy) in &KNIGHT_OFFSETS {
                    self.generate_step(board, from.offset(dx, dy), color, &mut moves);
                }
            }
            PieceKind::Bishop => {
                self.generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves)
            }
            PieceKind::Rook => {
                self.generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves)
            }
            PieceKind::Queen => {
                self.generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves);
                self.generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves);
            }
            PieceKind::King => {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        self.generate_step(board, from.offset(dx, dy), color, &mut moves);
                    }
                }
            }
        }

        moves
    }

    /// Generate pawn pushes and diagonal captures. No en passant.
    fn generate_pawn_moves(&self, board: &Board, from: Coordinate, color: Color, moves: &mut Vec<Coordinate>) {
        let direction = color.pawn_direction();

        // Single push, then double push from the starting row
        if let Some(one) = from.offset(0, direction) {
            if board.piece_at(one).is_none() {
                moves.push(one);
                if from.y() == color.pawn_start_row() {
                    if let Some(two) = from.offset(0, 2 * direction) {
                        if board.piece_at(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // Captures, left then right
        for dx in [-1, 1] {
            if let Some(target) = from.offset(dx, direction) {
                if board.piece_at(target).is_some_and(|p| p.color != color) {
                    moves.push(target);
                }
            }
        }
    }

    /// Single-step move: kept if on the board and not blocked by an own piece
    fn generate_step(&self, board: &Board, to: Option<Coordinate>, color: Color, moves: &mut Vec<Coordinate>) {
        let Some(to) = to else {
            return;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color == color => {}
            _ => moves.push(to),
        }
    }

    /// Walk each ray until the edge or the first occupied square.
    /// An enemy on that square is included as a capture.
    fn generate_sliding_moves(
        &self,
        board: &Board,
        from: Coordinate,
        color: Color,
        directions: &[(i32, i32)],
        moves: &mut Vec<Coordinate>,
    ) {
        for &(dx, dy) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dx, dy) {
                match board.piece_at(next) {
                    None => moves.push(next),
                    Some(occupant) => {
                        if occupant.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// Legal destinations of `piece`: pseudo-legal moves that do not leave
    /// its own king attacked
    pub fn legal_moves(&self, board: &Board, piece: &Piece) -> Result<Vec<Coordinate>> {
        let candidates = self.pseudo_legal_moves(board, piece);
        let mut legal = Vec::with_capacity(candidates.len());

        for to in candidates {
            let mut temp_board = board.clone();
            temp_board.move_piece(piece.location, to)?;
            if !self.is_check(&temp_board, piece.color)? {
                legal.push(to);
            }
        }

        Ok(legal)
    }

    /// Number of legal moves available to `color`
    pub fn count_legal_moves(&self, board: &Board, color: Color) -> Result<usize> {
        let mut total = 0;
        for piece in board.color_pieces(color) {
            total += self.legal_moves(board, &piece)?.len();
        }
        Ok(total)
    }

    /// True if any opposing piece can reach the king of `color`
    pub fn is_check(&self, board: &Board, color: Color) -> Result<bool> {
        let king = board.king(color)?;
        let attacked = board
            .color_pieces(color.opposite())
            .iter()
            .any(|attacker| self.pseudo_legal_moves(board, attacker).contains(&king.location));
        Ok(attacked)
    }

    /// True if no piece of `color` has a legal move
    pub fn out_of_moves(&self, board: &Board, color: Color) -> Result<bool> {
        for piece in board.color_pieces(color) {
            if !self.legal_moves(board, &piece)?.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Classify the position for the side `color`
    pub fn game_status(&self, board: &Board, color: Color) -> Result<GameStatus> {
        let check = self.is_check(board, color)?;
        let stuck = self.out_of_moves(board, color)?;

        Ok(match (check, stuck) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        })
    }
}
