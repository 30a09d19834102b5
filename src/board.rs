//! PlyChess - Board Representation Module
//!
//! This module provides the core data structures for representing a chess
//! board and its pieces. The board is the unit of simulation: search and the
//! legality filter work on full clones, so there is no undo machinery.

use crate::error::{ChessError, Result};
use crate::types::*;
use std::fmt;

/// Back rank layout along x, shared by both colors
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub location: Coordinate,
    /// Presentation handle, passed through untouched
    pub handle: Option<Handle>,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, location: Coordinate) -> Self {
        Piece {
            color,
            kind,
            location,
            handle: None,
        }
    }

    /// Signed kind value: positive for White, negative for Black
    #[inline]
    pub fn value(&self) -> i32 {
        self.kind.value() * self.color.sign()
    }

    #[inline]
    pub fn is_white(&self) -> bool {
        self.color.is_white()
    }
}

/// Side effects of applying a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that stood on the destination, now removed from play
    pub captured: Option<Piece>,
    /// A pawn landed on its far rank
    pub promotion_reached: bool,
}

impl MoveOutcome {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Chess board representation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// Piece occupancy indexed `[x][y]`
    squares: [[Option<Piece>; 8]; 8],
    /// Cell decoration handles indexed `[x][y]`
    labels: [[Option<Handle>; 8]; 8],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board::default()
    }

    /// Create a board with the standard 32-piece starting layout
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.setup_standard();
        board
    }

    /// Place the starting pieces. Black occupies rows 0-1, White rows 6-7.
    /// Pieces receive handles 0..32 in placement order.
    pub fn setup_standard(&mut self) {
        let mut next = 0u32;
        let mut place = |board: &mut Board, color, kind, x, y| {
            if let Some(at) = Coordinate::new(x, y) {
                board.add_piece(color, kind, at, Some(Handle(next)));
                next += 1;
            }
        };

        for x in 0..8 {
            place(self, Color::Black, PieceKind::Pawn, x, 1);
        }
        for x in 0..8 {
            place(self, Color::White, PieceKind::Pawn, x, 6);
        }
        for (x, kind) in BACK_RANK.iter().enumerate() {
            place(self, Color::Black, *kind, x as i32, 0);
            place(self, Color::White, *kind, x as i32, 7);
        }
    }

    /// Put a piece on `at`, replacing any occupant
    pub fn add_piece(&mut self, color: Color, kind: PieceKind, at: Coordinate, handle: Option<Handle>) {
        self.squares[at.x() as usize][at.y() as usize] = Some(Piece {
            color,
            kind,
            location: at,
            handle,
        });
    }

    /// Attach a presentation label to a cell
    pub fn add_label(&mut self, at: Coordinate, handle: Handle) {
        self.labels[at.x() as usize][at.y() as usize] = Some(handle);
    }

    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.squares[at.x() as usize][at.y() as usize].as_ref()
    }

    #[inline]
    pub fn label_at(&self, at: Coordinate) -> Option<Handle> {
        self.labels[at.x() as usize][at.y() as usize]
    }

    /// Relocate whatever stands on `from` to `to`, overwriting the occupant.
    ///
    /// No legality check happens here. The displaced occupant, if any, is
    /// returned as the captured piece.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveOutcome> {
        let mut piece = self.squares[from.x() as usize][from.y() as usize]
            .take()
            .ok_or(ChessError::EmptySquare(from))?;
        piece.location = to;

        let promotion_reached =
            piece.kind == PieceKind::Pawn && to.y() == piece.color.promotion_row();
        let captured = self.squares[to.x() as usize][to.y() as usize].replace(piece);

        Ok(MoveOutcome {
            captured,
            promotion_reached,
        })
    }

    /// Replace the pawn on `at` with a piece of `kind`
    pub fn promote(&mut self, at: Coordinate, kind: PieceKind, handle: Option<Handle>) -> Result<()> {
        let pawn = self.piece_at(at).copied().ok_or(ChessError::EmptySquare(at))?;
        if pawn.kind != PieceKind::Pawn {
            return Err(ChessError::NotAPawn(at));
        }
        self.add_piece(pawn.color, kind, at, handle);
        Ok(())
    }

    /// All pieces of one color, scanned x outer, y inner
    pub fn color_pieces(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.color == color)
            .copied()
            .collect()
    }

    /// Find the piece carrying `handle`
    pub fn piece(&self, handle: Handle) -> Option<&Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .find(|p| p.handle == Some(handle))
    }

    /// Find the cell carrying label `handle`
    pub fn label(&self, handle: Handle) -> Option<Coordinate> {
        for x in 0..8 {
            for y in 0..8 {
                if self.labels[x][y] == Some(handle) {
                    return Coordinate::new(x as i32, y as i32);
                }
            }
        }
        None
    }

    /// The king of `color`. Every check query depends on it existing.
    pub fn king(&self, color: Color) -> Result<Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .find(|p| p.color == color && p.kind == PieceKind::King)
            .copied()
            .ok_or(ChessError::MissingKing(color))
    }

    /// Canonical position key: the signed value of each cell (0 when empty)
    /// concatenated in x-outer, y-inner order
    pub fn encode(&self) -> String {
        let mut key = String::with_capacity(80);
        for column in &self.squares {
            for cell in column {
                match cell {
                    Some(piece) => key.push_str(&piece.value().to_string()),
                    None => key.push('0'),
                }
            }
        }
        key
    }

    /// Draw the board as text, row 0 at the top
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push("  +---+---+---+---+---+---+---+---+".to_string());

        for y in 0..8 {
            let mut row = format!("{} |", y);
            for x in 0..8 {
                match self.squares[x][y] {
                    Some(piece) => row.push_str(&format!(" {} |", piece.kind.symbol(piece.color))),
                    None => row.push_str("   |"),
                }
            }
            lines.push(row);
            lines.push("  +---+---+---+---+---+---+---+---+".to_string());
        }
        lines.push("    0   1   2   3   4   5   6   7".to_string());

        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
