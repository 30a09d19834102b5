//! PlyChess - Type definitions and constants
//!
//! This module provides the core type definitions and constants for
//! representing colors, piece kinds, board coordinates and the opaque
//! presentation handles the engine carries around.

use crate::error::ChessError;
use std::fmt;

/// Piece values (magnitude of the signed kind tag)
pub const PAWN_VALUE: i32 = 1;
pub const KNIGHT_VALUE: i32 = 2;
pub const BISHOP_VALUE: i32 = 3;
pub const ROOK_VALUE: i32 = 5;
pub const QUEEN_VALUE: i32 = 9;
pub const KING_VALUE: i32 = 200;

/// Board dimension along each axis
pub const BOARD_SIZE: i32 = 8;

/// Side of a piece. White's values are positive, Black's negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Color::White
    }

    /// +1 for White, -1 for Black
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row a pawn of this color starts on
    #[inline]
    pub fn pawn_start_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color reaches promotion
    #[inline]
    pub fn promotion_row(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Direction of pawn travel along y
    #[inline]
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Unsigned material value of the kind
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    /// Decode a signed kind tag (e.g. -5 is a black rook)
    pub fn from_value(value: i32) -> Option<(Color, PieceKind)> {
        let color = if value > 0 { Color::White } else { Color::Black };
        let kind = match value.abs() {
            PAWN_VALUE => PieceKind::Pawn,
            KNIGHT_VALUE => PieceKind::Knight,
            BISHOP_VALUE => PieceKind::Bishop,
            ROOK_VALUE => PieceKind::Rook,
            QUEEN_VALUE => PieceKind::Queen,
            KING_VALUE => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }

    /// Single-letter symbol, upper case for White
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if color.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Opaque handle the presentation layer attaches to a piece or cell label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(pub u32);

/// Check that (x, y) lies on the board
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

/// An on-board cell. Both axes are always in 0..8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if is_on_board(x, y) {
            Some(Coordinate {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x as i32
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y as i32
    }

    /// Step by (dx, dy); `None` once the step leaves the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Coordinate::new(self.x() + dx, self.y() + dy)
    }

    /// Parse the `(x,y)` form produced by `Display`
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
        let (x, y) = inner.split_once(',')?;
        Coordinate::new(x.trim().parse().ok()?, y.trim().parse().ok()?)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = ChessError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::new(x, y).ok_or(ChessError::OffBoard { x, y })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
