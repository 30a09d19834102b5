//! PlyChess - Position Evaluation Module
//!
//! Static evaluation of a position as material balance plus a scaled
//! mobility balance. Positive scores favor White, negative favor Black.

use crate::board::Board;
use crate::error::Result;
use crate::move_generator::MoveGenerator;
use crate::types::*;

/// Mobility difference is divided by this weight
pub const MOBILITY_WEIGHT: i32 = 10;

/// Signed sum of every piece value on the board
pub fn material_score(board: &Board) -> i32 {
    board
        .color_pieces(Color::White)
        .iter()
        .chain(board.color_pieces(Color::Black).iter())
        .map(|piece| piece.value())
        .sum()
}

/// `(legal moves of White - legal moves of Black) / MOBILITY_WEIGHT`,
/// truncating toward zero
pub fn mobility_score(board: &Board) -> Result<i32> {
    let generator = MoveGenerator::new();
    let white_moves = generator.count_legal_moves(board, Color::White)? as i32;
    let black_moves = generator.count_legal_moves(board, Color::Black)? as i32;

    Ok((white_moves - black_moves) / MOBILITY_WEIGHT)
}

/// Evaluate the position
pub fn evaluate(board: &Board) -> Result<i32> {
    Ok(material_score(board) + mobility_score(board)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    /// Lone king in the (0,0) corner against a king on (7,7) and a queen on (3,4)
    fn queen_vs_king(strong: Color) -> Board {
        let mut board = Board::new();
        board.add_piece(strong, PieceKind::King, at(7, 7), None);
        board.add_piece(strong, PieceKind::Queen, at(3, 4), None);
        board.add_piece(strong.opposite(), PieceKind::King, at(0, 0), None);
        board
    }

    #[test]
    fn mobility_truncates_toward_zero() {
        // Strong side: 3 king moves + 27 queen moves. Weak king: 2 moves.
        let board = queen_vs_king(Color::White);
        let generator = MoveGenerator::new();
        assert_eq!(generator.count_legal_moves(&board, Color::White).unwrap(), 30);
        assert_eq!(generator.count_legal_moves(&board, Color::Black).unwrap(), 2);
        assert_eq!(mobility_score(&board).unwrap(), 2);

        // -28 / 10 truncates to -2, not -3
        let board = queen_vs_king(Color::Black);
        assert_eq!(mobility_score(&board).unwrap(), -2);
        assert_eq!(evaluate(&board).unwrap(), -QUEEN_VALUE - 2);
    }

    #[test]
    fn material_counts_signed_values() {
        let mut board = Board::new();
        board.add_piece(Color::White, PieceKind::King, at(4, 7), None);
        board.add_piece(Color::Black, PieceKind::King, at(4, 0), None);
        board.add_piece(Color::White, PieceKind::Rook, at(0, 7), None);
        board.add_piece(Color::Black, PieceKind::Knight, at(1, 0), None);

        assert_eq!(material_score(&board), ROOK_VALUE - KNIGHT_VALUE);
    }
}
