//! Move Generation Tests
//!
//! Pseudo-legal destinations per piece kind, including generation order.

use ply_chess::{Board, Color, Coordinate, MoveGenerator, Piece, PieceKind};

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

fn piece(board: &Board, x: i32, y: i32) -> Piece {
    *board.piece_at(at(x, y)).unwrap()
}

fn lone(color: Color, kind: PieceKind, x: i32, y: i32) -> (Board, Piece) {
    let mut board = Board::new();
    board.add_piece(color, kind, at(x, y), None);
    let p = piece(&board, x, y);
    (board, p)
}

// ============================================================================
// Sliding pieces
// ============================================================================

#[test]
fn test_rook_on_empty_board_has_14_moves() {
    let (board, rook) = lone(Color::White, PieceKind::Rook, 0, 0);
    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &rook);
    assert_eq!(moves.len(), 14);
    // Right first, then down
    assert_eq!(moves[0], at(1, 0));
    assert_eq!(moves[6], at(7, 0));
    assert_eq!(moves[7], at(0, 1));
    assert_eq!(moves[13], at(0, 7));
}

#[test]
fn test_bishop_on_empty_board() {
    let (board, bishop) = lone(Color::Black, PieceKind::Bishop, 0, 0);
    assert_eq!(MoveGenerator::new().pseudo_legal_moves(&board, &bishop).len(), 7);

    let (board, bishop) = lone(Color::Black, PieceKind::Bishop, 3, 4);
    assert_eq!(MoveGenerator::new().pseudo_legal_moves(&board, &bishop).len(), 13);
}

#[test]
fn test_queen_on_empty_board_has_27_moves() {
    let (board, queen) = lone(Color::White, PieceKind::Queen, 4, 4);
    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &queen);
    assert_eq!(moves.len(), 27);
    // Orthogonal rays come before diagonal ones
    assert_eq!(moves[0], at(5, 4));
    assert_eq!(moves[14], at(5, 5));
}

#[test]
fn test_bishop_rays_stop_at_blockers() {
    let mut board = Board::new();
    board.add_piece(Color::White, PieceKind::Bishop, at(2, 2), None);
    board.add_piece(Color::White, PieceKind::Pawn, at(4, 4), None);
    board.add_piece(Color::Black, PieceKind::Knight, at(0, 0), None);

    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 2, 2));
    assert_eq!(
        moves,
        vec![at(3, 3), at(3, 1), at(4, 0), at(1, 3), at(0, 4), at(1, 1), at(0, 0)]
    );
}

#[test]
fn test_rook_captures_first_enemy_only() {
    let mut board = Board::new();
    board.add_piece(Color::Black, PieceKind::Rook, at(3, 3), None);
    board.add_piece(Color::White, PieceKind::Pawn, at(3, 5), None);
    board.add_piece(Color::White, PieceKind::Queen, at(3, 6), None);
    board.add_piece(Color::Black, PieceKind::Pawn, at(5, 3), None);

    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 3, 3));
    assert!(moves.contains(&at(4, 3)));
    assert!(!moves.contains(&at(5, 3)));
    assert!(moves.contains(&at(3, 4)));
    assert!(moves.contains(&at(3, 5)));
    assert!(!moves.contains(&at(3, 6)));
    assert_eq!(moves.len(), 1 + 3 + 3 + 2);
}

// ============================================================================
// Stepping pieces
// ============================================================================

#[test]
fn test_knight_in_center_has_8_moves() {
    let (board, knight) = lone(Color::White, PieceKind::Knight, 4, 4);
    assert_eq!(MoveGenerator::new().pseudo_legal_moves(&board, &knight).len(), 8);
}

#[test]
fn test_knight_skips_own_pieces_and_takes_enemies() {
    let mut board = Board::new();
    board.add_piece(Color::White, PieceKind::Knight, at(4, 4), None);
    board.add_piece(Color::White, PieceKind::Pawn, at(5, 2), None);
    board.add_piece(Color::Black, PieceKind::Pawn, at(6, 3), None);

    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 4, 4));
    assert_eq!(moves.len(), 7);
    assert!(!moves.contains(&at(5, 2)));
    assert_eq!(moves[0], at(6, 3));
}

#[test]
fn test_king_moves_on_edge() {
    let (board, king) = lone(Color::Black, PieceKind::King, 4, 0);
    let moves = MoveGenerator::new().pseudo_legal_moves(&board, &king);
    assert_eq!(moves, vec![at(3, 0), at(3, 1), at(4, 1), at(5, 0), at(5, 1)]);
}

// ============================================================================
// Pawns
// ============================================================================

#[test]
fn test_white_pawn_from_start_row() {
    let (board, pawn) = lone(Color::White, PieceKind::Pawn, 3, 6);
    assert_eq!(
        MoveGenerator::new().pseudo_legal_moves(&board, &pawn),
        vec![at(3, 5), at(3, 4)]
    );
}

#[test]
fn test_black_pawn_from_start_row() {
    let (board, pawn) = lone(Color::Black, PieceKind::Pawn, 3, 1);
    assert_eq!(
        MoveGenerator::new().pseudo_legal_moves(&board, &pawn),
        vec![at(3, 2), at(3, 3)]
    );
}

#[test]
fn test_pawn_single_push_off_start_row() {
    let (board, pawn) = lone(Color::White, PieceKind::Pawn, 3, 5);
    assert_eq!(MoveGenerator::new().pseudo_legal_moves(&board, &pawn), vec![at(3, 4)]);
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    let mut board = Board::new();
    board.add_piece(Color::White, PieceKind::Pawn, at(3, 6), None);
    board.add_piece(Color::Black, PieceKind::Knight, at(3, 4), None);
    assert_eq!(
        MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 3, 6)),
        vec![at(3, 5)]
    );

    let mut board = Board::new();
    board.add_piece(Color::White, PieceKind::Pawn, at(3, 6), None);
    board.add_piece(Color::Black, PieceKind::Knight, at(3, 5), None);
    assert!(MoveGenerator::new()
        .pseudo_legal_moves(&board, &piece(&board, 3, 6))
        .is_empty());
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let mut board = Board::new();
    board.add_piece(Color::White, PieceKind::Pawn, at(3, 6), None);
    board.add_piece(Color::Black, PieceKind::Rook, at(2, 5), None);
    board.add_piece(Color::Black, PieceKind::Rook, at(4, 5), None);
    assert_eq!(
        MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 3, 6)),
        vec![at(3, 5), at(3, 4), at(2, 5), at(4, 5)]
    );

    let mut board = Board::new();
    board.add_piece(Color::Black, PieceKind::Pawn, at(0, 3), None);
    board.add_piece(Color::Black, PieceKind::Pawn, at(1, 4), None);
    assert_eq!(
        MoveGenerator::new().pseudo_legal_moves(&board, &piece(&board, 0, 3)),
        vec![at(0, 4)]
    );
}

#[test]
fn test_starting_position_piece_counts() {
    let board = Board::standard();
    let generator = MoveGenerator::new();
    let total: usize = board
        .color_pieces(Color::White)
        .iter()
        .map(|p| generator.pseudo_legal_moves(&board, p).len())
        .sum();
    assert_eq!(total, 20);
}
