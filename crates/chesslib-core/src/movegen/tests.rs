use std::collections::BTreeSet;

use super::legal_moves;
use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Square};

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

fn squares(labels: &[&str]) -> BTreeSet<Square> {
    labels.iter().map(|l| sq(l)).collect()
}

fn board_with(pieces: &[(&str, PieceType, Color)]) -> Board {
    let mut board = Board::empty();
    for &(label, pt, color) in pieces {
        board.set_square(sq(label), Some(Piece::new(pt, color)));
    }
    board
}

fn moves_at(board: &Board, label: &str) -> BTreeSet<Square> {
    let from = sq(label);
    let piece = board.get_piece(from).unwrap();
    legal_moves(piece, board, from)
}

// ========== KNIGHT ==========

#[test]
fn test_knight_center() {
    let board = board_with(&[("d4", PieceType::Knight, Color::White)]);
    assert_eq!(
        moves_at(&board, "d4"),
        squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
    );
}

#[test]
fn test_knight_corner() {
    let board = board_with(&[("a1", PieceType::Knight, Color::Black)]);
    assert_eq!(moves_at(&board, "a1"), squares(&["b3", "c2"]));

    let board = board_with(&[("h8", PieceType::Knight, Color::White)]);
    assert_eq!(moves_at(&board, "h8"), squares(&["f7", "g6"]));
}

#[test]
fn test_knight_no_wraparound() {
    let board = board_with(&[("h4", PieceType::Knight, Color::White)]);
    assert_eq!(moves_at(&board, "h4"), squares(&["f3", "f5", "g2", "g6"]));
}

#[test]
fn test_knight_own_and_enemy_targets() {
    let board = board_with(&[
        ("d4", PieceType::Knight, Color::White),
        ("e6", PieceType::Pawn, Color::White),
        ("c6", PieceType::Pawn, Color::Black),
        // adjacent pieces do not block a knight
        ("d5", PieceType::Rook, Color::White),
    ]);
    let moves = moves_at(&board, "d4");
    assert!(!moves.contains(&sq("e6")));
    assert!(moves.contains(&sq("c6")));
    assert_eq!(moves.len(), 7);
}

// ========== KING ==========

#[test]
fn test_king_moves() {
    let board = board_with(&[("e4", PieceType::King, Color::White)]);
    assert_eq!(
        moves_at(&board, "e4"),
        squares(&["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"])
    );

    let board = board_with(&[("a1", PieceType::King, Color::White)]);
    assert_eq!(moves_at(&board, "a1"), squares(&["a2", "b1", "b2"]));
}

#[test]
fn test_king_start_position_has_no_moves() {
    let board = Board::default();
    assert!(moves_at(&board, "e1").is_empty());
    assert!(moves_at(&board, "e8").is_empty());
}

// ========== SLIDERS ==========

#[test]
fn test_rook_empty_board() {
    let board = board_with(&[("a1", PieceType::Rook, Color::White)]);
    let moves = moves_at(&board, "a1");
    assert_eq!(moves.len(), 14);
    assert!(!moves.contains(&sq("a1")));
    assert!(moves.contains(&sq("a8")));
    assert!(moves.contains(&sq("h1")));
}

#[test]
fn test_rook_blocking_and_capture() {
    let board = board_with(&[
        ("d4", PieceType::Rook, Color::White),
        ("d6", PieceType::Pawn, Color::White),
        ("f4", PieceType::Knight, Color::Black),
    ]);
    assert_eq!(
        moves_at(&board, "d4"),
        squares(&["a4", "b4", "c4", "e4", "f4", "d1", "d2", "d3", "d5"])
    );
}

#[test]
fn test_bishop_blocking() {
    let board = board_with(&[
        ("c1", PieceType::Bishop, Color::White),
        ("b2", PieceType::Pawn, Color::White),
        ("e3", PieceType::Pawn, Color::Black),
    ]);
    assert_eq!(moves_at(&board, "c1"), squares(&["d2", "e3"]));
}

#[test]
fn test_queen_center() {
    let board = board_with(&[("d4", PieceType::Queen, Color::Black)]);
    // 14 rook lines + 13 bishop diagonals from d4
    assert_eq!(moves_at(&board, "d4").len(), 27);
}

#[test]
fn test_queen_start_position_is_boxed_in() {
    let board = Board::default();
    assert!(moves_at(&board, "d1").is_empty());
}

// ========== PAWN ==========

#[test]
fn test_pawn_pushes_from_home_rank() {
    let board = board_with(&[
        ("e2", PieceType::Pawn, Color::White),
        ("d7", PieceType::Pawn, Color::Black),
    ]);
    assert_eq!(moves_at(&board, "e2"), squares(&["e3", "e4"]));
    assert_eq!(moves_at(&board, "d7"), squares(&["d6", "d5"]));
}

#[test]
fn test_pawn_single_push_off_home_rank() {
    let board = board_with(&[
        ("e3", PieceType::Pawn, Color::White),
        ("d6", PieceType::Pawn, Color::Black),
    ]);
    assert_eq!(moves_at(&board, "e3"), squares(&["e4"]));
    assert_eq!(moves_at(&board, "d6"), squares(&["d5"]));
}

#[test]
fn test_pawn_blocked() {
    let board = board_with(&[
        ("e2", PieceType::Pawn, Color::White),
        ("e3", PieceType::Knight, Color::Black),
        ("a2", PieceType::Pawn, Color::White),
        ("a4", PieceType::Knight, Color::Black),
    ]);
    // a piece directly ahead blocks both pushes and cannot be captured forward
    assert!(moves_at(&board, "e2").is_empty());
    assert_eq!(moves_at(&board, "a2"), squares(&["a3"]));
}

#[test]
fn test_pawn_captures() {
    let board = board_with(&[
        ("e4", PieceType::Pawn, Color::White),
        ("d5", PieceType::Pawn, Color::Black),
        ("f5", PieceType::Pawn, Color::White),
    ]);
    assert_eq!(moves_at(&board, "e4"), squares(&["d5", "e5"]));
    // black pawn on d5 captures downward onto e4
    assert_eq!(moves_at(&board, "d5"), squares(&["d4", "e4"]));
}

#[test]
fn test_pawn_edge_files_and_last_rank() {
    let board = board_with(&[
        ("h7", PieceType::Pawn, Color::White),
        ("g8", PieceType::Rook, Color::Black),
        ("a8", PieceType::Pawn, Color::White),
    ]);
    assert_eq!(moves_at(&board, "h7"), squares(&["g8", "h8"]));
    assert!(moves_at(&board, "a8").is_empty());
}

#[test]
fn test_start_position_move_counts() {
    let board = Board::default();
    assert_eq!(moves_at(&board, "b1"), squares(&["a3", "c3"]));
    assert_eq!(moves_at(&board, "g8"), squares(&["f6", "h6"]));
    assert!(moves_at(&board, "a1").is_empty());
    assert!(moves_at(&board, "c1").is_empty());
}

#[test]
fn test_never_contains_own_square_or_own_pieces() {
    let board = Board::default();
    for (from, _, piece) in board.occupants(None) {
        let moves = legal_moves(piece, &board, from);
        assert!(!moves.contains(&from));
        for to in moves {
            assert!(board.get_piece(to).is_none_or(|pc| pc.color() != piece.color()));
        }
    }
}
