//! Per-piece destination generation
//!
//! "Legal" here means reachable under the piece's own movement geometry and
//! occupancy rules. Whose turn it is and whether the mover's king is left in
//! check are not considered.

mod pieces;
mod sliding;
mod tables;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Piece, PieceType, Square};

use pieces::{generate_pawn_moves, generate_step_moves};
use sliding::generate_sliding_moves;
use tables::{BISHOP_DIRS, KING_STEPS, KNIGHT_JUMPS, QUEEN_DIRS, ROOK_DIRS};

/// Destination squares for `piece` standing on `from`.
///
/// Never contains `from` itself or a square held by a piece of the same color.
pub fn legal_moves(piece: Piece, board: &Board, from: Square) -> BTreeSet<Square> {
    let us = piece.color();
    let mut moves = BTreeSet::new();

    match piece.piece_type() {
        PieceType::King => generate_step_moves(board, from, us, &KING_STEPS, &mut moves),
        PieceType::Knight => generate_step_moves(board, from, us, &KNIGHT_JUMPS, &mut moves),
        PieceType::Queen => generate_sliding_moves(board, from, us, &QUEEN_DIRS, &mut moves),
        PieceType::Rook => generate_sliding_moves(board, from, us, &ROOK_DIRS, &mut moves),
        PieceType::Bishop => generate_sliding_moves(board, from, us, &BISHOP_DIRS, &mut moves),
        PieceType::Pawn => generate_pawn_moves(board, from, us, &mut moves),
    }

    log::trace!("{piece} on {from}: {} destinations", moves.len());
    moves
}
