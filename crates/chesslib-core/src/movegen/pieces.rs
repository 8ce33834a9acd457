//! Step piece move generation (king, knight, pawn)

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Color, Rank, Square};

/// Single-step targets (king neighbours, knight jumps) not held by `us`
pub(super) fn generate_step_moves(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut BTreeSet<Square>,
) {
    for &(df, dr) in offsets {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        if board.get_piece(to).is_none_or(|pc| pc.color() != us) {
            moves.insert(to);
        }
    }
}

/// Pawn pushes and diagonal captures.
///
/// White advances toward rank 8, black toward rank 1. The double push is only
/// available from the home rank and needs both squares empty. Captures need an
/// opponent piece on the diagonal.
pub(super) fn generate_pawn_moves(
    board: &Board,
    from: Square,
    us: Color,
    moves: &mut BTreeSet<Square>,
) {
    let (forward, home) = match us {
        Color::White => (1i8, Rank::Rank2),
        Color::Black => (-1i8, Rank::Rank7),
    };

    let one = from.offset(0, forward).filter(|&sq| board.get_piece(sq).is_none());
    if let Some(one) = one {
        moves.insert(one);
        let two = one
            .offset(0, forward)
            .filter(|&sq| from.rank() == home && board.get_piece(sq).is_none());
        if let Some(two) = two {
            moves.insert(two);
        }
    }

    for df in [-1i8, 1] {
        let Some(to) = from.offset(df, forward) else {
            continue;
        };
        if board.get_piece(to).is_some_and(|pc| pc.color() != us) {
            moves.insert(to);
        }
    }
}
