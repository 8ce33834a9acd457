//! Sliding piece move generation (rook, bishop, queen)

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Color, Square};

/// Walk each ray until the edge or the first occupied square.
/// An opponent piece on that square is a capture target; an own piece blocks.
pub(super) fn generate_sliding_moves(
    board: &Board,
    from: Square,
    us: Color,
    dirs: &[(i8, i8)],
    moves: &mut BTreeSet<Square>,
) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.get_piece(to) {
                None => {
                    moves.insert(to);
                }
                Some(pc) => {
                    if pc.color() != us {
                        moves.insert(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
