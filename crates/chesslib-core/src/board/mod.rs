//! Board representation and basic manipulation
//!
//! The board owns 64 slots addressed by square index. Each occupied slot holds
//! a piece plus the `PieceId` it was given when placed, so reverse lookup works
//! by identity rather than by equality of piece values.

mod json;
mod layout;


use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Color, File, Move, Piece, PieceId, PieceType, Rank, Square};

pub use json::{BoardJson, CellJson, PieceJson};
pub use layout::{
    EMPTY_SQUARE, START_BOARD_STR, create_board_from_str, create_board_from_str_with_perspective,
    create_default_board, traversal,
};

/// One occupied slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occupant {
    id: PieceId,
    piece: Piece,
}

/// 8x8 board of optional pieces
#[derive(Clone, Debug)]
pub struct Board {
    slots: [Option<Occupant>; Square::NUM],
    /// Next id handed out by `set_square`
    next_id: u64,
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            slots: [None; Square::NUM],
            next_id: 0,
        }
    }

    /// Piece on a square
    #[inline]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.slots[sq.index()].map(|occ| occ.piece)
    }

    /// Identity of the piece on a square
    #[inline]
    pub fn piece_id(&self, sq: Square) -> Option<PieceId> {
        self.slots[sq.index()].map(|occ| occ.id)
    }

    #[inline]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.slots[sq.index()].is_none()
    }

    /// Occupied squares in ascending index order, optionally filtered by color
    pub fn occupants(
        &self,
        color: Option<Color>,
    ) -> impl Iterator<Item = (Square, PieceId, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            let occ = self.slots[sq.index()]?;
            if color.is_some_and(|c| c != occ.piece.color()) {
                return None;
            }
            Some((sq, occ.id, occ.piece))
        })
    }

    /// All pieces in ascending square order, optionally only one color
    pub fn get_pieces(&self, color: Option<Color>) -> Vec<Piece> {
        self.occupants(color).map(|(_, _, pc)| pc).collect()
    }

    /// Square currently holding the piece with this identity
    pub fn get_square(&self, id: PieceId) -> Option<Square> {
        self.occupants(None).find(|&(_, occ_id, _)| occ_id == id).map(|(sq, _, _)| sq)
    }

    /// Assign a slot directly, with no legality check.
    ///
    /// A placed piece gets a fresh identity, which is returned. Whatever held the
    /// square before is dropped.
    pub fn set_square(&mut self, sq: Square, piece: Option<Piece>) -> Option<PieceId> {
        log::trace!("set {sq} = {}", piece.map_or('.', Piece::glyph));
        let Some(piece) = piece else {
            self.slots[sq.index()] = None;
            return None;
        };
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.slots[sq.index()] = Some(Occupant { id, piece });
        Some(id)
    }

    /// Destinations for the piece on `from`. Empty when the square is empty.
    pub fn legal_moves(&self, from: Square) -> BTreeSet<Square> {
        self.get_piece(from).map(|pc| pc.legal_moves(self, from)).unwrap_or_default()
    }

    /// Union of every matching piece's destinations as (from, to) pairs
    pub fn get_moves(&self, color: Option<Color>) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        for (from, _, piece) in self.occupants(color) {
            moves.extend(piece.legal_moves(self, from).into_iter().map(|to| Move::new(from, to)));
        }
        moves
    }

    /// Square of the first king of this color, if any
    pub fn get_king_square(&self, color: Color) -> Option<Square> {
        self.occupants(Some(color))
            .find(|&(_, _, pc)| pc.piece_type() == PieceType::King)
            .map(|(sq, _, _)| sq)
    }

    /// Relocate whatever is on `from` to `to` and empty `from`.
    ///
    /// No legality check; an occupant of `to` is overwritten. The moved piece
    /// keeps its identity. `from` always ends up empty, even when it equals `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        log::trace!("move {from} -> {to}");
        self.slots[to.index()] = self.slots[from.index()].take();
    }

    /// Exchange the occupants of two squares, empty or not
    pub fn swap_pieces(&mut self, sq1: Square, sq2: Square) {
        log::trace!("swap {sq1} <-> {sq2}");
        self.slots.swap(sq1.index(), sq2.index());
    }

    /// Same pieces on the same squares, ignoring identities
    pub fn same_placement(&self, other: &Board) -> bool {
        Square::all().all(|sq| self.get_piece(sq) == other.get_piece(sq))
    }
}

impl Default for Board {
    /// Standard starting position
    fn default() -> Self {
        create_default_board()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank.to_char())?;
            for file in File::ALL {
                let c = self.get_piece(Square::new(file, *rank)).map_or(EMPTY_SQUARE, Piece::glyph);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in File::ALL {
            write!(f, "{}", file.to_char())?;
        }
        writeln!(f)
    }
}
