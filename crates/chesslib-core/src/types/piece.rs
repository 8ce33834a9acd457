//! 駒（Piece）

use std::collections::BTreeSet;
use std::fmt;

use super::{Color, PieceType, Square};
use crate::board::Board;

/// 駒（駒種 + 色）。自分の升目は持たず、盤側で管理する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Piece {
        Piece { piece_type, color }
    }

    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.piece_type.value()
    }

    #[inline]
    pub const fn white_glyph(self) -> char {
        self.piece_type.white_glyph()
    }

    #[inline]
    pub const fn black_glyph(self) -> char {
        self.piece_type.black_glyph()
    }

    /// 自分の色に応じた文字
    #[inline]
    pub const fn glyph(self) -> char {
        match self.color {
            Color::White => self.white_glyph(),
            Color::Black => self.black_glyph(),
        }
    }

    /// 12種類の駒文字から駒に変換
    pub fn from_glyph(c: char) -> Option<Piece> {
        PieceType::ALL.into_iter().find_map(|pt| {
            if c == pt.white_glyph() {
                Some(Piece::new(pt, Color::White))
            } else if c == pt.black_glyph() {
                Some(Piece::new(pt, Color::Black))
            } else {
                None
            }
        })
    }

    /// `from` にいるこの駒の移動先
    ///
    /// [`crate::movegen::legal_moves`] を参照
    pub fn legal_moves(self, board: &Board, from: Square) -> BTreeSet<Square> {
        crate::movegen::legal_moves(self, board, from)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 盤上の駒の識別子
///
/// 配置時に割り当てられ、`move_piece` / `swap_pieces` で駒と一緒に移動する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u64);

impl PieceId {
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
