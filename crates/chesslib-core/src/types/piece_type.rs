//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

/// 駒種（色の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

/// 駒文字テーブル（`PieceType::index()` で引く）: (白, 黒)
const GLYPHS: [(char, char); PieceType::NUM] = [
    ('K', 'k'),
    ('Q', 'q'),
    ('R', 'r'),
    ('B', 'b'),
    ('N', 'n'),
    ('P', 'p'),
];

/// 駒の価値テーブル（`PieceType::index()` で引く）
const VALUES: [u32; PieceType::NUM] = [0, 9, 5, 3, 3, 1];

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 6;

    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 白駒の文字
    #[inline]
    pub const fn white_glyph(self) -> char {
        GLYPHS[self.index()].0
    }

    /// 黒駒の文字
    #[inline]
    pub const fn black_glyph(self) -> char {
        GLYPHS[self.index()].1
    }

    /// 駒の価値（指し手生成では使わない）
    #[inline]
    pub const fn value(self) -> u32 {
        VALUES[self.index()]
    }

    /// 遠方駒（飛・角・女王）かどうか
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::Rook | PieceType::Bishop)
    }
}
