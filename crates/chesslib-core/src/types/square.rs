//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{File, Rank};
use crate::error::{ChessError, ChessResult};

/// 升目（0-63）
///
/// 配置: index = rank * 8 + file
/// a1=0, b1=1, ..., h1=7, a2=8, ..., h8=63
/// 外部表現は "e4" のような2文字の升目表記
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// インデックスから生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Square::NUM { Some(Square(index as u8)) } else { None }
    }

    /// 筋・段方向にずらした升目。盤外ならNone（端で折り返さない）
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = (self.0 % 8) as i16 + file_delta as i16;
        let rank = (self.0 / 8) as i16 + rank_delta as i16;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// 升目表記（"e4"等）に変換
    pub fn to_label(self) -> String {
        self.to_string()
    }

    /// 升目表記（"e4"等）から変換。ちょうど2文字、筋は小文字
    pub fn from_label(label: &str) -> ChessResult<Square> {
        let mut chars = label.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => File::from_char(f).zip(Rank::from_char(r)),
            _ => None,
        };
        parsed
            .map(|(file, rank)| Square::new(file, rank))
            .ok_or_else(|| ChessError::InvalidSquareLabel(label.to_string()))
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM as u8).map(Square)
    }
}

/// 升目表記からインデックスへ（"a1" -> 0, "h8" -> 63）
pub fn square_to_index(label: &str) -> ChessResult<usize> {
    Square::from_label(label).map(Square::index)
}

/// インデックスから升目表記へ（0 -> "a1", 63 -> "h8"）
pub fn index_to_square(index: usize) -> ChessResult<String> {
    Square::from_index(index)
        .map(Square::to_label)
        .ok_or(ChessError::IndexOutOfRange(index))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_label(s)
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_label(&s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_label()
    }
}
