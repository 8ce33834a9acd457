//! 指し手（Move）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Square;

/// (移動元, 移動先) の組。移動元、移動先の順に順序付け
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl From<(Square, Square)> for Move {
    fn from((from, to): (Square, Square)) -> Move {
        Move { from, to }
    }
}
