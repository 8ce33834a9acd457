//! 基本型モジュール
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! File, Rank
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//! ```

mod color;
mod file;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod square;

pub use color::Color;
pub use file::File;
pub use moves::Move;
pub use piece::{Piece, PieceId};
pub use piece_type::PieceType;
pub use rank::Rank;
pub use square::{Square, index_to_square, square_to_index};
