//! Chess board model and per-piece move generation
//!
//! - [`types`]: colors, files, ranks, squares, pieces, moves
//! - [`board`]: the 64-slot board, its text format and JSON view
//! - [`movegen`]: destination squares for each piece kind
//!
//! Turn order, check detection, castling, en passant and promotion belong to
//! the game-flow layer above this crate.

pub mod board;
pub mod error;
pub mod movegen;
pub mod types;

pub use board::{
    Board, BoardJson, CellJson, EMPTY_SQUARE, PieceJson, START_BOARD_STR, create_board_from_str,
    create_board_from_str_with_perspective, create_default_board,
};
pub use error::{ChessError, ChessResult};
pub use types::{
    Color, File, Move, Piece, PieceId, PieceType, Rank, Square, index_to_square, square_to_index,
};
