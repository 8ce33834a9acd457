//! Error types for square addressing and board decoding

use crate::types::Square;

/// Errors reported by the chess core
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Board text is not exactly 64 characters long
    #[error("{0} squares is not a valid board size. A classic chess board has 64 squares.")]
    InvalidBoardSize(usize),

    /// Board text contains a character that is neither a piece glyph nor '.'
    #[error(
        "Character '{glyph}' at position {position} ({square}) does not represent a piece or empty square on the chess board."
    )]
    UnrecognizedPieceGlyph {
        glyph: char,
        /// Character offset in the decoded string
        position: usize,
        /// Square the offset maps to under the decode perspective
        square: Square,
    },

    /// Square label is not a lowercase file a-h followed by a rank 1-8
    #[error("Invalid square label: {0:?}")]
    InvalidSquareLabel(String),

    /// Square index outside 0..64
    #[error("Square index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Result type for chess core operations
pub type ChessResult<T> = Result<T, ChessError>;
