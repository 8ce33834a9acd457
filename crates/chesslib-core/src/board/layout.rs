//! Board text format and the starting layout
//!
//! A board string is exactly 64 ASCII characters with no separators: '.' for an
//! empty square, an uppercase glyph for a white piece, lowercase for black.
//! Character order follows the perspective's traversal:
//!
//! - white: rank 8 down to rank 1, each rank a to h (a8 first, h1 last)
//! - black: rank 1 up to rank 8, each rank h to a (h1 first, a8 last)

use crate::error::{ChessError, ChessResult};
use crate::types::{Color, File, Piece, PieceType, Rank, Square};

use super::Board;

/// Marker for an empty square
pub const EMPTY_SQUARE: char = '.';

/// Starting position seen from white
pub const START_BOARD_STR: &str = concat!(
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
);

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Square visited at step `i` (0..64) of the perspective's traversal
#[inline]
fn traversal_square(perspective: Color, i: usize) -> Square {
    let (row, col) = match perspective {
        Color::White => (7 - i / 8, i % 8),
        Color::Black => (i / 8, 7 - i % 8),
    };
    Square::new(File::ALL[col], Rank::ALL[row])
}

/// Squares in the order the board string lists them for `perspective`
pub fn traversal(perspective: Color) -> impl Iterator<Item = Square> {
    (0..Square::NUM).map(move |i| traversal_square(perspective, i))
}

/// Standard starting position: pawns on ranks 2 and 7, pieces on ranks 1 and 8
pub fn create_default_board() -> Board {
    let mut board = Board::empty();
    for (file, pt) in File::ALL.into_iter().zip(BACK_RANK) {
        board.set_square(Square::new(file, Rank::Rank1), Some(Piece::new(pt, Color::White)));
        board.set_square(
            Square::new(file, Rank::Rank2),
            Some(Piece::new(PieceType::Pawn, Color::White)),
        );
        board.set_square(
            Square::new(file, Rank::Rank7),
            Some(Piece::new(PieceType::Pawn, Color::Black)),
        );
        board.set_square(Square::new(file, Rank::Rank8), Some(Piece::new(pt, Color::Black)));
    }
    log::debug!("created default board");
    board
}

/// Decode a board string listed from white's perspective
pub fn create_board_from_str(board_str: &str) -> ChessResult<Board> {
    create_board_from_str_with_perspective(board_str, Color::White)
}

/// Decode a board string listed in `perspective`'s traversal order
pub fn create_board_from_str_with_perspective(
    board_str: &str,
    perspective: Color,
) -> ChessResult<Board> {
    let len = board_str.chars().count();
    if len != Square::NUM {
        log::debug!("rejecting board string of {len} characters");
        return Err(ChessError::InvalidBoardSize(len));
    }

    let mut board = Board::empty();
    for (position, (glyph, sq)) in board_str.chars().zip(traversal(perspective)).enumerate() {
        if glyph == EMPTY_SQUARE {
            continue;
        }
        let Some(piece) = Piece::from_glyph(glyph) else {
            log::debug!("unrecognized glyph {glyph:?} at position {position}");
            return Err(ChessError::UnrecognizedPieceGlyph { glyph, position, square: sq });
        };
        board.set_square(sq, Some(piece));
    }
    Ok(board)
}

impl Board {
    /// Decode a board string listed from white's perspective
    pub fn from_board_str(board_str: &str) -> ChessResult<Board> {
        create_board_from_str(board_str)
    }

    /// Encode as a 64-character board string in `perspective`'s traversal order
    pub fn to_board_str(&self, perspective: Color) -> String {
        traversal(perspective)
            .map(|sq| self.get_piece(sq).map_or(EMPTY_SQUARE, Piece::glyph))
            .collect()
    }
}

impl std::str::FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        create_board_from_str(s)
    }
}
