use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, PieceType, Square};

use super::Board;

/// JSON form of a piece
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "white" | "black"
    pub color: Color,
    /// "king" | "queen" | "rook" | "bishop" | "knight" | "pawn"
    pub kind: PieceType,
}

/// One square of the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    /// "a1" ~ "h8"
    pub square: Square,
    /// null when empty
    pub piece: Option<PieceJson>,
}

/// Whole board, cells in ascending square order (a1, b1, ..., h8)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardJson {
    pub cells: Vec<CellJson>,
}

impl From<Piece> for PieceJson {
    fn from(pc: Piece) -> Self {
        PieceJson {
            color: pc.color(),
            kind: pc.piece_type(),
        }
    }
}

impl From<PieceJson> for Piece {
    fn from(pj: PieceJson) -> Self {
        Piece::new(pj.kind, pj.color)
    }
}

impl Board {
    pub fn to_json(&self) -> BoardJson {
        BoardJson {
            cells: Square::all()
                .map(|square| CellJson {
                    square,
                    piece: self.get_piece(square).map(PieceJson::from),
                })
                .collect(),
        }
    }

    /// Rebuild a board. Squares missing from `cells` stay empty; a square listed
    /// twice takes its last entry.
    pub fn from_json(json: &BoardJson) -> Board {
        let mut board = Board::empty();
        for cell in &json.cells {
            board.set_square(cell.square, cell.piece.map(Piece::from));
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let board = Board::default();
        let json = serde_json::to_value(board.to_json()).unwrap();
        let cells = json["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[4]["square"], "e1");
        assert_eq!(cells[4]["piece"]["color"], "white");
        assert_eq!(cells[4]["piece"]["kind"], "king");
        assert!(cells[28]["piece"].is_null());
    }

    #[test]
    fn test_json_rebuild() {
        let board = Board::default();
        let text = serde_json::to_string(&board.to_json()).unwrap();
        let parsed: BoardJson = serde_json::from_str(&text).unwrap();
        assert!(Board::from_json(&parsed).same_placement(&board));
    }

    #[test]
    fn test_json_rejects_bad_square() {
        let text = r#"{"cells":[{"square":"j9","piece":null}]}"#;
        assert!(serde_json::from_str::<BoardJson>(text).is_err());
    }
}
