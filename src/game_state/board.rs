//! 8×8 mailbox board.
//!
//! Pure data: each cell holds `Option<Piece>`, indexed by [`Square`]. All
//! rule knowledge lives in `move_generation`.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in (0u8..).zip(BACK_RANK) {
            for color in [Color::White, Color::Black] {
                board.set(
                    Square::new(color.back_row(), col),
                    Some(Piece::new(color, kind)),
                );
                board.set(
                    Square::new(color.pawn_home_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Builds a board from eight rows of eight space-separated cell codes,
    /// row 0 (Black's back rank) first.
    pub fn from_code_rows(rows: &[&str; 8]) -> ChessResult<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(ChessError::InvalidRowWidth {
                    row,
                    cells: codes.len(),
                });
            }
            for (col, code) in codes.into_iter().enumerate() {
                board.cells[row][col] = Piece::from_code(code)?;
            }
        }
        Ok(board)
    }

    /// Cell codes in the same layout `from_code_rows` accepts.
    pub fn to_code_rows(&self) -> [String; 8] {
        std::array::from_fn(|row| {
            self.cells[row]
                .iter()
                .map(|cell| cell.map_or_else(|| EMPTY_CODE.to_owned(), Piece::code))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Every occupied square with its piece, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let square = Square::new(row, col);
                self.get(square).map(|piece| (square, piece))
            })
        })
    }

    pub fn find(&self, wanted: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| *piece == wanted)
            .map(|(square, _)| square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_code_rows() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces_and_kings_on_e_file() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::new(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert!(board.is_empty(Square::new(4, 4)));
    }

    const STARTING_ROWS: [&str; 8] = [
        "bR bN bB bQ bK bB bN bR",
        "bp bp bp bp bp bp bp bp",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "wp wp wp wp wp wp wp wp",
        "wR wN wB wQ wK wB wN wR",
    ];

    #[test]
    fn starting_position_matches_its_cell_codes() {
        let board = Board::starting_position();
        assert_eq!(board.to_code_rows(), STARTING_ROWS.map(str::to_owned));
        assert_eq!(Board::from_code_rows(&STARTING_ROWS), Ok(board));
    }

    #[test]
    fn code_rows_round_trip_through_text() {
        let board = Board::starting_position();
        let rows = board.to_code_rows();
        let refs: [&str; 8] = std::array::from_fn(|i| rows[i].as_str());
        assert_eq!(Board::from_code_rows(&refs).unwrap(), board);
    }

    #[test]
    fn short_rows_are_rejected() {
        let mut rows = STARTING_ROWS;
        rows[3] = "-- --";
        assert_eq!(
            Board::from_code_rows(&rows),
            Err(ChessError::InvalidRowWidth { row: 3, cells: 2 })
        );
    }
}
