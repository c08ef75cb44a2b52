//! Primitive value types shared by every layer of the rules engine.
//!
//! Squares are addressed as `(row, col)` with row 0 being Black's back rank
//! and column 0 the a-file, matching the layout of [`Board`].
//!
//! [`Board`]: crate::game_state::board::Board

use std::fmt;

use crate::errors::{ChessError, ChessResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::castling_rights::CastlingRights;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns of this color start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Second symbol of the board cell code. Pawns use a lower-case `p`.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'p' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty cells are `None` at the board level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-symbol cell code, e.g. `wK` or `bp`.
    pub fn code(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.color.code());
        out.push(self.kind.code());
        out
    }

    /// Parses a two-symbol cell code. `--` decodes to `None`.
    pub fn from_code(code: &str) -> ChessResult<Option<Self>> {
        if code == EMPTY_CODE {
            return Ok(None);
        }

        let mut chars = code.chars();
        let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidPieceCode {
                code: code.to_owned(),
            });
        };

        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => {
                return Err(ChessError::InvalidPieceCode {
                    code: code.to_owned(),
                })
            }
        };
        let kind = PieceKind::from_code(kind).ok_or_else(|| ChessError::InvalidPieceCode {
            code: code.to_owned(),
        })?;

        Ok(Some(Piece::new(color, kind)))
    }
}

/// Cell code of an empty square.
pub const EMPTY_CODE: &str = "--";

/// Board coordinate. Row 0 is Black's back rank, column 0 the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Caller guarantees `row < 8 && col < 8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub fn step(self, direction: Direction, distance: i8) -> Option<Self> {
        self.offset(direction.d_row * distance, direction.d_col * distance)
    }

    /// Algebraic name such as `e4`.
    pub fn name(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(char::from(b'a' + self.col));
        out.push(char::from(b'8' - self.row));
        out
    }

    pub fn from_name(name: &str) -> ChessResult<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquareName {
                name: name.to_owned(),
            });
        }

        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(ChessError::InvalidSquareName {
                name: name.to_owned(),
            });
        }

        Ok(Self::new(7 - rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Unit step between squares; knight offsets are stored the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// True when moving along `self` keeps a piece on the line `line`.
    #[inline]
    pub fn is_along(self, line: Direction) -> bool {
        self == line || self == line.reversed()
    }
}
