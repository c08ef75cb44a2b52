//! Immutable description of a single ply.
//!
//! A `Move` captures everything make/undo needs: both squares, the piece that
//! moved, the piece it removed, and the special-move flags. It is built from
//! the board as it stands *before* the move and never changes afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::utils::algebraic::move_to_algebraic;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_pawn_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
}

impl Move {
    /// Plain move read off `board`. Returns `None` when `start` is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        Self::with_flags(start, end, board, false, false)
    }

    /// Move with caller-asserted special flags. For en passant the captured
    /// piece is the enemy pawn beside `start`, not the empty landing square.
    pub fn with_flags(
        start: Square,
        end: Square,
        board: &Board,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Option<Self> {
        let piece = board.get(start)?;
        Some(if is_en_passant {
            Self::en_passant(start, end, piece)
        } else if is_castle {
            Self::castle(start, end, piece)
        } else {
            Self::from_piece(start, end, piece, board)
        })
    }

    #[inline]
    pub(crate) fn from_piece(start: Square, end: Square, piece: Piece, board: &Board) -> Self {
        Self::build(start, end, piece, board.get(end), false, false)
    }

    #[inline]
    pub(crate) fn en_passant(start: Square, end: Square, pawn: Piece) -> Self {
        let captured = Piece::new(pawn.color.opposite(), PieceKind::Pawn);
        Self::build(start, end, pawn, Some(captured), true, false)
    }

    #[inline]
    pub(crate) fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self::build(start, end, king, None, false, true)
    }

    fn build(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_pawn_promotion,
            is_en_passant,
            is_castle,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Piece standing on `end` after the move. Promotions always queen.
    #[inline]
    pub fn piece_placed(&self) -> Piece {
        if self.is_pawn_promotion {
            Piece::new(self.piece_moved.color, PieceKind::Queen)
        } else {
            self.piece_moved
        }
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    /// Identity key built from the four coordinates only.
    #[inline]
    pub fn id(&self) -> u16 {
        self.start.row as u16 * 1000
            + self.start.col as u16 * 100
            + self.end.row as u16 * 10
            + self.end.col as u16
    }

    /// Coordinate notation such as `e2e4`.
    pub fn chess_notation(&self) -> String {
        move_to_long_algebraic(self)
    }
}

/// Moves compare by identity key only; special-move flags do not take part.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_algebraic(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn identity_key_encodes_four_coordinates() {
        let board = Board::starting_position();
        let mv = Move::new(sq("e2"), sq("e4"), &board).unwrap();
        assert_eq!(mv.id(), 6444);
        assert!(!mv.is_capture());
        assert!(!mv.is_pawn_promotion());
        assert_eq!(mv.piece_moved(), Piece::new(Color::White, PieceKind::Pawn));
    }

    #[test]
    fn moves_from_empty_squares_are_not_built() {
        let board = Board::starting_position();
        assert!(Move::new(sq("e4"), sq("e5"), &board).is_none());
    }

    #[test]
    fn equality_ignores_special_flags() {
        let board = Board::starting_position();
        let plain = Move::new(sq("e1"), sq("g1"), &board).unwrap();
        let castle = Move::with_flags(sq("e1"), sq("g1"), &board, false, true).unwrap();
        assert!(castle.is_castle());
        assert!(!plain.is_castle());
        assert_eq!(plain, castle);
    }

    #[test]
    fn en_passant_captures_the_adjacent_pawn() {
        let board = Board::from_code_rows(&[
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- bp wp -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .unwrap();
        let mv = Move::with_flags(sq("e5"), sq("d6"), &board, true, false).unwrap();
        assert!(mv.is_capture());
        assert_eq!(
            mv.piece_captured(),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(mv.en_passant_capture_square(), sq("d5"));
    }

    #[test]
    fn promotion_is_derived_and_always_queens() {
        let board = Board::from_code_rows(&[
            "-- -- -- -- bK -- -- --",
            "wp -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .unwrap();
        let mv = Move::new(sq("a7"), sq("a8"), &board).unwrap();
        assert!(mv.is_pawn_promotion());
        assert_eq!(mv.piece_placed(), Piece::new(Color::White, PieceKind::Queen));
    }
}
