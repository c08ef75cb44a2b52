//! Coordinate notation (`e2e4`) for moves.
//!
//! This is how a typed or clicked square pair is matched back to one of the
//! legal moves of a position: both squares are parsed and the move with the
//! same identity key is looked up.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = mv.start().name();
    out.push_str(&mv.end().name());
    out
}

/// Parses `e2e4` into its two squares. A trailing promotion letter is
/// accepted only as `q`, the one promotion the engine plays.
pub fn long_algebraic_to_squares(notation: &str) -> ChessResult<(Square, Square)> {
    let invalid = || ChessError::InvalidMoveNotation {
        notation: notation.to_owned(),
    };

    if !notation.is_ascii() {
        return Err(invalid());
    }
    match notation.len() {
        4 => {}
        5 if notation[4..].eq_ignore_ascii_case("q") => {}
        _ => return Err(invalid()),
    }

    let start = Square::from_name(&notation[0..2]).map_err(|_| invalid())?;
    let end = Square::from_name(&notation[2..4]).map_err(|_| invalid())?;
    Ok((start, end))
}

/// Finds the legal move matching `notation` among `valid_moves`.
pub fn find_valid_move(valid_moves: &[Move], notation: &str) -> ChessResult<Move> {
    let (start, end) = long_algebraic_to_squares(notation)?;
    valid_moves
        .iter()
        .copied()
        .find(|mv| mv.start() == start && mv.end() == end)
        .ok_or_else(|| ChessError::IllegalMove {
            notation: notation.to_owned(),
        })
}
