//! Short, human-oriented move notation used by move lists.
//!
//! Castles render as `O-O` / `O-O-O`, pawn moves as `e4` or `exd5`, piece
//! moves as `Nf3` or `Qxe7`. Promotions append `=Q`. No disambiguation or
//! check suffixes are produced.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn move_to_algebraic(mv: &Move) -> String {
    if mv.is_castle() {
        return if mv.end().col > mv.start().col {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        };
    }

    let mut out = String::new();
    let end = mv.end().name();

    if mv.piece_moved().kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(char::from(b'a' + mv.start().col));
            out.push('x');
        }
        out.push_str(&end);
        if mv.is_pawn_promotion() {
            out.push_str("=Q");
        }
        return out;
    }

    out.push(mv.piece_moved().kind.code());
    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&end);
    out
}
