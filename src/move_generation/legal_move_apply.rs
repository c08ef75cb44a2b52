//! In-place make/undo.
//!
//! `apply_move` and `revert_last_move` are exact inverses: every board cell,
//! king cache, castling right, en-passant target and history entry touched
//! by one is restored by the other.

use log::trace;

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let mover = mv.piece_moved();
    trace!("make {} ({})", mv.chess_notation(), mover.color);

    game_state.board.set(mv.start(), None);
    game_state.board.set(mv.end(), Some(mv.piece_placed()));

    if mover.kind == PieceKind::King {
        game_state.king_squares[mover.color.index()] = mv.end();
    }

    game_state.en_passant_target =
        if mover.kind == PieceKind::Pawn && mv.start().row.abs_diff(mv.end().row) == 2 {
            Some(Square::new((mv.start().row + mv.end().row) / 2, mv.start().col))
        } else {
            None
        };

    if mv.is_en_passant() {
        game_state.board.set(mv.en_passant_capture_square(), None);
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.board.get(rook_from);
        game_state.board.set(rook_to, rook);
        game_state.board.set(rook_from, None);
    }

    game_state.castling_rights = updated_castling_rights(game_state.castling_rights, &mv);

    game_state.move_log.push(mv);
    game_state.history.push(UndoState {
        en_passant_target: game_state.en_passant_target,
        castling_rights: game_state.castling_rights,
    });
    game_state.side_to_move = game_state.side_to_move.opposite();
}

pub fn revert_last_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_log.pop()?;
    let mover = mv.piece_moved();
    trace!("undo {} ({})", mv.chess_notation(), mover.color);

    game_state.board.set(mv.start(), Some(mover));
    game_state.board.set(mv.end(), mv.piece_captured());

    if mover.kind == PieceKind::King {
        game_state.king_squares[mover.color.index()] = mv.start();
    }

    if mv.is_en_passant() {
        game_state.board.set(mv.end(), None);
        game_state
            .board
            .set(mv.en_passant_capture_square(), mv.piece_captured());
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.board.get(rook_to);
        game_state.board.set(rook_from, rook);
        game_state.board.set(rook_to, None);
    }

    game_state.history.pop();
    if let Some(previous) = game_state.history.last() {
        game_state.en_passant_target = previous.en_passant_target;
        game_state.castling_rights = previous.castling_rights;
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.check_info = CheckInfo::default();
    game_state.checkmate = false;
    game_state.stalemate = false;

    Some(mv)
}

/// Rook origin and destination for a castle move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.end().row;
    if mv.end().col > mv.start().col {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, mv.end().col - 1),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, mv.end().col + 1),
        )
    }
}

fn updated_castling_rights(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mut rights = rights;
    let mover = mv.piece_moved();

    match mover.kind {
        PieceKind::King => rights = rights.without_color(mover.color),
        PieceKind::Rook => rights = revoke_corner(rights, mover.color, mv.start()),
        _ => {}
    }

    // A rook taken on its corner takes its side's right with it.
    if let Some(captured) = mv.piece_captured() {
        if captured.kind == PieceKind::Rook {
            rights = revoke_corner(rights, captured.color, mv.end());
        }
    }

    rights
}

fn revoke_corner(rights: CastlingRights, color: Color, square: Square) -> CastlingRights {
    if square.row != color.back_row() {
        return rights;
    }
    match square.col {
        QUEENSIDE_ROOK_COL => rights.without_queenside(color),
        KINGSIDE_ROOK_COL => rights.without_kingside(color),
        _ => rights,
    }
}
