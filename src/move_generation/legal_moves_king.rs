//! King steps and castling.
//!
//! Plain steps are pseudo-legal: they avoid allied pieces only and the
//! legality filter drops those landing on attacked squares. Castling is
//! fully checked here since its path squares are not destinations.

use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KING_OFFSETS, KING_START_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let king = Piece::new(game_state.side_to_move(), PieceKind::King);
    generate_step_moves(game_state.board(), from, king, &KING_OFFSETS, out);
}

pub fn generate_castle_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let row = side.back_row();
    if from != Square::new(row, KING_START_COL) {
        return;
    }

    let board = game_state.board();
    let enemy = side.opposite();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let rook = Some(Piece::new(side, PieceKind::Rook));
    let rights = game_state.castling_rights();

    if rights.kingside(side) && board.get(Square::new(row, KINGSIDE_ROOK_COL)) == rook {
        let crossed = Square::new(row, KING_START_COL + 1);
        let landing = Square::new(row, KING_START_COL + 2);
        if board.is_empty(crossed)
            && board.is_empty(landing)
            && !is_square_attacked(board, crossed, enemy)
            && !is_square_attacked(board, landing, enemy)
        {
            out.push(Move::castle(from, landing, king));
        }
    }

    if rights.queenside(side) && board.get(Square::new(row, QUEENSIDE_ROOK_COL)) == rook {
        let crossed = Square::new(row, KING_START_COL - 1);
        let landing = Square::new(row, KING_START_COL - 2);
        let rook_path = Square::new(row, KING_START_COL - 3);
        // Only the king's own path must be safe; the b-file square may be hit.
        if board.is_empty(crossed)
            && board.is_empty(landing)
            && board.is_empty(rook_path)
            && !is_square_attacked(board, crossed, enemy)
            && !is_square_attacked(board, landing, enemy)
        {
            out.push(Move::castle(from, landing, king));
        }
    }
}
