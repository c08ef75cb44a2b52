//! Pawn move generation.
//!
//! Single and double advances, diagonal captures and en passant. Promotion
//! is not decided here: a move onto the far rank is flagged as a promotion
//! by `Move` itself and always queens.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::respects_pin;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let pawn = Piece::new(side, PieceKind::Pawn);
    let forward = side.pawn_direction();

    let push = Direction::new(forward, 0);
    if respects_pin(pin, push) {
        if let Some(one_step) = from.step(push, 1).filter(|sq| board.is_empty(*sq)) {
            out.push(Move::from_piece(from, one_step, pawn, board));

            if from.row == side.pawn_home_row() {
                if let Some(two_step) = from.step(push, 2).filter(|sq| board.is_empty(*sq)) {
                    out.push(Move::from_piece(from, two_step, pawn, board));
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let diagonal = Direction::new(forward, d_col);
        if !respects_pin(pin, diagonal) {
            continue;
        }
        let Some(to) = from.step(diagonal, 1) else {
            continue;
        };

        match board.get(to) {
            Some(target) if target.color != side => {
                out.push(Move::from_piece(from, to, pawn, board));
            }
            Some(_) => {}
            None if game_state.en_passant_target() == Some(to) => {
                let passed = board.get(Square::new(from.row, to.col));
                if passed == Some(Piece::new(side.opposite(), PieceKind::Pawn))
                    && !en_passant_exposes_king(game_state, from, to)
                {
                    out.push(Move::en_passant(from, to, pawn));
                }
            }
            None => {}
        }
    }
}

/// En passant empties two squares of the pawn's rank at once, which a normal
/// pin scan cannot see. Play it out on a scratch board and look for any
/// attack on the own king, the rank-wise rook/queen included.
fn en_passant_exposes_king(game_state: &GameState, from: Square, to: Square) -> bool {
    let side = game_state.side_to_move();
    let mut board = *game_state.board();
    let pawn = board.get(from);

    board.set(from, None);
    board.set(Square::new(from.row, to.col), None);
    board.set(to, pawn);

    is_king_in_check(&board, side, game_state.king_square(side))
}
