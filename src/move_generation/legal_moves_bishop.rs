//! Bishop move generation along the four diagonals.

use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let bishop = Piece::new(game_state.side_to_move(), PieceKind::Bishop);
    generate_sliding_moves(game_state.board(), from, bishop, &BISHOP_DIRECTIONS, pin, out);
}
