//! Rook move generation.
//!
//! Casts the four orthogonal rays from one rook of the side to move,
//! constrained to the pin line when the rook is pinned.

use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let rook = Piece::new(game_state.side_to_move(), PieceKind::Rook);
    generate_sliding_moves(game_state.board(), from, rook, &ROOK_DIRECTIONS, pin, out);
}
