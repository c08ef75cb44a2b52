use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::Move;

/// A pinned knight can never stay on its pin line, so it emits nothing.
pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    if pin.is_some() {
        return;
    }
    let knight = Piece::new(game_state.side_to_move(), PieceKind::Knight);
    generate_step_moves(game_state.board(), from, knight, &KNIGHT_OFFSETS, out);
}
