//! Queen move generation: the union of the rook and bishop rays.

use crate::game_state::chess_rules::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let queen = Piece::new(game_state.side_to_move(), PieceKind::Queen);
    let board = game_state.board();
    generate_sliding_moves(board, from, queen, &ROOK_DIRECTIONS, pin, out);
    generate_sliding_moves(board, from, queen, &BISHOP_DIRECTIONS, pin, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;

    #[test]
    fn queen_combines_both_ray_sets() {
        let board = Board::from_code_rows(&[
            "bK -- -- -- -- -- -- wK",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- wQ -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
        ])
        .expect("test board should parse");
        let game = GameState::from_position(board, Color::White, CastlingRights::NONE, None)
            .expect("test position should be valid");

        let mut moves = Vec::<Move>::new();
        generate_queen_moves(&game, Square::new(4, 3), None, &mut moves);

        // 27 open-board squares less h8, held by the own king.
        assert_eq!(moves.len(), 26);
        assert!(moves
            .iter()
            .all(|m| m.piece_moved().kind == PieceKind::Queen));
    }
}
