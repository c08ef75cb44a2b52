use std::sync::atomic::AtomicBool;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Takes the most valuable piece on offer, ties broken at random.
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: engine_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: engine_rng(Some(seed)),
        }
    }

    #[inline]
    fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Material won on the spot, counting a promotion as a new queen.
    fn move_value(mv: &Move) -> i32 {
        let capture = mv
            .piece_captured()
            .map_or(0, |piece| Self::piece_value(piece.kind));
        let promotion = if mv.is_pawn_promotion() {
            Self::piece_value(PieceKind::Queen) - Self::piece_value(PieceKind::Pawn)
        } else {
            0
        };
        capture + promotion
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Mailbox Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
        _stop: &AtomicBool,
    ) -> Option<Move> {
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in legal_moves {
            let mut value = Self::move_value(mv);

            // Mate in one beats any material.
            game_state.make_move(*mv);
            if game_state.get_valid_moves().is_empty() && game_state.checkmate() {
                value = i32::MAX;
            }
            game_state.undo_move();

            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if value == best_value {
                best_moves.push(*mv);
            }
        }

        best_moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn prefers_the_biggest_capture() {
        let board = Board::from_code_rows(&[
            "-- -- -- -- bK -- -- --",
            "-- -- bp -- bQ -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- wN -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "wK -- -- -- -- -- -- --",
        ])
        .expect("test board should parse");
        let mut game = GameState::from_position(board, Color::White, CastlingRights::NONE, None)
            .expect("test position should be valid");
        let moves = game.get_valid_moves();

        let mut engine = GreedyEngine::with_seed(3);
        let picked = engine
            .choose_move(&mut game, &moves, &AtomicBool::new(false))
            .expect("white has moves");
        assert_eq!(picked.chess_notation(), "d5e7");
    }

    #[test]
    fn finds_mate_in_one() {
        let mut game = GameState::new_game();
        for notation in ["f2f3", "e7e5", "g2g4"] {
            let moves = game.get_valid_moves();
            let mv = moves
                .into_iter()
                .find(|m| m.chess_notation() == notation)
                .expect("opening move should be legal");
            game.make_move(mv);
        }
        let moves = game.get_valid_moves();
        let before = game.clone();

        let mut engine = GreedyEngine::with_seed(11);
        let picked = engine
            .choose_move(&mut game, &moves, &AtomicBool::new(false))
            .expect("black has moves");
        assert_eq!(picked.chess_notation(), "d8h4");
        assert_eq!(game.board(), before.board());
        assert_eq!(game.move_log().len(), 3);
    }
}
