use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    /// Tallies a leaf reached by `mv`; `game_state` is the position after it.
    fn record_leaf(&mut self, game_state: &mut GameState, mv: &Move) {
        self.nodes += 1;

        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_pawn_promotion() {
            self.promotions += 1;
        }

        let side = game_state.side_to_move();
        if is_king_in_check(game_state.board(), side, game_state.king_square(side)) {
            self.checks += 1;
            if game_state.get_valid_moves().is_empty() {
                self.checkmates += 1;
            }
        }
    }
}

/// Counts leaf nodes at `depth` by walking make/undo over the legal moves.
/// The state is returned to its starting position.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Per-root-move node counts, in generation order.
pub fn divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let root_moves = game_state.get_valid_moves();
    let mut out = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        game_state.make_move(mv);
        let nodes = perft(game_state, depth - 1).nodes;
        game_state.undo_move();
        out.push((mv, nodes));
    }
    out
}

/// Same totals as [`perft`], one thread per root move, each on its own clone.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    let root_moves = root.get_valid_moves();
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local_state = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            local_state.make_move(mv);
            if depth == 1 {
                local.record_leaf(&mut local_state, &mv);
            } else {
                perft_recurse(&mut local_state, depth - 1, &mut local);
            }
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::WorkerPanicked {
            task: "perft".to_owned(),
        })?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = game_state.get_valid_moves();
    for mv in moves {
        game_state.make_move(mv);
        if depth == 1 {
            counts.record_leaf(game_state, &mv);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        game_state.undo_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    fn kiwipete() -> GameState {
        let board = Board::from_code_rows(&[
            "bR -- -- -- bK -- -- bR",
            "bp -- bp bp bQ bp bB --",
            "bB bN -- -- bp bN bp --",
            "-- -- -- wp wN -- -- --",
            "-- bp -- -- wp -- -- --",
            "-- -- wN -- -- wQ -- bp",
            "wp wp wp wB wB wp wp wp",
            "wR -- -- -- wK -- -- wR",
        ])
        .expect("kiwipete board should parse");
        GameState::from_position(board, Color::White, CastlingRights::ALL, None)
            .expect("kiwipete should be valid")
    }

    fn rook_endgame() -> GameState {
        let board = Board::from_code_rows(&[
            "-- -- -- -- -- -- -- --",
            "-- -- bp -- -- -- -- --",
            "-- -- -- bp -- -- -- --",
            "wK wp -- -- -- -- -- bR",
            "-- wR -- -- -- bp -- bK",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wp -- wp --",
            "-- -- -- -- -- -- -- --",
        ])
        .expect("endgame board should parse");
        GameState::from_position(board, Color::White, CastlingRights::NONE, None)
            .expect("endgame should be valid")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);

        let depth_three = perft(&mut game, 3);
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_leaves_the_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        perft(&mut game, 3);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.history(), before.history());
        assert!(game.move_log().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let mut game = kiwipete();

        let depth_one = perft(&mut game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&mut game, 2);
        assert_eq!(
            depth_two,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                checks: 3,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn rook_endgame_covers_horizontal_en_passant_pins() {
        let mut game = rook_endgame();
        assert_eq!(perft(&mut game, 1).nodes, 14);
        assert_eq!(perft(&mut game, 2).nodes, 191);

        let depth_three = perft(&mut game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let split = divide(&mut game, 3);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<usize>(), 8902);

        let (e2e4, nodes) = split
            .iter()
            .find(|(mv, _)| mv.chess_notation() == "e2e4")
            .expect("e2e4 should be a root move");
        assert_eq!(e2e4.id(), 6444);
        assert_eq!(*nodes, 600);
    }

    #[test]
    fn multi_threaded_perft_matches_single_threaded() {
        let game = kiwipete();
        let threaded = perft_multi_threaded(&game, 2).expect("perft workers should finish");
        let mut single = game.clone();
        assert_eq!(threaded, perft(&mut single, 2));
    }
}
