//! Engine abstraction used by the search worker and the match harness.
//!
//! An engine only ever sees a private clone of the game, so it may make and
//! undo moves freely while it thinks.

use std::sync::atomic::AtomicBool;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks one of `legal_moves`, or `None` to leave the choice to the
    /// caller. Long-running engines should poll `stop` and return early once
    /// it is set.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
        stop: &AtomicBool,
    ) -> Option<Move>;
}

/// Reproducible generator when a seed is given, OS-seeded otherwise.
pub fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
