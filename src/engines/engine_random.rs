//! Random-move engine.
//!
//! Selects uniformly from the legal moves; used for diagnostics, match
//! testing and as the fallback opponent.

use std::sync::atomic::AtomicBool;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(
        &mut self,
        _game_state: &mut GameState,
        legal_moves: &[Move],
        _stop: &AtomicBool,
    ) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }
}
