//! Background search worker.
//!
//! The worker owns a clone of the game and the engine for the duration of one
//! search, so the caller's state is never touched while the engine thinks.
//! The chosen move travels back over a one-slot channel; the engine itself is
//! handed back through the join handle once the thread finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Still thinking.
    Pending,
    /// The engine answered; `None` means it declined to pick.
    Finished(Option<Move>),
}

pub struct SearchWorker {
    engine_name: String,
    stop: Arc<AtomicBool>,
    receiver: Receiver<Option<Move>>,
    handle: JoinHandle<Box<dyn Engine>>,
}

impl SearchWorker {
    /// Starts `engine` on its own thread against a private clone of
    /// `game_state`.
    pub fn spawn(mut engine: Box<dyn Engine>, game_state: &GameState) -> Self {
        let engine_name = engine.name().to_owned();
        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = sync_channel::<Option<Move>>(1);

        let mut state = game_state.clone();
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let legal_moves = state.get_valid_moves();
            let choice = engine.choose_move(&mut state, &legal_moves, &thread_stop);
            // The caller may have given up on this search already.
            let _ = sender.send(choice);
            engine
        });

        debug!("search worker started for {engine_name}");
        Self {
            engine_name,
            stop,
            receiver,
            handle,
        }
    }

    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// Non-blocking poll. A result is delivered once.
    pub fn try_result(&self) -> ChessResult<SearchStatus> {
        match self.receiver.try_recv() {
            Ok(choice) => Ok(SearchStatus::Finished(choice)),
            Err(TryRecvError::Empty) => Ok(SearchStatus::Pending),
            Err(TryRecvError::Disconnected) => Err(self.disconnected()),
        }
    }

    /// Blocks for at most `timeout`. A result is delivered once.
    pub fn wait_timeout(&self, timeout: Duration) -> ChessResult<SearchStatus> {
        match self.receiver.recv_timeout(timeout) {
            Ok(choice) => Ok(SearchStatus::Finished(choice)),
            Err(RecvTimeoutError::Timeout) => Ok(SearchStatus::Pending),
            Err(RecvTimeoutError::Disconnected) => Err(self.disconnected()),
        }
    }

    /// Asks the engine to wrap up. Its eventual answer is still delivered.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stops the search, waits for the thread and returns the engine.
    pub fn finish(self) -> ChessResult<Box<dyn Engine>> {
        self.stop();
        self.handle.join().map_err(|_| ChessError::WorkerPanicked {
            task: format!("search worker for `{}`", self.engine_name),
        })
    }

    fn disconnected(&self) -> ChessError {
        ChessError::WorkerDisconnected {
            engine: self.engine_name.clone(),
        }
    }
}

/// The engine's pick when it is one of `legal_moves`, otherwise a uniformly
/// random legal move. `None` only when there are no legal moves at all.
///
/// The returned move is always the generator's own instance, so its
/// special-move flags are authoritative.
pub fn resolve_choice<R: Rng + ?Sized>(
    choice: Option<Move>,
    legal_moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    if let Some(choice) = choice {
        if let Some(legal) = legal_moves.iter().find(|mv| **mv == choice) {
            return Some(*legal);
        }
        warn!(
            "engine chose {} which is not legal here, picking at random",
            choice.chess_notation()
        );
    }
    legal_moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::engine_rng;
    use crate::game_state::chess_types::*;

    /// Spins until stopped, then declines to choose.
    struct StallingEngine;

    impl Engine for StallingEngine {
        fn name(&self) -> &str {
            "stalling"
        }

        fn choose_move(
            &mut self,
            _game_state: &mut GameState,
            _legal_moves: &[Move],
            stop: &AtomicBool,
        ) -> Option<Move> {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(1));
            }
            None
        }
    }

    #[test]
    fn worker_delivers_a_legal_move_and_leaves_caller_state_alone() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let worker = SearchWorker::spawn(Box::new(RandomEngine::with_seed(5)), &game);

        let status = worker
            .wait_timeout(Duration::from_secs(5))
            .expect("worker should answer");
        let SearchStatus::Finished(Some(mv)) = status else {
            panic!("expected a move, got {status:?}");
        };
        assert!(game.get_valid_moves().contains(&mv));
        assert_eq!(game.board(), before.board());

        let engine = worker.finish().expect("worker thread should join");
        assert_eq!(engine.name(), "Mailbox Random");
    }

    #[test]
    fn stalled_worker_is_pending_until_stopped() {
        let game = GameState::new_game();
        let worker = SearchWorker::spawn(Box::new(StallingEngine), &game);

        assert_eq!(
            worker.wait_timeout(Duration::from_millis(20)),
            Ok(SearchStatus::Pending)
        );
        worker.stop();
        assert_eq!(
            worker.wait_timeout(Duration::from_secs(5)),
            Ok(SearchStatus::Finished(None))
        );
        assert!(worker.finish().is_ok());
    }

    #[test]
    fn polling_sees_pending_then_finished() {
        let game = GameState::new_game();
        let worker = SearchWorker::spawn(Box::new(StallingEngine), &game);
        assert_eq!(worker.try_result(), Ok(SearchStatus::Pending));

        worker.stop();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        let status = loop {
            match worker.try_result().expect("worker should stay connected") {
                SearchStatus::Pending if std::time::Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(1));
                }
                status => break status,
            }
        };
        assert_eq!(status, SearchStatus::Finished(None));
        assert!(worker.finish().is_ok());
    }

    #[test]
    fn resolve_choice_keeps_legal_picks_and_replaces_illegal_ones() {
        let mut game = GameState::new_game();
        let legal = game.get_valid_moves();
        let mut rng = engine_rng(Some(9));

        let e2e4 = legal
            .iter()
            .copied()
            .find(|m| m.chess_notation() == "e2e4")
            .expect("e2e4 should be legal");
        assert_eq!(resolve_choice(Some(e2e4), &legal, &mut rng), Some(e2e4));

        let board = game.board();
        let illegal = Move::new(
            Square::from_name("e2").expect("square"),
            Square::from_name("e5").expect("square"),
            board,
        )
        .expect("e2 holds a pawn");
        let fallback = resolve_choice(Some(illegal), &legal, &mut rng).expect("fallback move");
        assert!(legal.contains(&fallback));

        let declined = resolve_choice(None, &legal, &mut rng).expect("fallback move");
        assert!(legal.contains(&declined));

        assert_eq!(resolve_choice(Some(e2e4), &[], &mut rng), None);
    }
}
