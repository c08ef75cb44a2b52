//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other from the initial
//! position, each move searched on a background worker with a time limit.
//! An engine that runs out of time, declines, or names an illegal move has a
//! uniformly random legal move played for it.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{info, warn};

use crate::engines::engine_trait::{engine_rng, Engine};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::threading::{resolve_choice, SearchStatus, SearchWorker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub movetime: Duration,
    /// Seeds the fallback move picker.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            movetime: Duration::from_millis(1000),
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<Move>,
    /// Plies where the engine's answer was replaced by a random move.
    pub fallback_moves: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} fallbacks={} white_ms={:.3} black_ms={:.3} started={} finished={}",
            self.outcome,
            self.played_moves.len(),
            self.fallback_moves,
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0,
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.finished_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

/// Play a single engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let started_at = Local::now();
    info!(
        "match start: {} (white) vs {} (black), max_plies={}",
        engine_white.name(),
        engine_black.name(),
        config.max_plies
    );

    let mut seats: [Option<Box<dyn Engine>>; 2] = [Some(engine_white), Some(engine_black)];
    for engine in seats.iter_mut().flatten() {
        engine.new_game();
    }

    let mut rng = engine_rng(config.seed);
    let mut state = GameState::new_game();
    let mut fallback_moves = 0u32;
    let mut total_time_ns = [0u128; 2];
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        let legal_moves = state.get_valid_moves();
        if state.checkmate() {
            outcome = match state.side_to_move() {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            };
            break;
        }
        if state.stalemate() {
            outcome = MatchOutcome::DrawStalemate;
            break;
        }

        let mover = state.side_to_move();
        let engine = seats[mover.index()]
            .take()
            .ok_or_else(|| ChessError::WorkerDisconnected {
                engine: mover.to_string(),
            })?;

        let started = Instant::now();
        let worker = SearchWorker::spawn(engine, &state);
        let choice = match worker.wait_timeout(config.movetime)? {
            SearchStatus::Finished(choice) => choice,
            SearchStatus::Pending => {
                warn!(
                    "{} ran out of time after {:?}",
                    worker.engine_name(),
                    config.movetime
                );
                None
            }
        };
        seats[mover.index()] = Some(worker.finish()?);
        total_time_ns[mover.index()] += started.elapsed().as_nanos();

        if !choice.is_some_and(|mv| legal_moves.contains(&mv)) {
            fallback_moves += 1;
        }
        let Some(mv) = resolve_choice(choice, &legal_moves, &mut rng) else {
            break;
        };
        state.make_move(mv);
    }

    // The ply limit may land exactly on a finished game.
    if outcome == MatchOutcome::DrawMaxPlies {
        state.get_valid_moves();
        if state.checkmate() {
            outcome = match state.side_to_move() {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            };
        } else if state.stalemate() {
            outcome = MatchOutcome::DrawStalemate;
        }
    }

    let result = MatchResult {
        outcome,
        played_moves: state.move_log().to_vec(),
        final_state: state,
        fallback_moves,
        white_total_time_ns: total_time_ns[Color::White.index()],
        black_total_time_ns: total_time_ns[Color::Black.index()],
        started_at,
        finished_at: Local::now(),
    };
    info!("match end: {}", result.report());
    Ok(result)
}
