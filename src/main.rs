//! Engine-vs-engine match runner.
//!
//! Run with:
//! `cargo run --release -- --white greedy --black random --max-plies 200 --seed 7`
//! `RUST_LOG=debug cargo run --release` for per-move logging.

use std::time::Duration;

use mailbox_chess::engines::engine_greedy::GreedyEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::errors::ChessResult;
use mailbox_chess::utils::engine_match_harness::{play_match, MatchConfig};
use mailbox_chess::utils::render_game_state::render_game_state;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_u64(flag: &str) -> Option<u64> {
    arg_value(flag).and_then(|v| v.parse::<u64>().ok())
}

fn parse_arg_u16(flag: &str, default: u16) -> u16 {
    arg_value(flag)
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

fn build_engine(kind: &str, seed: Option<u64>) -> Box<dyn Engine> {
    match (kind, seed) {
        ("greedy", Some(seed)) => Box::new(GreedyEngine::with_seed(seed)),
        ("greedy", None) => Box::new(GreedyEngine::new()),
        (_, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (_, None) => Box::new(RandomEngine::new()),
    }
}

fn main() -> ChessResult<()> {
    env_logger::init();

    let defaults = MatchConfig::default();
    let seed = parse_arg_u64("--seed");
    let config = MatchConfig {
        max_plies: parse_arg_u16("--max-plies", defaults.max_plies),
        movetime: parse_arg_u64("--movetime-ms")
            .map(Duration::from_millis)
            .unwrap_or(defaults.movetime),
        seed,
    };

    let white_kind = arg_value("--white").unwrap_or_else(|| "random".to_owned());
    let black_kind = arg_value("--black").unwrap_or_else(|| "random".to_owned());
    let white = build_engine(&white_kind, seed);
    let black = build_engine(&black_kind, seed.map(|s| s.wrapping_add(1)));

    let result = play_match(white, black, &config)?;

    println!("{}", render_game_state(&result.final_state));
    println!();
    let moves: Vec<String> = result
        .played_moves
        .iter()
        .map(|mv| mv.to_string())
        .collect();
    for (number, pair) in moves.chunks(2).enumerate() {
        println!("{}. {}", number + 1, pair.join(" "));
    }
    println!();
    println!("{}", result.report());
    Ok(())
}
