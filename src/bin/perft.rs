//! Perft node counter.
//!
//! Run with:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --depth 3 --divide`
//! `cargo run --release --bin perft -- --depth 5 --threads`

use std::time::Instant;

use mailbox_chess::errors::ChessResult;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::{divide, perft, perft_multi_threaded};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v;
            }
        }
    }
    default
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|a| a == flag)
}

fn main() -> ChessResult<()> {
    env_logger::init();

    let depth = parse_arg_u8("--depth", 3);
    let mut game = GameState::new_game();

    if has_flag("--divide") {
        let split = divide(&mut game, depth);
        for (mv, nodes) in &split {
            println!("{}: {}", mv.chess_notation(), nodes);
        }
        let total: usize = split.iter().map(|(_, n)| n).sum();
        println!("\nmoves={} nodes={}", split.len(), total);
        return Ok(());
    }

    let started = Instant::now();
    let counts = if has_flag("--threads") {
        perft_multi_threaded(&game, depth)?
    } else {
        perft(&mut game, depth)
    };
    let elapsed = started.elapsed();
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);

    println!(
        "depth={} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    println!("elapsed_ms={:.3} nps={:.0}", elapsed.as_secs_f64() * 1000.0, nps);
    Ok(())
}
