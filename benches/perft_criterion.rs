use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mailbox_chess::game_state::chess_types::{Board, CastlingRights, Color};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rows: [&'static str; 8],
    side: Color,
    rights: CastlingRights,
    expected_nodes: &'static [u64],
}

const STARTPOS_ROWS: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bp bp bp bp bp bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wp wp wp wp wp wp wp wp",
    "wR wN wB wQ wK wB wN wR",
];

const KIWIPETE_ROWS: [&str; 8] = [
    "bR -- -- -- bK -- -- bR",
    "bp -- bp bp bQ bp bB --",
    "bB bN -- -- bp bN bp --",
    "-- -- -- wp wN -- -- --",
    "-- bp -- -- wp -- -- --",
    "-- -- wN -- -- wQ -- bp",
    "wp wp wp wB wB wp wp wp",
    "wR -- -- -- wK -- -- wR",
];

const ROOK_ENDGAME_ROWS: [&str; 8] = [
    "-- -- -- -- -- -- -- --",
    "-- -- bp -- -- -- -- --",
    "-- -- -- bp -- -- -- --",
    "wK wp -- -- -- -- -- bR",
    "-- wR -- -- -- bp -- bK",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- wp -- wp --",
    "-- -- -- -- -- -- -- --",
];

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        rows: STARTPOS_ROWS,
        side: Color::White,
        rights: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        rows: KIWIPETE_ROWS,
        side: Color::White,
        rights: CastlingRights::ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        rows: ROOK_ENDGAME_ROWS,
        side: Color::White,
        rights: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812],
    },
];

// Depths below are free of promotions, so queen-only promotion still matches
// the published counts.
const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        rows: STARTPOS_ROWS,
        side: Color::White,
        rights: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        rows: KIWIPETE_ROWS,
        side: Color::White,
        rights: CastlingRights::ALL,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "rook_endgame",
        rows: ROOK_ENDGAME_ROWS,
        side: Color::White,
        rights: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn suite_is_standard() -> bool {
    matches!(
        std::env::var("MAILBOX_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if suite_is_standard() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let board = Board::from_code_rows(&case.rows).expect("benchmark board should parse");
        let game = GameState::from_position(board, case.side, case.rights, None)
            .expect("benchmark position should be valid");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&mut warmup_game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
