//! Full legal move generation pipeline.
//!
//! Runs the check/pin scan, dispatches per-piece pseudo-legal generation
//! (already pin-constrained), then filters for check evasion and king safety.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    check_for_pins_and_checks, is_king_in_check, Check, CheckInfo,
};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Legal moves together with the scan they were filtered against.
#[derive(Debug, Clone, Default)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub check_info: CheckInfo,
}

/// Pseudo-legal moves for the side to move, in row-major board order.
pub fn generate_pseudo_legal_moves(game_state: &GameState, check_info: &CheckInfo) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut out = Vec::<Move>::with_capacity(64);

    for (from, piece) in game_state.board().pieces() {
        if piece.color != side {
            continue;
        }
        let pin = check_info.pin_direction(from);

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, pin, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, pin, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, pin, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, pin, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, pin, &mut out),
            PieceKind::King => {
                generate_king_moves(game_state, from, &mut out);
                generate_castle_moves(game_state, from, &mut out);
            }
        }
    }

    out
}

/// Pure legal move generation; reads `game_state` and changes nothing.
pub fn generate_legal_moves(game_state: &GameState) -> LegalMoves {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let king_square = game_state.king_square(side);
    let check_info = check_for_pins_and_checks(board, side, king_square);

    let mut moves = if check_info.is_double_check() {
        let mut out = Vec::<Move>::with_capacity(8);
        generate_king_moves(game_state, king_square, &mut out);
        out
    } else {
        generate_pseudo_legal_moves(game_state, &check_info)
    };

    if let [check] = check_info.checks.as_slice() {
        let valid_squares = block_squares(king_square, *check);
        // En passant was already played out against the king during
        // generation, which covers capturing a checking pawn.
        moves.retain(|mv| {
            mv.piece_moved().kind == PieceKind::King
                || mv.is_en_passant()
                || valid_squares.contains(&mv.end())
        });
    }

    moves.retain(|mv| {
        mv.piece_moved().kind != PieceKind::King || mv.is_castle() || king_step_is_safe(board, mv)
    });

    LegalMoves { moves, check_info }
}

/// Squares that answer a single check without moving the king: from the
/// king up to and including the checker. A knight offset reaches its
/// checker in one step, so a knight check yields just the knight's square.
pub fn block_squares(king_square: Square, check: Check) -> Vec<Square> {
    let mut squares = Vec::with_capacity(7);
    for distance in 1..8 {
        let Some(square) = king_square.step(check.direction, distance) else {
            break;
        };
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}

/// Plays the king step on a scratch board so that lines through the king's
/// origin square are seen as open.
fn king_step_is_safe(board: &Board, mv: &Move) -> bool {
    let mut scratch = *board;
    scratch.set(mv.start(), None);
    scratch.set(mv.end(), Some(mv.piece_moved()));
    !is_king_in_check(&scratch, mv.piece_moved().color, mv.end())
}
