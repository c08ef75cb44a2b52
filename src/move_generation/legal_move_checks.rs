//! Check, pin and attacked-square detection.
//!
//! Everything here is a pure function of the board; nothing reads or writes
//! `GameState` flags, so the same scans serve `get_valid_moves`, castling
//! and king-step filtering without interfering with one another.

use crate::game_state::chess_rules::{KNIGHT_OFFSETS, QUEEN_DIRECTIONS};
use crate::game_state::chess_types::*;

/// An allied piece that may only move along `direction` (king to pinner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece giving check. `direction` points from the king towards it;
/// for knights it is the knight offset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    #[inline]
    pub fn pin_direction(&self, square: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.direction)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Whether an `attacker` standing `distance` squares from a target along
/// `direction` (target towards attacker) hits that target.
#[inline]
fn attacks_along(attacker: Piece, direction: Direction, distance: i8) -> bool {
    match attacker.kind {
        PieceKind::Rook => direction.is_orthogonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1
                && direction.is_diagonal()
                && direction.d_row == -attacker.color.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Scans outward from `king_square` for checks and pins against `side`.
pub fn check_for_pins_and_checks(board: &Board, side: Color, king_square: Square) -> CheckInfo {
    let mut info = CheckInfo::default();

    for direction in QUEEN_DIRECTIONS {
        let mut possible_pin: Option<Square> = None;

        for distance in 1..8 {
            let Some(square) = king_square.step(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == side {
                if possible_pin.is_some() {
                    break;
                }
                possible_pin = Some(square);
                continue;
            }

            if attacks_along(piece, direction, distance) {
                match possible_pin {
                    None => {
                        info.in_check = true;
                        info.checks.push(Check { square, direction });
                    }
                    Some(pinned) => info.pins.push(Pin {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    let enemy_knight = Piece::new(side.opposite(), PieceKind::Knight);
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king_square.step(offset, 1) {
            if board.get(square) == Some(enemy_knight) {
                info.in_check = true;
                info.checks.push(Check {
                    square,
                    direction: offset,
                });
            }
        }
    }

    info
}

/// Raw attack coverage: is `square` hit by any piece of `attacker`?
///
/// Pawns count for their diagonals whether or not the target is occupied,
/// and whether `attacker` is itself in check plays no part.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    for direction in QUEEN_DIRECTIONS {
        for distance in 1..8 {
            let Some(target) = square.step(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(target) else {
                continue;
            };
            if piece.color == attacker && attacks_along(piece, direction, distance) {
                return true;
            }
            break;
        }
    }

    let knight = Piece::new(attacker, PieceKind::Knight);
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|offset| square.step(*offset, 1))
        .any(|target| board.get(target) == Some(knight))
}

#[inline]
pub fn is_king_in_check(board: &Board, side: Color, king_square: Square) -> bool {
    is_square_attacked(board, king_square, side.opposite())
}
