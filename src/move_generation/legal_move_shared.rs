use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// A pinned piece may only travel along its pin line, in either sense.
#[inline]
pub fn respects_pin(pin: Option<Direction>, direction: Direction) -> bool {
    pin.is_none_or(|line| direction.is_along(line))
}

/// Ray-casts from `from` along each of `directions` for the slider `piece`.
///
/// Empty squares are emitted and passed through, the first enemy piece is
/// emitted and stops the ray, the first allied piece stops it unemitted.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !respects_pin(pin, direction) {
            continue;
        }

        for distance in 1..8 {
            let Some(to) = from.step(direction, distance) else {
                break;
            };
            match board.get(to) {
                None => out.push(Move::from_piece(from, to, piece, board)),
                Some(target) if target.color != piece.color => {
                    out.push(Move::from_piece(from, to, piece, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Emits single-step moves to each of `offsets` that do not land on an
/// allied piece.
pub fn generate_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[Direction],
    out: &mut Vec<Move>,
) {
    for &offset in offsets {
        let Some(to) = from.step(offset, 1) else {
            continue;
        };
        if board.color_at(to) != Some(piece.color) {
            out.push(Move::from_piece(from, to, piece, board));
        }
    }
}
