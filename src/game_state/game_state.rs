//! Mutable game aggregate.
//!
//! `GameState` owns the board, the side to move, cached king squares,
//! castling rights, the en-passant target, the per-ply history and the move
//! log. It is mutated only through `make_move` / `undo_move`; the check scan
//! and terminal flags are refreshed by every `get_valid_moves` call.
//!
//! The type is `Clone + Send` and carries no interior mutability: a search
//! worker gets its own clone rather than a shared handle.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_last_move};
use crate::move_generation::legal_move_checks::{is_square_attacked, Check, CheckInfo, Pin};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index()`.
    pub(crate) king_squares: [Square; 2],
    pub(crate) check_info: CheckInfo,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    /// Seeded with the initial snapshot; one more entry per applied move.
    pub(crate) history: Vec<UndoState>,
    pub(crate) move_log: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, all castling rights held.
    pub fn new_game() -> Self {
        Self::with_kings(
            Board::starting_position(),
            Color::White,
            [Square::new(7, 4), Square::new(0, 4)],
            CastlingRights::ALL,
            None,
        )
    }

    /// Custom position. Requires exactly one king per color and an
    /// en-passant target that matches the board; everything else (pawns on
    /// back ranks, rights without rooks, etc.) is the caller's
    /// responsibility.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;
        if let Some(target) = en_passant_target {
            check_en_passant_target(&board, side_to_move, target)?;
        }
        Ok(Self::with_kings(
            board,
            side_to_move,
            [white_king, black_king],
            castling_rights,
            en_passant_target,
        ))
    }

    fn with_kings(
        board: Board,
        side_to_move: Color,
        king_squares: [Square; 2],
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        Self {
            board,
            side_to_move,
            king_squares,
            check_info: CheckInfo::default(),
            checkmate: false,
            stalemate: false,
            en_passant_target,
            castling_rights,
            history: vec![UndoState {
                en_passant_target,
                castling_rights,
            }],
            move_log: Vec::new(),
        }
    }

    /// All legal moves for the side to move.
    ///
    /// Refreshes `in_check`, `pins`, `checks`, `checkmate` and `stalemate`.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let legal = generate_legal_moves(self);
        let no_moves = legal.moves.is_empty();

        self.checkmate = no_moves && legal.check_info.in_check;
        self.stalemate = no_moves && !legal.check_info.in_check;
        self.check_info = legal.check_info;

        if self.checkmate {
            debug!("checkmate: {} has no legal moves", self.side_to_move);
        } else if self.stalemate {
            debug!("stalemate: {} has no legal moves", self.side_to_move);
        }

        legal.moves
    }

    /// Applies `mv`, which must come from `get_valid_moves()` on this exact
    /// state. Any other move leaves the board in an unspecified state.
    pub fn make_move(&mut self, mv: Move) {
        apply_move(self, mv);
    }

    /// Takes back the last move and returns it. Does nothing on an empty log.
    pub fn undo_move(&mut self) -> Option<Move> {
        revert_last_move(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// As of the last `get_valid_moves` call; `undo_move` clears the scan.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.check_info.in_check
    }

    #[inline]
    pub fn pins(&self) -> &[Pin] {
        &self.check_info.pins
    }

    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.check_info.checks
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// Whether `attacker` covers `square` on the current board.
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        is_square_attacked(&self.board, square, attacker)
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let kings: Vec<Square> = board.find(Piece::new(color, PieceKind::King)).collect();
    match kings.as_slice() {
        [square] => Ok(*square),
        _ => Err(ChessError::KingCount {
            color,
            count: kings.len(),
        }),
    }
}

/// The side that just moved is `side_to_move.opposite()`; its pawn must sit
/// one step past the empty target, with the square it came from empty too.
fn check_en_passant_target(
    board: &Board,
    side_to_move: Color,
    target: Square,
) -> ChessResult<()> {
    let advanced = side_to_move.opposite();
    let forward = Direction::new(advanced.pawn_direction(), 0);
    let expected_row = advanced.pawn_home_row() as i8 + advanced.pawn_direction();

    let valid = target.row as i8 == expected_row
        && board.is_empty(target)
        && target.step(forward.reversed(), 1).is_some_and(|sq| board.is_empty(sq))
        && target
            .step(forward, 1)
            .is_some_and(|sq| board.get(sq) == Some(Piece::new(advanced, PieceKind::Pawn)));

    if valid {
        Ok(())
    } else {
        Err(ChessError::InvalidEnPassantTarget {
            square: target.name(),
        })
    }
}
