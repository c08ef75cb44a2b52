use crate::game_state::chess_types::*;

/// Per-ply snapshot of the auxiliary state that cannot be recomputed from
/// the board when a move is undone.
///
/// The history starts with the snapshot of the initial position and gains
/// one entry per `make_move`, so its top always describes the live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
}
