//! Errors used throughout the chess engine.
//!
//! Move generation, check detection and make/undo are total and never
//! produce these. They are reserved for the edges of the crate: building a
//! custom position, decoding cell codes or square names, matching typed moves
//! and running engine matches.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A board cell code was not `--` or a color/kind pair like `wK`.
    #[error("invalid piece code `{code}`")]
    InvalidPieceCode { code: String },

    /// A board row did not contain exactly eight cells.
    #[error("board row {row} has {cells} cells, expected 8")]
    InvalidRowWidth { row: usize, cells: usize },

    /// Square names are a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square name `{name}`")]
    InvalidSquareName { name: String },

    /// Coordinate move text such as `e2e4` could not be parsed.
    #[error("invalid move notation `{notation}`")]
    InvalidMoveNotation { notation: String },

    /// A move that parses but is not among the legal moves of the position.
    #[error("move `{notation}` is not legal in this position")]
    IllegalMove { notation: String },

    /// Custom positions must carry exactly one king per color.
    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// An en-passant target must be an empty square directly behind an enemy
    /// pawn that could just have advanced two squares.
    #[error("en-passant target {square} does not follow a double pawn advance")]
    InvalidEnPassantTarget { square: String },

    /// A search worker hung up without delivering a result.
    #[error("search worker for `{engine}` disconnected")]
    WorkerDisconnected { engine: String },

    /// A background thread panicked before returning its result.
    #[error("{task} thread panicked")]
    WorkerPanicked { task: String },
}

/// Result type alias for chess engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
