//! Error types

use crate::geometry::Position;
use crate::pieces::Color;

/// Why a submitted move was rejected
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("a move path needs at least two squares, got {0}")]
    PathTooShort(usize),

    #[error("no piece at {0}")]
    NoPieceAtSource(Position),

    #[error("piece at {from} belongs to {piece}, but it is {turn}'s turn")]
    WrongColor {
        from: Position,
        piece: Color,
        turn: Color,
    },

    #[error("destination {0} is not empty")]
    DestinationOccupied(Position),

    #[error("move {from} -> {to} is not diagonal")]
    NotDiagonal { from: Position, to: Position },

    #[error("a capture with the maximum number of pieces is mandatory")]
    JumpMandatory,

    #[error("no legal move from {from} to {to}")]
    NoMatchingMove { from: Position, to: Position },

    #[error("{count} capture chains from {from} start with a jump to {to}; submit the full path")]
    AmbiguousChain {
        from: Position,
        to: Position,
        count: usize,
    },
}

/// Board construction and move application failures
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {0} is outside the board")]
    OffBoard(Position),

    #[error("square {0} is listed twice")]
    DuplicateSquare(Position),

    #[error("unsupported board dimensions {rows}x{columns}")]
    UnsupportedSize { rows: usize, columns: usize },

    #[error("diagram row {row}: {reason}")]
    BadDiagram { row: usize, reason: String },

    #[error("cannot parse position '{0}', expected 'row,col'")]
    BadPosition(String),

    #[error("cannot apply move: no piece at {0}")]
    EmptySource(Position),

    #[error("cannot apply move: {0} is occupied")]
    OccupiedTarget(Position),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Violations of the [`crate::Move`] invariants
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move path needs at least two squares, got {0}")]
    PathTooShort(usize),

    #[error("a jump captures one piece per leg: {captured} captures on {legs} legs")]
    CaptureCountMismatch { captured: usize, legs: usize },
}
